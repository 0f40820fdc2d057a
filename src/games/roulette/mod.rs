//! Single-number roulette with a coin balance.

mod app;
mod game;

pub use app::run;
pub use game::{
    BetError, MAX_NUMBER, MIN_BET, PAYOUT, PocketColor, RouletteGame, Spin, pocket_color, spin,
};
