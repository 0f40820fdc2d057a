//! Mastermind - crack the 4-digit code.

mod app;
mod game;

pub use app::run;
pub use game::{
    CODE_LEN, DigitRange, Grade, MastermindDifficulty, generate_code, grade,
};
