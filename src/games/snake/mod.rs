//! Snake - retro arcade edition.

mod app;
mod game;

pub use app::run;
pub use game::{BOARD_H, BOARD_W, Direction, Point, SnakeGame, Step};
