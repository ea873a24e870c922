pub mod board;
pub mod error;
pub mod game;
pub mod stone;
pub mod territory;
pub mod turn;

/// Side length of the board.
pub const BOARD_SIZE: i32 = 19;

/// Zero-based `(x, y)` = (column, row).
pub type Point = (i32, i32);

pub use board::Board;
pub use error::GoError;
pub use game::{Game, GameState, Stage};
pub use stone::{CellState, Stone};
pub use territory::Score;
pub use turn::Move;
