//! Tic-Tac-Toe board, position keys and outcome scoring

pub mod board;
pub mod encoding;
pub mod lines;

pub use board::{CellState, Position, Side, TOTAL_CELLS};
pub use encoding::{CanonicalKey, KEY_SPACE, POWERS_OF_THREE};
pub use lines::{WINNING_LINES, is_winner, score_of};
