//! Winning lines and terminal outcome scoring

use super::board::{CellState, Position};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Score for a Cross win
pub const CROSS_WINS: f64 = 1.0;
/// Score for a Circle win
pub const CIRCLE_WINS: f64 = -1.0;
/// Score for a position without a completed line
pub const NO_WINNER: f64 = 0.0;

/// Check if `side` has three in a row
pub fn is_winner(position: &Position, side: CellState) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| position[idx] == side))
}

/// Score a position from Cross's point of view.
///
/// A zero does not mean the game is over: the result only reads as a draw
/// when the caller already knows the position is terminal.
pub fn score_of(position: &Position) -> f64 {
    if is_winner(position, CellState::Cross) {
        CROSS_WINS
    } else if is_winner(position, CellState::Circle) {
        CIRCLE_WINS
    } else {
        NO_WINNER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::CellState::{Circle as O, Cross as X, Empty as E};

    fn board(cells: [CellState; 9]) -> Position {
        Position::from_cells(&cells).unwrap()
    }

    #[test]
    fn test_is_winner_top_row() {
        let position = board([X, X, X, E, E, E, E, E, E]);
        assert!(is_winner(&position, X));
        assert!(!is_winner(&position, O));
    }

    #[test]
    fn test_is_winner_vertical_and_diagonal() {
        let column = board([O, E, E, O, E, E, O, E, E]);
        assert!(is_winner(&column, O));
        assert!(!is_winner(&column, X));

        let anti_diagonal = board([E, E, X, E, X, E, X, E, E]);
        assert!(is_winner(&anti_diagonal, X));
    }

    #[test]
    fn test_empty_is_never_reported_for_lines_of_marks() {
        let position = board([X, X, E, E, E, E, E, E, E]);
        assert!(!is_winner(&position, X));
        assert!(!is_winner(&position, O));
    }

    #[test]
    fn test_score_of_wins() {
        assert_eq!(score_of(&board([X, X, X, E, E, E, E, E, E])), 1.0);
        assert_eq!(score_of(&board([O, E, E, O, E, E, O, E, E])), -1.0);
    }

    #[test]
    fn test_score_of_draw() {
        // X O X
        // X O O
        // O X X
        let draw = board([X, O, X, X, O, O, O, X, X]);
        assert!(!draw.has_empty_cells());
        assert_eq!(score_of(&draw), 0.0);
    }

    #[test]
    fn test_score_of_unfinished_board_is_zero() {
        assert_eq!(score_of(&Position::new()), 0.0);
        assert_eq!(score_of(&board([X, O, E, E, X, E, E, E, E])), 0.0);
    }
}
