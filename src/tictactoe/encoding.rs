//! Base-3 position keys used by the transposition table

use std::fmt;

use super::board::{Position, TOTAL_CELLS};

/// Powers of three for cells 0..9
pub const POWERS_OF_THREE: [u16; TOTAL_CELLS] = [1, 3, 9, 27, 81, 243, 729, 2187, 6561];

/// Number of distinct keys (3^9)
pub const KEY_SPACE: u16 = 19_683;

/// A position read as a nine-digit base-3 number, cell 0 being the least
/// significant digit.
///
/// Distinct cell arrays always get distinct keys. Keys are only ever used
/// for lookup; nothing decodes them back into positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(u16);

impl CanonicalKey {
    /// Encode a position
    pub fn of(position: &Position) -> Self {
        let n = position
            .cells()
            .iter()
            .zip(POWERS_OF_THREE)
            .map(|(cell, power)| cell.value() * power)
            .sum();
        CanonicalKey(n)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::tictactoe::CellState;

    fn position_from_index(mut index: usize) -> Position {
        let mut cells = [CellState::Empty; TOTAL_CELLS];
        for cell in cells.iter_mut() {
            *cell = match index % 3 {
                0 => CellState::Empty,
                1 => CellState::Circle,
                _ => CellState::Cross,
            };
            index /= 3;
        }
        Position::from_cells(&cells).unwrap()
    }

    #[test]
    fn test_empty_board_encodes_to_zero() {
        assert_eq!(CanonicalKey::of(&Position::new()).value(), 0);
    }

    #[test]
    fn test_single_marks() {
        let cross_first = Position::new().make_move(0, CellState::Cross).unwrap();
        assert_eq!(CanonicalKey::of(&cross_first).value(), 2);

        let circle_last = Position::new().make_move(8, CellState::Circle).unwrap();
        assert_eq!(CanonicalKey::of(&circle_last).value(), 6561);

        let full_cross = Position::from_cells(&[CellState::Cross; 9]).unwrap();
        assert_eq!(CanonicalKey::of(&full_cross).value(), KEY_SPACE - 1);
    }

    #[test]
    fn test_encoding_is_injective_over_all_arrays() {
        let mut seen = HashSet::new();
        for index in 0..KEY_SPACE as usize {
            let key = CanonicalKey::of(&position_from_index(index));
            assert_eq!(key.value() as usize, index);
            assert!(seen.insert(key), "duplicate key {key}");
        }
        assert_eq!(seen.len(), KEY_SPACE as usize);
    }

    #[test]
    fn test_powers_table() {
        for (i, power) in POWERS_OF_THREE.iter().enumerate() {
            assert_eq!(*power as u32, 3u32.pow(i as u32));
        }
    }
}
