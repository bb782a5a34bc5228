//! Board representation: cell contents, the side to move, and positions

use std::{fmt, ops::Index, str::FromStr};

/// Number of cells on the 3x3 board
pub const TOTAL_CELLS: usize = 9;

/// Contents of a single cell.
///
/// The discriminants are the base-3 digits used by
/// [`CanonicalKey`](super::CanonicalKey), so they must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Empty = 0,
    Circle = 1,
    Cross = 2,
}

impl CellState {
    /// Digit value of this cell in the canonical encoding
    pub fn value(self) -> u16 {
        self as u16
    }

    pub fn to_char(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Circle => 'O',
            CellState::Cross => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<CellState> {
        match c {
            '.' | '-' => Some(CellState::Empty),
            'O' | 'o' | '0' => Some(CellState::Circle),
            'X' | 'x' => Some(CellState::Cross),
            _ => None,
        }
    }
}

/// The side that is to move at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Circle,
    Cross,
}

impl Side {
    /// Get the other side
    pub fn opponent(self) -> Side {
        match self {
            Side::Circle => Side::Cross,
            Side::Cross => Side::Circle,
        }
    }

    /// The mark this side places on the board
    pub fn mark(self) -> CellState {
        match self {
            Side::Circle => CellState::Circle,
            Side::Cross => CellState::Cross,
        }
    }
}

/// An immutable 3x3 board, indexed row-major from 0 to 8.
///
/// Positions are never edited in place: [`Position::make_move`] returns a
/// new value. The type does not track whose turn it is, and it accepts any
/// mark count; keeping moves alternating is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    cells: [CellState; TOTAL_CELLS],
}

impl Position {
    /// Create the empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a position from an explicit cell sequence.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCellCount`](crate::Error::InvalidCellCount) unless
    /// `cells` holds exactly nine entries.
    pub fn from_cells(cells: &[CellState]) -> Result<Self, crate::Error> {
        let cells: [CellState; TOTAL_CELLS] =
            cells
                .try_into()
                .map_err(|_| crate::Error::InvalidCellCount {
                    expected: TOTAL_CELLS,
                    got: cells.len(),
                })?;
        Ok(Position { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, cell: usize) -> CellState {
        self.cells[cell]
    }

    pub fn cells(&self) -> &[CellState; TOTAL_CELLS] {
        &self.cells
    }

    /// True if at least one cell is still empty
    pub fn has_empty_cells(&self) -> bool {
        self.cells.contains(&CellState::Empty)
    }

    /// Empty cell indices in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == CellState::Empty)
            .map(|(i, _)| i)
    }

    /// Place `content` at `cell` and return the resulting position.
    ///
    /// Only the target cell is checked. Neither the mover nor game-over
    /// state is validated here.
    ///
    /// # Errors
    ///
    /// Returns [`CellOccupied`](crate::Error::CellOccupied) if the cell is
    /// not empty, or [`InvalidCell`](crate::Error::InvalidCell) if `cell`
    /// is not on the board.
    #[must_use = "make_move returns a new position; the original is unchanged"]
    pub fn make_move(&self, cell: usize, content: CellState) -> Result<Position, crate::Error> {
        let occupant = *self
            .cells
            .get(cell)
            .ok_or(crate::Error::InvalidCell { cell })?;
        if occupant != CellState::Empty {
            return Err(crate::Error::CellOccupied {
                cell,
                content,
                occupant,
            });
        }

        let mut next = *self;
        next.cells[cell] = content;
        Ok(next)
    }
}

impl Index<usize> for Position {
    type Output = CellState;

    fn index(&self, cell: usize) -> &CellState {
        &self.cells[cell]
    }
}

/// Parses nine cell characters (`X`, `O`, `.`), ignoring whitespace and
/// the `/` row separators produced by `Display`.
impl FromStr for Position {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let cells = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                CellState::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Position::from_cells(&cells)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in chunk {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
