//! Error types for the gameplan crate

use thiserror::Error;

use crate::tictactoe::CellState;

/// Main error type for the gameplan crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot initialize position with {got} cells (expected {expected})")]
    InvalidCellCount { expected: usize, got: usize },

    #[error("cannot put {content:?} in cell {cell}, it already contains {occupant:?}")]
    CellOccupied {
        cell: usize,
        content: CellState,
        occupant: CellState,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("cell {cell} is out of bounds (must be 0-8)")]
    InvalidCell { cell: usize },

    #[error("illegal move generated at cell {cell} while building the tree: {context}")]
    IllegalGeneratedMove { cell: usize, context: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
