//! Precomputed tic-tac-toe replies
//!
//! This crate provides:
//! - A copy-on-write board with base-3 position keys
//! - Terminal outcome scoring over the eight winning lines
//! - A memoized builder that walks every reachable position and records
//!   Circle's lowest-expectation reply
//! - Rendering of the resulting table and the command-line front end

pub mod cli;
pub mod error;
pub mod plan;
pub mod render;
pub mod tictactoe;

pub use error::{Error, Result};
pub use plan::{RecommendationTable, TreeBuilder, recommended_moves};
pub use tictactoe::{CanonicalKey, CellState, Position, Side};
