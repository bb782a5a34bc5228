//! Exhaustive position graph and Circle's precomputed replies
//!
//! Every board reachable from the empty position (Cross first) is built
//! once and scored as the average of its continuations. For each
//! Circle-to-move board the reply with the lowest average is recorded.

pub mod builder;
pub mod tree;

pub use builder::{BuildStats, RecommendationTable, TreeBuilder, recommended_moves};
pub use tree::{NodeArena, NodeId, PositionNode};
