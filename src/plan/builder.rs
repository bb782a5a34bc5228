//! Memoized construction of the full position graph and the reply table

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, instrument, trace};

use super::tree::{NodeArena, NodeId, PositionNode};
use crate::{
    Error, Result,
    tictactoe::{CanonicalKey, Position, Side, score_of},
};

/// Recommended Circle reply for every Circle-to-move position, in key order
pub type RecommendationTable = BTreeMap<CanonicalKey, usize>;

/// Counters describing a finished build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildStats {
    /// Distinct positions built
    pub nodes: usize,
    /// Positions that are full or already won
    pub terminal_nodes: usize,
    /// Lookups answered by the transposition table
    pub memo_hits: usize,
    /// Entries the reply table would contain
    pub recommendations: usize,
}

/// Expands positions depth-first, sharing one node per distinct board.
///
/// The memo is checked before a position is expanded and filled after all
/// of its children exist, so every board is built exactly once no matter
/// how many move orders reach it.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    arena: NodeArena,
    memo: HashMap<CanonicalKey, NodeId>,
    root: Option<NodeId>,
    memo_hits: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from the empty board with Cross to move.
    ///
    /// Calling this again reuses the existing nodes.
    pub fn build(&mut self) -> Result<NodeId> {
        if let Some(root) = self.root {
            return Ok(root);
        }
        let root = self.build_tree(Position::new(), Side::Cross)?;
        self.root = Some(root);
        Ok(root)
    }

    /// Build (or fetch) the node for `position` with `who_moves` to play.
    ///
    /// Moves alternate from here on, but nothing checks that `who_moves`
    /// fits the marks already on the board.
    pub fn build_tree(&mut self, position: Position, who_moves: Side) -> Result<NodeId> {
        let key = CanonicalKey::of(&position);
        if let Some(&id) = self.memo.get(&key) {
            trace!(%key, "transposition hit");
            self.memo_hits += 1;
            return Ok(id);
        }

        let node = self.build_tree_uncached(position, who_moves)?;
        let id = self.arena.push(node);
        self.memo.insert(key, id);
        Ok(id)
    }

    fn build_tree_uncached(&mut self, position: Position, who_moves: Side) -> Result<PositionNode> {
        if !position.has_empty_cells() || score_of(&position) != 0.0 {
            return Ok(PositionNode::new(
                position,
                who_moves,
                BTreeMap::new(),
                &self.arena,
            ));
        }

        let mut children = BTreeMap::new();
        for cell in position.empty_cells() {
            let next = position
                .make_move(cell, who_moves.mark())
                .map_err(|e| Error::IllegalGeneratedMove {
                    cell,
                    context: format!("expanding {position}: {e}"),
                })?;
            let child = self.build_tree(next, who_moves.opponent())?;
            children.insert(cell, child);
        }

        Ok(PositionNode::new(
            position,
            who_moves,
            children,
            &self.arena,
        ))
    }

    /// Build the full graph and collect Circle's reply for every
    /// non-terminal Circle-to-move position.
    #[instrument(skip(self))]
    pub fn recommended_moves(&mut self) -> Result<RecommendationTable> {
        self.build()?;

        let table: RecommendationTable = self
            .memo
            .iter()
            .filter_map(|(&key, &id)| {
                let node = &self.arena[id];
                match node.who_moves() {
                    Side::Circle => node.recommended_move().map(|cell| (key, cell)),
                    Side::Cross => None,
                }
            })
            .collect();

        debug!(
            nodes = self.arena.len(),
            memo_hits = self.memo_hits,
            entries = table.len(),
            "recommendation table ready"
        );
        Ok(table)
    }

    /// Root node, once [`build`](Self::build) has run
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&PositionNode> {
        self.arena.get(id)
    }

    /// Look up an already built node by board
    pub fn node(&self, position: &Position) -> Option<&PositionNode> {
        self.memo
            .get(&CanonicalKey::of(position))
            .map(|&id| &self.arena[id])
    }

    pub fn stats(&self) -> BuildStats {
        let mut stats = BuildStats {
            nodes: self.arena.len(),
            memo_hits: self.memo_hits,
            ..BuildStats::default()
        };
        for (_, node) in self.arena.iter() {
            if node.is_terminal() {
                stats.terminal_nodes += 1;
            } else if node.who_moves() == Side::Circle {
                stats.recommendations += 1;
            }
        }
        stats
    }
}

/// Compute the reply table with a fresh builder
pub fn recommended_moves() -> Result<RecommendationTable> {
    TreeBuilder::new().recommended_moves()
}
