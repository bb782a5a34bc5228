//! Position tree nodes, stored in an arena so transpositions share children

use std::{collections::BTreeMap, ops::Index};

use crate::tictactoe::{Position, Side, score_of};

/// Index of a node inside a [`NodeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A scored position together with its continuations.
///
/// Internal nodes are valued as the plain average of their children, with
/// every continuation weighted equally whoever is to move. This is not
/// minimax. Circle-to-move nodes additionally record the reply leading to
/// the lowest-scoring child.
#[derive(Debug, Clone)]
pub struct PositionNode {
    position: Position,
    who_moves: Side,
    children: BTreeMap<usize, NodeId>,
    score: f64,
    recommended_move: Option<usize>,
}

impl PositionNode {
    /// Build a node, scoring it from `children` already present in `arena`.
    ///
    /// With no children the node is a leaf and is scored by
    /// [`score_of`]. Child ids must come from `arena`.
    pub fn new(
        position: Position,
        who_moves: Side,
        children: BTreeMap<usize, NodeId>,
        arena: &NodeArena,
    ) -> Self {
        if children.is_empty() {
            return PositionNode {
                position,
                who_moves,
                children,
                score: score_of(&position),
                recommended_move: None,
            };
        }

        let total: f64 = children.values().map(|&id| arena[id].score).sum();
        let score = total / children.len() as f64;

        let recommended_move = match who_moves {
            // Ascending scan; equal scores keep the earlier cell
            Side::Circle => children
                .iter()
                .map(|(&cell, &id)| (cell, arena[id].score))
                .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
                .map(|(cell, _)| cell),
            Side::Cross => None,
        };

        PositionNode {
            position,
            who_moves,
            children,
            score,
            recommended_move,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn who_moves(&self) -> Side {
        self.who_moves
    }

    /// Children keyed by the cell played to reach them
    pub fn children(&self) -> &BTreeMap<usize, NodeId> {
        &self.children
    }

    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Expected outcome in [-1, 1]; positive favours Cross
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Suggested cell for Circle, set only on non-terminal Circle-to-move nodes
    pub fn recommended_move(&self) -> Option<usize> {
        self.recommended_move
    }
}

/// Append-only node storage
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<PositionNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: PositionNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&PositionNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PositionNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }
}

impl Index<NodeId> for NodeArena {
    type Output = PositionNode;

    fn index(&self, id: NodeId) -> &PositionNode {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::CellState::{self, Circle as O, Cross as X, Empty as E};

    const EPSILON: f64 = 1e-12;

    fn board(cells: [CellState; 9]) -> Position {
        Position::from_cells(&cells).unwrap()
    }

    fn leaf(arena: &mut NodeArena, cells: [CellState; 9], who_moves: Side) -> NodeId {
        let node = PositionNode::new(board(cells), who_moves, BTreeMap::new(), arena);
        arena.push(node)
    }

    #[test]
    fn test_leaf_is_scored_by_outcome() {
        let mut arena = NodeArena::new();
        let cross_win = leaf(&mut arena, [X, X, X, O, O, E, E, E, E], Side::Circle);
        let circle_win = leaf(&mut arena, [O, X, X, O, X, E, O, E, E], Side::Cross);
        let draw = leaf(&mut arena, [X, O, X, X, O, O, O, X, X], Side::Circle);

        assert_eq!(arena[cross_win].score(), 1.0);
        assert_eq!(arena[circle_win].score(), -1.0);
        assert_eq!(arena[draw].score(), 0.0);
        assert!(arena[cross_win].is_terminal());
        assert_eq!(arena[cross_win].recommended_move(), None);
    }

    #[test]
    fn test_internal_score_is_mean_of_children() {
        let mut arena = NodeArena::new();
        let win = leaf(&mut arena, [X, X, X, O, O, E, E, E, E], Side::Circle);
        let draw = leaf(&mut arena, [X, O, X, X, O, O, O, X, X], Side::Circle);
        let loss = leaf(&mut arena, [O, O, O, X, X, E, X, E, E], Side::Cross);

        let children = BTreeMap::from([(0, win), (1, draw), (2, win), (5, loss)]);
        let node = PositionNode::new(Position::new(), Side::Cross, children, &arena);

        assert!((node.score() - 0.25).abs() < EPSILON);
        assert_eq!(node.recommended_move(), None);
    }

    #[test]
    fn test_circle_recommends_lowest_child() {
        let mut arena = NodeArena::new();
        let win = leaf(&mut arena, [X, X, X, O, O, E, E, E, E], Side::Circle);
        let loss = leaf(&mut arena, [O, O, O, X, X, E, X, E, E], Side::Cross);

        let children = BTreeMap::from([(1, win), (6, loss), (7, win)]);
        let node = PositionNode::new(Position::new(), Side::Circle, children, &arena);

        assert_eq!(node.recommended_move(), Some(6));
        assert!((node.score() - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_circle_ties_keep_lowest_cell() {
        let mut arena = NodeArena::new();
        let draw = leaf(&mut arena, [X, O, X, X, O, O, O, X, X], Side::Circle);
        let win = leaf(&mut arena, [X, X, X, O, O, E, E, E, E], Side::Circle);

        let children = BTreeMap::from([(8, draw), (2, win), (3, draw), (5, draw)]);
        let node = PositionNode::new(Position::new(), Side::Circle, children, &arena);

        assert_eq!(node.recommended_move(), Some(3));
    }

    #[test]
    fn test_arena_ids_are_sequential() {
        let mut arena = NodeArena::new();
        assert!(arena.is_empty());
        let first = leaf(&mut arena, [E; 9], Side::Cross);
        let second = leaf(&mut arena, [X, E, E, E, E, E, E, E, E], Side::Circle);

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(second).map(PositionNode::who_moves), Some(Side::Circle));
        assert_eq!(arena.iter().count(), 2);
    }
}
