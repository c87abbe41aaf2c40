//! Decision tree node structures.
//!
//! Uses arena-based allocation with index references (NodeId). Children are
//! stored in a fixed nine-slot array keyed by the cell that was played.

use crate::core::{PieceKind, CELL_COUNT};
use crate::rules::Board;

/// Index into the DecisionTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One reachable board state and the kind due to move in it.
#[derive(Clone, Debug)]
pub struct DecisionNode {
    /// Board at this node.
    pub board: Board,

    /// Kind to move at this node.
    pub mover: PieceKind,

    /// Winner of the board (`Empty` if none).
    pub winner: PieceKind,

    /// Depth in tree (root = 0).
    pub depth: u8,

    /// Child reached by playing each cell (NONE if not a legal move).
    pub children: [NodeId; CELL_COUNT],

    /// Optimal cell for the mover; `None` only at leaves.
    pub best_move: Option<usize>,

    /// Minimax score. Positive favors `B`, negative favors `A`; values
    /// farther from zero are faster wins.
    pub score: i8,
}

impl DecisionNode {
    /// Create an unexpanded node.
    pub fn new(board: Board, mover: PieceKind, depth: u8) -> Self {
        let winner = board.winner();
        Self {
            board,
            mover,
            winner,
            depth,
            children: [NodeId::NONE; CELL_COUNT],
            best_move: None,
            score: 0,
        }
    }

    /// A node with no legal moves: won, or drawn on a full board.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(|c| c.is_none())
    }

    /// Child reached by playing `cell`, if that move exists.
    #[must_use]
    pub fn child(&self, cell: usize) -> Option<NodeId> {
        self.children.get(cell).copied().filter(|c| !c.is_none())
    }

    /// `(cell, child)` pairs in ascending cell order.
    pub fn moves(&self) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_none())
            .map(|(cell, &c)| (cell, c))
    }

    /// Leaf score with a preference for quicker wins.
    #[must_use]
    pub fn terminal_score(winner: PieceKind, depth: u8) -> i8 {
        let depth = depth as i8;
        match winner {
            PieceKind::B => 10 - depth,
            PieceKind::A => depth - 10,
            PieceKind::Empty => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WinCondition;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_new_node_is_leaf() {
        let board = Board::empty(vec![WinCondition::from_cells([0, 1, 2]).unwrap()]);
        let node = DecisionNode::new(board, PieceKind::A, 0);

        assert!(node.is_leaf());
        assert_eq!(node.winner, PieceKind::Empty);
        assert_eq!(node.best_move, None);
        assert_eq!(node.child(0), None);
        assert_eq!(node.child(42), None);
    }

    #[test]
    fn test_moves_ascending() {
        let mut node = DecisionNode::new(Board::empty(Vec::<WinCondition>::new()), PieceKind::B, 0);
        node.children[7] = NodeId::new(2);
        node.children[1] = NodeId::new(1);

        let moves: Vec<_> = node.moves().collect();
        assert_eq!(moves, vec![(1, NodeId::new(1)), (7, NodeId::new(2))]);
        assert!(!node.is_leaf());
        assert_eq!(node.child(7), Some(NodeId::new(2)));
    }

    #[test]
    fn test_terminal_score() {
        assert_eq!(DecisionNode::terminal_score(PieceKind::B, 1), 9);
        assert_eq!(DecisionNode::terminal_score(PieceKind::B, 5), 5);
        assert_eq!(DecisionNode::terminal_score(PieceKind::A, 1), -9);
        assert_eq!(DecisionNode::terminal_score(PieceKind::A, 5), -5);
        assert_eq!(DecisionNode::terminal_score(PieceKind::Empty, 3), 0);
    }
}
