//! Arena-based minimax decision tree.
//!
//! Uses a flat `Vec<DecisionNode>` with index-based references. The whole
//! tree is expanded eagerly at construction and scored bottom-up; after
//! that it is read-only.

use smallvec::SmallVec;

use super::node::{DecisionNode, NodeId};
use crate::core::{Error, PieceKind, Result, CELL_COUNT};
use crate::rules::Board;

/// Exhaustive minimax tree rooted at one board and first mover.
///
/// `B` maximizes the score and `A` minimizes it at every depth, so each
/// node's `best_move` is optimal for whichever kind is due to move there.
/// One tree therefore serves a whole session.
#[derive(Clone, Debug)]
pub struct DecisionTree {
    /// All nodes in the tree; the root is always index 0.
    nodes: Vec<DecisionNode>,
}

impl DecisionTree {
    /// Expand and score every position reachable from `root`.
    ///
    /// # Panics
    ///
    /// Panics if `first_mover` is `Empty`.
    #[must_use]
    pub fn build(root: Board, first_mover: PieceKind) -> Self {
        assert!(!first_mover.is_empty(), "first mover must be a piece kind");
        let mut tree = Self {
            nodes: Vec::with_capacity(1024),
        };
        tree.expand(root, first_mover, 0);
        tree
    }

    fn expand(&mut self, board: Board, mover: PieceKind, depth: u8) -> NodeId {
        let successors: SmallVec<[(usize, Board); CELL_COUNT]> = if board.winner().is_empty() {
            board
                .empty_slots()
                .filter_map(|cell| board.add(cell, mover).ok().map(|next| (cell, next)))
                .collect()
        } else {
            SmallVec::new()
        };

        let id = self.alloc(DecisionNode::new(board, mover, depth));
        for (cell, next) in successors {
            let child = self.expand(next, mover.opponent(), depth + 1);
            self.get_mut(id).children[cell] = child;
        }
        self.score(id);
        id
    }

    fn score(&mut self, id: NodeId) {
        let node = self.get(id);
        let mut best: Option<(usize, i8)> = None;
        for (cell, child) in node.moves() {
            let score = self.get(child).score;
            let better = match best {
                None => true,
                Some((_, current)) if node.mover == PieceKind::B => score > current,
                Some((_, current)) => score < current,
            };
            if better {
                best = Some((cell, score));
            }
        }

        let (best_move, score) = match best {
            Some((cell, score)) => (Some(cell), score),
            None => (None, DecisionNode::terminal_score(node.winner, node.depth)),
        };
        let node = self.get_mut(id);
        node.best_move = best_move;
        node.score = score;
    }

    fn alloc(&mut self, node: DecisionNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn get_mut(&mut self, id: NodeId) -> &mut DecisionNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &DecisionNode {
        &self.nodes[id.0 as usize]
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &DecisionNode {
        self.get(self.root())
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The child reached by playing `cell` from `id`.
    ///
    /// # Errors
    ///
    /// `NoSuchMove` if the cell is occupied, off the board, or `id` is a leaf.
    pub fn move_to(&self, id: NodeId, cell: usize) -> Result<NodeId> {
        self.get(id).child(cell).ok_or(Error::NoSuchMove { cell })
    }

    /// Outcome if both sides play the optimal move from `id` onward.
    #[must_use]
    pub fn ultimate_winner(&self, id: NodeId) -> PieceKind {
        let mut node = self.get(id);
        while let Some(child) = node.best_move.and_then(|cell| node.child(cell)) {
            node = self.get(child);
        }
        node.winner
    }

    /// Children of `id` in ascending cell order.
    pub fn immediate_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.get(id).moves().map(|(_, child)| child)
    }

    /// Cells of the optimal line from `id` to its leaf.
    #[must_use]
    pub fn principal_variation(&self, id: NodeId) -> Vec<usize> {
        let mut line = Vec::new();
        let mut node = self.get(id);
        while let Some(cell) = node.best_move {
            line.push(cell);
            match node.child(cell) {
                Some(child) => node = self.get(child),
                None => break,
            }
        }
        line
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let leaf_count = self.nodes.iter().filter(|n| n.is_leaf()).count();
        let decided_count = self
            .nodes
            .iter()
            .filter(|n| n.is_leaf() && !n.winner.is_empty())
            .count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            leaf_count,
            decided_count,
        }
    }
}

/// Statistics about the decision tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u8,

    /// Number of leaf nodes.
    pub leaf_count: usize,

    /// Leaves with a winner (the rest are draws).
    pub decided_count: usize,
}

impl TreeStats {
    /// Average children per internal node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let internal = self.node_count - self.leaf_count;
        if internal == 0 {
            0.0
        } else {
            // Every node except the root is some node's child
            (self.node_count - 1) as f64 / internal as f64
        }
    }
}
