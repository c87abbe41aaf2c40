//! Exhaustive minimax decision tree.
//!
//! ## Overview
//!
//! Every position reachable from a root board is expanded eagerly and
//! scored bottom-up. Leaves score `10 - depth` for a `B` win, `depth - 10`
//! for an `A` win, and 0 for a draw; internal nodes take the best child
//! for their mover, with ties going to the lowest cell.
//!
//! ## Usage
//!
//! ```rust
//! use toe_tactics::core::PieceKind;
//! use toe_tactics::decision::DecisionTree;
//! use toe_tactics::rules::{Board, WinConditionPool};
//!
//! let pool = WinConditionPool::standard_lines();
//! let board = Board::empty(pool.as_slice())
//!     .add(4, PieceKind::A)
//!     .unwrap();
//! let tree = DecisionTree::build(board, PieceKind::B);
//!
//! // Classic tic-tac-toe is a draw under perfect play
//! assert_eq!(tree.ultimate_winner(tree.root()), PieceKind::Empty);
//! ```

pub mod node;
pub mod tree;

pub use node::{DecisionNode, NodeId};
pub use tree::{DecisionTree, TreeStats};
