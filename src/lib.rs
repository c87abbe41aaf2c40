//! # toe-tactics
//!
//! Engine for rule-seeded tic-tac-toe puzzles.
//!
//! The win-conditions in play are not the usual eight lines. Each colored
//! piece placed on the board activates one pattern from a seeded lookup
//! table, and the generator searches for starting layouts where exactly one
//! line of play leads the player to a win.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the same rule seed and RNG seed always yield the
//!    same table, the same puzzle, and the same recommended moves.
//!
//! 2. **Immutable boards**: placing a piece returns a new `Board`; trees and
//!    sessions share snapshots freely.
//!
//! 3. **Host-driven timing**: the session never sleeps. It reports the next
//!    delay and the host calls back when it elapses.
//!
//! ## Modules
//!
//! - `core`: piece kinds and colors, sides, RNG, errors
//! - `rules`: win-conditions, the seed table, boards
//! - `decision`: exhaustive minimax tree
//! - `puzzle`: generate-and-test puzzle construction
//! - `session`: live game state machine

pub mod core;
pub mod decision;
pub mod puzzle;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    cell_name, Error, GameRng, GameRngState, PieceColor, PieceKind, Result, Sides, CELL_COUNT,
};

pub use crate::rules::{Board, SeedTable, WinCondition, WinConditionPool};

pub use crate::decision::{DecisionNode, DecisionTree, NodeId, TreeStats};

pub use crate::puzzle::{GeneratorConfig, Puzzle, PuzzleGenerator, Rejection};

pub use crate::session::{Advance, HostSignals, MoveOutcome, Session, SessionConfig, SessionPhase};
