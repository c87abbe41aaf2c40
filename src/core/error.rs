//! Error types for the puzzle engine.

use thiserror::Error;

use super::piece::{PieceColor, PieceKind};
use crate::session::SessionPhase;

/// Main error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("board has {got} cells instead of the required {expected}")]
    InvalidSize { expected: usize, got: usize },

    #[error("cell {cell} is already occupied")]
    OccupiedCell { cell: usize },

    #[error("no move to cell {cell} from this position")]
    NoSuchMove { cell: usize },

    #[error("no move is available from a finished position")]
    NoMoveAvailable,

    #[error("win-condition pool needs at least {required} entries, got {got}")]
    PoolTooSmall { required: usize, got: usize },

    #[error("win-condition {mask:#011b} appears more than once in the pool")]
    DuplicateWinCondition { mask: u16 },

    #[error("mask {mask:#b} does not select exactly three of the nine cells")]
    InvalidWinCondition { mask: u16 },

    #[error("cannot look up a win-condition for {kind:?}/{color:?} at cell {cell}")]
    InvalidPlacement {
        cell: usize,
        kind: PieceKind,
        color: PieceColor,
    },

    #[error("no acceptable puzzle found after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("operation not allowed while the session is {phase:?}")]
    InvalidPhase { phase: SessionPhase },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
