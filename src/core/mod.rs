//! Core engine types: piece kinds and colors, side assignment, RNG, errors.
//!
//! This module contains the building blocks shared by the rules, the
//! decision tree, the generator, and the session controller.

pub mod error;
pub mod piece;
pub mod rng;

pub use error::{Error, Result};
pub use piece::{cell_name, PieceColor, PieceKind, Sides, CELL_COUNT, CELL_NAMES};
pub use rng::{GameRng, GameRngState};
