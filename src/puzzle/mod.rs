//! Puzzle generation.
//!
//! - `PuzzleGenerator`: samples four-piece layouts from a seed table
//! - `fairness`: the acceptance check every generated puzzle passes
//! - `GeneratorConfig`: attempt cap for the generate-and-test loop

pub mod config;
pub mod fairness;
pub mod generator;

pub use config::GeneratorConfig;
pub use fairness::Rejection;
pub use generator::{Puzzle, PuzzleGenerator, PREFILLED_PIECES};
