//! Puzzle generation parameters.

use serde::{Deserialize, Serialize};

/// Puzzle generation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Sampled layouts to try before giving up.
    /// Exhaustion means the pool cannot produce fair puzzles.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with a custom attempt cap.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }
}
