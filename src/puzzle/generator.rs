//! Generate-and-test puzzle construction.
//!
//! Each attempt places four colored pieces on random cells (opponent,
//! player, opponent, player), activates the win-condition each piece maps
//! to in the seed table, and solves the resulting position. Attempts repeat
//! until the fairness check passes or the attempt cap is hit.

use smallvec::SmallVec;

use super::config::GeneratorConfig;
use super::fairness::{self, Rejection};
use crate::core::{cell_name, Error, GameRng, PieceColor, PieceKind, Result, Sides, CELL_COUNT};
use crate::decision::{DecisionNode, DecisionTree};
use crate::rules::{Board, SeedTable, WinCondition};

/// Pieces placed before play starts.
pub const PREFILLED_PIECES: usize = 4;

/// A starting position together with its solved decision tree.
#[derive(Clone, Debug)]
pub struct Puzzle {
    board: Board,
    colors: [PieceColor; CELL_COUNT],
    sides: Sides,
    tree: DecisionTree,
    attempts: usize,
}

impl Puzzle {
    /// Solve a starting position with the player to move first.
    #[must_use]
    pub fn new(board: Board, colors: [PieceColor; CELL_COUNT], sides: Sides) -> Self {
        let tree = DecisionTree::build(board.clone(), sides.player);
        Self {
            board,
            colors,
            sides,
            tree,
            attempts: 1,
        }
    }

    /// Run the fairness check on this position.
    pub fn check(&self) -> std::result::Result<(), Rejection> {
        fairness::check(&self.tree, self.sides)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn colors(&self) -> &[PieceColor; CELL_COUNT] {
        &self.colors
    }

    #[must_use]
    pub fn sides(&self) -> Sides {
        self.sides
    }

    #[must_use]
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    #[must_use]
    pub fn root_node(&self) -> &DecisionNode {
        self.tree.root_node()
    }

    /// Sampled layouts it took to find this puzzle.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Color initials in reverse reading order, `.` for uncolored.
    #[must_use]
    pub fn describe_colors(&self) -> String {
        self.colors.iter().rev().map(|c| c.symbol()).collect()
    }
}

/// Samples starting layouts until one passes the fairness check.
#[derive(Clone, Debug, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Create a generator.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Find an accepted puzzle.
    ///
    /// # Errors
    ///
    /// `GenerationExhausted` once `max_attempts` layouts have been rejected.
    pub fn generate(&self, table: &SeedTable, sides: Sides, rng: &mut GameRng) -> Result<Puzzle> {
        for attempt in 1..=self.config.max_attempts {
            let mut puzzle = self.sample(table, sides, rng)?;
            match puzzle.check() {
                Ok(()) => {
                    puzzle.attempts = attempt;
                    tracing::info!(
                        attempts = attempt,
                        colors = %puzzle.describe_colors(),
                        shapes = %puzzle.board,
                        "generated puzzle"
                    );
                    if let Some(cell) = puzzle.root_node().best_move {
                        tracing::debug!(cell, position = cell_name(cell), "recommended move");
                    }
                    return Ok(puzzle);
                }
                Err(reason) => {
                    tracing::trace!(attempt, %reason, "rejected layout");
                }
            }
        }

        tracing::error!(attempts = self.config.max_attempts, "puzzle generation exhausted");
        Err(Error::GenerationExhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// Draw one candidate layout and solve it, without checking fairness.
    pub fn sample(&self, table: &SeedTable, sides: Sides, rng: &mut GameRng) -> Result<Puzzle> {
        let mut order: [usize; CELL_COUNT] = std::array::from_fn(|cell| cell);
        rng.shuffle(&mut order);

        let kinds = [sides.opponent, sides.player, sides.opponent, sides.player];
        let mut cells = [PieceKind::Empty; CELL_COUNT];
        let mut colors = [PieceColor::Uncolored; CELL_COUNT];
        let mut conditions: SmallVec<[WinCondition; PREFILLED_PIECES]> = SmallVec::new();

        for (&cell, &kind) in order.iter().zip(kinds.iter()) {
            let color = PieceColor::PALETTE[rng.gen_range_usize(0..PieceColor::PALETTE.len())];
            let condition = table
                .lookup(cell, kind, color)
                .ok_or(Error::InvalidPlacement { cell, kind, color })?;
            cells[cell] = kind;
            colors[cell] = color;
            conditions.push(condition);
        }

        let board = Board::new(&cells, conditions.as_slice())?;
        Ok(Puzzle::new(board, colors, sides))
    }
}
