//! Immutable board snapshots.
//!
//! A `Board` holds nine cells and the win-conditions active for its game.
//! Moves never mutate a board: `add` returns a new value that shares the
//! same win-condition set.

use std::sync::Arc;

use super::win_condition::WinCondition;
use crate::core::{Error, PieceKind, Result, CELL_COUNT};

/// Nine cells plus the active win-conditions of one game instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [PieceKind; CELL_COUNT],
    conditions: Arc<[WinCondition]>,
}

impl Board {
    /// Create a board from exactly nine cells.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `cells` does not hold nine entries.
    pub fn new(cells: &[PieceKind], conditions: impl Into<Arc<[WinCondition]>>) -> Result<Self> {
        let cells: [PieceKind; CELL_COUNT] =
            cells.try_into().map_err(|_| Error::InvalidSize {
                expected: CELL_COUNT,
                got: cells.len(),
            })?;
        Ok(Self {
            cells,
            conditions: conditions.into(),
        })
    }

    /// An empty board with the given win-conditions.
    #[must_use]
    pub fn empty(conditions: impl Into<Arc<[WinCondition]>>) -> Self {
        Self {
            cells: [PieceKind::Empty; CELL_COUNT],
            conditions: conditions.into(),
        }
    }

    /// Contents of a cell, or `None` off the board.
    #[inline]
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<PieceKind> {
        self.cells.get(cell).copied()
    }

    #[must_use]
    pub fn cells(&self) -> &[PieceKind; CELL_COUNT] {
        &self.cells
    }

    #[must_use]
    pub fn win_conditions(&self) -> &[WinCondition] {
        &self.conditions
    }

    /// Whether two boards share the same win-condition allocation.
    #[must_use]
    pub fn shares_conditions_with(&self, other: &Board) -> bool {
        Arc::ptr_eq(&self.conditions, &other.conditions)
    }

    /// The winning kind, or `Empty` for no winner.
    ///
    /// A position where both kinds complete a condition has no winner. It
    /// cannot arise from play, since nothing moves after the first win.
    #[must_use]
    pub fn winner(&self) -> PieceKind {
        let mut a_wins = false;
        let mut b_wins = false;
        for condition in self.conditions.iter() {
            match condition.holder(&self.cells) {
                PieceKind::A => a_wins = true,
                PieceKind::B => b_wins = true,
                PieceKind::Empty => {}
            }
        }

        match (a_wins, b_wins) {
            (true, false) => PieceKind::A,
            (false, true) => PieceKind::B,
            (true, true) => {
                tracing::warn!(board = %self, "both kinds hold a win-condition");
                PieceKind::Empty
            }
            (false, false) => PieceKind::Empty,
        }
    }

    /// A new board with `kind` placed on `cell`.
    ///
    /// # Errors
    ///
    /// `OccupiedCell` if the cell already holds a piece, `NoSuchMove` if
    /// the index is off the board.
    pub fn add(&self, cell: usize, kind: PieceKind) -> Result<Board> {
        debug_assert!(!kind.is_empty(), "cannot place an empty piece");
        match self.get(cell) {
            None => Err(Error::NoSuchMove { cell }),
            Some(PieceKind::Empty) => {
                let mut next = self.clone();
                next.cells[cell] = kind;
                Ok(next)
            }
            Some(_) => Err(Error::OccupiedCell { cell }),
        }
    }

    /// Empty cells in ascending index order.
    ///
    /// Move generation follows this order, which fixes minimax tie-breaks.
    pub fn empty_slots(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| kind.is_empty())
            .map(|(cell, _)| cell)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|kind| !kind.is_empty())
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|kind| !kind.is_empty()).count()
    }
}

/// Shapes in reverse reading order (top-left first), `.` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for kind in self.cells.iter().rev() {
            write!(f, "{}", kind.symbol())?;
        }
        Ok(())
    }
}
