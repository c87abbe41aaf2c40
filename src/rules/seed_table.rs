//! Rule-seeded lookup from (cell, kind, color) to win-condition.
//!
//! The pool is shuffled with a generator seeded by the rule seed, then
//! dealt six entries per cell, starting at cell 8 and working down to
//! cell 0. The table is therefore a pure function of (seed, pool).

use serde::{Deserialize, Serialize};

use super::win_condition::{WinCondition, WinConditionPool};
use crate::core::{Error, GameRng, PieceColor, PieceKind, Result, CELL_COUNT};

/// Columns per cell: two piece kinds times three colors.
pub const TABLE_COLUMNS: usize = 6;

/// Minimum pool size that fills every table entry.
pub const MIN_POOL_SIZE: usize = CELL_COUNT * TABLE_COLUMNS;

/// A 9x6 table of win-conditions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTable {
    seed: u64,
    entries: [[WinCondition; TABLE_COLUMNS]; CELL_COUNT],
}

impl SeedTable {
    /// Build the table for a rule seed.
    ///
    /// # Errors
    ///
    /// `PoolTooSmall` if the pool has fewer than 54 entries.
    pub fn build(seed: u64, pool: &WinConditionPool) -> Result<Self> {
        if pool.len() < MIN_POOL_SIZE {
            return Err(Error::PoolTooSmall {
                required: MIN_POOL_SIZE,
                got: pool.len(),
            });
        }

        let mut shuffled = pool.as_slice().to_vec();
        GameRng::new(seed).shuffle(&mut shuffled);

        let mut dealt = shuffled.chunks_exact(TABLE_COLUMNS);
        let mut entries = [[shuffled[0]; TABLE_COLUMNS]; CELL_COUNT];
        for row in entries.iter_mut().rev() {
            if let Some(chunk) = dealt.next() {
                row.copy_from_slice(chunk);
            }
        }

        tracing::info!(seed, pool = pool.len(), "generated seed table");
        Ok(Self { seed, entries })
    }

    /// The rule seed the table was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Column for a kind/color pair: `3 * kind + color`.
    #[must_use]
    pub fn column(kind: PieceKind, color: PieceColor) -> Option<usize> {
        Some(3 * kind.table_index()? + color.table_index()?)
    }

    /// The win-condition a piece activates, if it is a colored, non-empty piece
    /// on the board.
    #[must_use]
    pub fn lookup(&self, cell: usize, kind: PieceKind, color: PieceColor) -> Option<WinCondition> {
        let row = self.entries.get(cell)?;
        Some(row[Self::column(kind, color)?])
    }

    /// All entries for one cell, in column order.
    #[must_use]
    pub fn row(&self, cell: usize) -> Option<&[WinCondition; TABLE_COLUMNS]> {
        self.entries.get(cell)
    }
}
