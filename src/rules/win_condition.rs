//! Win-conditions and the pool they are drawn from.
//!
//! A win-condition is an unordered set of three distinct cells, stored as a
//! 9-bit mask. The pool is external configuration: the engine ships the
//! reference pool and the classic eight lines, but never derives one.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Error, PieceKind, Result, CELL_COUNT};

const CELL_MASK: u16 = (1 << CELL_COUNT) - 1;

/// Reference pool, as bitmasks over cells 0..9.
const REFERENCE_MASKS: [u16; 56] = [
    7, 11, 13, 14, 19, 21, 22, 25, 26, 28, 35, 37, 38, 41, 42, 44, 49, 50, 52, 56, 67, 69, 70, 73,
    74, 76, 81, 82, 84, 88, 97, 98, 100, 104, 112, 131, 133, 134, 137, 138, 140, 145, 146, 148,
    152, 161, 162, 164, 168, 176, 193, 194, 196, 200, 208, 224,
];

/// Rows, columns, and diagonals of a 3x3 grid.
const STANDARD_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Three cells that win when all hold the same non-empty kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct WinCondition(u16);

impl WinCondition {
    /// Build from a bitmask with exactly three of the low nine bits set.
    pub fn from_mask(mask: u16) -> Result<Self> {
        if mask & !CELL_MASK != 0 || mask.count_ones() != 3 {
            return Err(Error::InvalidWinCondition { mask });
        }
        Ok(Self(mask))
    }

    /// Build from three distinct cell indices, in any order.
    pub fn from_cells(cells: [usize; 3]) -> Result<Self> {
        let mut mask = 0u16;
        for cell in cells {
            if cell >= CELL_COUNT {
                return Err(Error::InvalidWinCondition { mask });
            }
            mask |= 1 << cell;
        }
        Self::from_mask(mask)
    }

    /// The raw bitmask.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u16 {
        self.0
    }

    /// Whether `cell` belongs to this condition.
    #[inline]
    #[must_use]
    pub const fn contains(self, cell: usize) -> bool {
        cell < CELL_COUNT && self.0 & (1 << cell) != 0
    }

    /// Member cells in ascending order.
    pub fn cells(self) -> impl Iterator<Item = usize> {
        (0..CELL_COUNT).filter(move |&cell| self.contains(cell))
    }

    /// The kind holding all three cells, or `Empty` if there is none.
    #[must_use]
    pub fn holder(self, cells: &[PieceKind; CELL_COUNT]) -> PieceKind {
        let mut members = self.cells().map(|cell| cells[cell]);
        let Some(first) = members.next() else {
            return PieceKind::Empty;
        };
        if members.all(|kind| kind == first) {
            first
        } else {
            PieceKind::Empty
        }
    }
}

impl TryFrom<u16> for WinCondition {
    type Error = Error;

    fn try_from(mask: u16) -> Result<Self> {
        Self::from_mask(mask)
    }
}

impl From<WinCondition> for u16 {
    fn from(condition: WinCondition) -> Self {
        condition.0
    }
}

impl std::fmt::Display for WinCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<_> = self.cells().map(|c| c.to_string()).collect();
        write!(f, "{{{}}}", cells.join(","))
    }
}

/// Ordered sequence of distinct win-conditions.
///
/// Order matters: the seed-table shuffle permutes the pool as given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinConditionPool {
    conditions: Vec<WinCondition>,
}

impl WinConditionPool {
    /// Create a pool, rejecting duplicate entries.
    pub fn new(conditions: Vec<WinCondition>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for condition in &conditions {
            if !seen.insert(*condition) {
                return Err(Error::DuplicateWinCondition {
                    mask: condition.mask(),
                });
            }
        }
        Ok(Self { conditions })
    }

    /// Create a pool from raw bitmasks.
    pub fn from_masks(masks: &[u16]) -> Result<Self> {
        let conditions = masks
            .iter()
            .map(|&mask| WinCondition::from_mask(mask))
            .collect::<Result<Vec<_>>>()?;
        Self::new(conditions)
    }

    /// The 56-entry reference pool.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            conditions: REFERENCE_MASKS.iter().map(|&mask| WinCondition(mask)).collect(),
        }
    }

    /// The eight lines of classic tic-tac-toe.
    #[must_use]
    pub fn standard_lines() -> Self {
        Self {
            conditions: STANDARD_LINES
                .iter()
                .map(|line| WinCondition(line.iter().fold(0, |mask, &cell| mask | 1 << cell)))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[WinCondition] {
        &self.conditions
    }

    pub fn iter(&self) -> impl Iterator<Item = &WinCondition> {
        self.conditions.iter()
    }
}
