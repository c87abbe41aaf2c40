//! Piece kinds, piece colors, and the player/opponent assignment.
//!
//! ## PieceKind
//!
//! Contents of a single cell: `Empty`, or one of the two opposing kinds.
//! Kind `B` is the maximizing kind in minimax scoring and kind `A` the
//! minimizing one, regardless of which of them the player controls.
//!
//! ## PieceColor
//!
//! Only pieces placed during puzzle generation carry a color. The color
//! together with the kind and the cell selects which win-condition the
//! piece activates.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Human-readable cell names, indexed by cell.
///
/// Cells run in reverse reading order: cell 0 is the bottom-right tile
/// and cell 8 the top-left one.
pub const CELL_NAMES: [&str; CELL_COUNT] = [
    "bottom-right",
    "bottom-middle",
    "bottom-left",
    "middle-right",
    "center",
    "middle-left",
    "top-right",
    "top-middle",
    "top-left",
];

/// Name of a cell for log output, or `"off-board"` for an invalid index.
#[must_use]
pub fn cell_name(cell: usize) -> &'static str {
    CELL_NAMES.get(cell).copied().unwrap_or("off-board")
}

/// Contents of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// Unoccupied.
    #[default]
    Empty,
    /// Minimizing kind.
    A,
    /// Maximizing kind.
    B,
}

impl PieceKind {
    /// Whether this is the unoccupied marker.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceKind::Empty)
    }

    /// The opposing kind. `Empty` has no opponent and maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PieceKind::A => PieceKind::B,
            PieceKind::B => PieceKind::A,
            PieceKind::Empty => PieceKind::Empty,
        }
    }

    /// Index of a non-empty kind in the seed table (`A` = 0, `B` = 1).
    #[must_use]
    pub const fn table_index(self) -> Option<usize> {
        match self {
            PieceKind::A => Some(0),
            PieceKind::B => Some(1),
            PieceKind::Empty => None,
        }
    }

    /// Single-character rendering (`.` for empty).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Empty => '.',
            PieceKind::A => 'A',
            PieceKind::B => 'B',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceKind::Empty => write!(f, "nobody"),
            PieceKind::A => write!(f, "A"),
            PieceKind::B => write!(f, "B"),
        }
    }
}

/// Color of a piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    /// Pieces placed during live play.
    #[default]
    Uncolored,
    C1,
    C2,
    C3,
}

impl PieceColor {
    /// The three colors a prefilled piece can carry, in table order.
    pub const PALETTE: [PieceColor; 3] = [PieceColor::C1, PieceColor::C2, PieceColor::C3];

    /// Index of a real color in the seed table (`C1` = 0 .. `C3` = 2).
    #[must_use]
    pub const fn table_index(self) -> Option<usize> {
        match self {
            PieceColor::C1 => Some(0),
            PieceColor::C2 => Some(1),
            PieceColor::C3 => Some(2),
            PieceColor::Uncolored => None,
        }
    }

    /// Initial used when logging puzzle layouts.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceColor::Uncolored => '.',
            PieceColor::C1 => 'R',
            PieceColor::C2 => 'B',
            PieceColor::C3 => 'Y',
        }
    }
}

/// Which kind the player controls for a session.
///
/// The assignment is host policy; the engine only consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sides {
    pub player: PieceKind,
    pub opponent: PieceKind,
}

impl Sides {
    /// Assign the player a non-empty kind; the opponent gets the other one.
    ///
    /// # Panics
    ///
    /// Panics if `player` is `Empty`.
    #[must_use]
    pub fn new(player: PieceKind) -> Self {
        assert!(!player.is_empty(), "player must control a non-empty kind");
        Self {
            player,
            opponent: player.opponent(),
        }
    }

    /// Assignment from a host parity bit: even plays `B`, odd plays `A`.
    #[must_use]
    pub fn from_parity(even: bool) -> Self {
        let sides = Self::new(if even { PieceKind::B } else { PieceKind::A });
        tracing::info!(player = %sides.player, "player assigned");
        sides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(PieceKind::A.opponent(), PieceKind::B);
        assert_eq!(PieceKind::B.opponent(), PieceKind::A);
        assert_eq!(PieceKind::Empty.opponent(), PieceKind::Empty);
    }

    #[test]
    fn test_table_indices() {
        assert_eq!(PieceKind::A.table_index(), Some(0));
        assert_eq!(PieceKind::B.table_index(), Some(1));
        assert_eq!(PieceKind::Empty.table_index(), None);

        let indices: Vec<_> = PieceColor::PALETTE.iter().map(|c| c.table_index()).collect();
        assert_eq!(indices, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(PieceColor::Uncolored.table_index(), None);
    }

    #[test]
    fn test_cell_names() {
        assert_eq!(cell_name(0), "bottom-right");
        assert_eq!(cell_name(4), "center");
        assert_eq!(cell_name(8), "top-left");
        assert_eq!(cell_name(9), "off-board");
    }

    #[test]
    fn test_sides_from_parity() {
        let even = Sides::from_parity(true);
        assert_eq!(even.player, PieceKind::B);
        assert_eq!(even.opponent, PieceKind::A);

        let odd = Sides::from_parity(false);
        assert_eq!(odd.player, PieceKind::A);
        assert_eq!(odd.opponent, PieceKind::B);
    }

    #[test]
    #[should_panic(expected = "non-empty kind")]
    fn test_sides_rejects_empty() {
        let _ = Sides::new(PieceKind::Empty);
    }
}
