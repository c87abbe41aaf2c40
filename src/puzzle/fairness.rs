//! Acceptance predicate for generated puzzles.
//!
//! A starting position is accepted when the player wins under optimal
//! play, at least one first move hands the game to the opponent, and the
//! recommended first move does not win on the spot.

use thiserror::Error;

use crate::core::{PieceKind, Sides};
use crate::decision::DecisionTree;

/// Why a sampled position was turned down.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    #[error("optimal play ends with {outcome}, not the player")]
    NotWinnable { outcome: PieceKind },

    #[error("no first move loses, so there is nothing to decide")]
    NoTrapMove,

    #[error("recommended move at cell {cell} wins immediately")]
    TrivialWin { cell: usize },
}

/// Check a tree rooted at the player's first move.
pub fn check(tree: &DecisionTree, sides: Sides) -> Result<(), Rejection> {
    let root = tree.root();

    let outcome = tree.ultimate_winner(root);
    if outcome != sides.player {
        return Err(Rejection::NotWinnable { outcome });
    }

    let has_trap = tree
        .immediate_children(root)
        .any(|child| tree.ultimate_winner(child) == sides.opponent);
    if !has_trap {
        return Err(Rejection::NoTrapMove);
    }

    let node = tree.root_node();
    if let Some(cell) = node.best_move {
        let wins_now = node
            .child(cell)
            .is_some_and(|child| tree.get(child).winner == sides.player);
        if wins_now {
            return Err(Rejection::TrivialWin { cell });
        }
    }

    Ok(())
}
