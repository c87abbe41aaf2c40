//! Live game state machine.
//!
//! A session starts from an accepted puzzle and walks its decision tree as
//! moves are played. The host paces the opponent's reply and the reset
//! after a loss: it waits `next_delay()` and then calls `advance()`.
//!
//! ```text
//! AwaitingMove --player move--> OpponentThinking --advance--> AwaitingMove
//!      |                               |
//!      +--> Resolved (player wins)     +--> Resolved / Struck
//!      +--> Struck (opponent wins or board full)
//!
//! Struck --advance--> Resetting --advance--> AwaitingMove
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::SessionConfig;
use crate::core::{cell_name, Error, PieceKind, Result};
use crate::decision::{DecisionNode, NodeId};
use crate::puzzle::Puzzle;
use crate::rules::Board;

/// Where the session is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Player's turn; the board accepts input.
    AwaitingMove,
    /// Opponent reply pending.
    OpponentThinking,
    /// Player won. Terminal.
    Resolved,
    /// Opponent won or the board filled up; a strike is pending.
    Struck,
    /// Strike delivered; the starting layout is about to be restored.
    Resetting,
}

/// Signals the session sends to its host.
pub trait HostSignals {
    /// The puzzle was solved.
    fn pass(&mut self);

    /// The player lost a round.
    fn strike(&mut self);
}

/// Result of placing one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub cell: usize,
    pub kind: PieceKind,
    /// Winner after the move (`Empty` if none).
    pub winner: PieceKind,
    pub board_full: bool,
    /// Phase the session moved to.
    pub phase: SessionPhase,
}

/// What a call to `Session::advance` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    OpponentMoved(MoveOutcome),
    StrikeSignaled,
    Restored,
}

/// One puzzle being played.
pub struct Session<H> {
    puzzle: Puzzle,
    config: SessionConfig,
    host: H,
    current: NodeId,
    phase: SessionPhase,
    unwinnable: bool,
}

impl<H: HostSignals> Session<H> {
    /// Start playing `puzzle` from its starting layout.
    pub fn new(puzzle: Puzzle, config: SessionConfig, host: H) -> Self {
        tracing::info!(
            player = %puzzle.sides().player,
            colors = %puzzle.describe_colors(),
            shapes = %puzzle.board(),
            "session started"
        );
        let current = puzzle.tree().root();
        let mut session = Self {
            puzzle,
            config,
            host,
            current,
            phase: SessionPhase::AwaitingMove,
            unwinnable: false,
        };
        session.enter_awaiting_move();
        session
    }

    /// Place the player's piece on `cell`.
    ///
    /// # Errors
    ///
    /// `InvalidPhase` outside `AwaitingMove`; `OccupiedCell` or
    /// `NoSuchMove` for an illegal cell. Errors leave the session unchanged.
    pub fn apply_move(&mut self, cell: usize) -> Result<MoveOutcome> {
        self.expect_phase(SessionPhase::AwaitingMove)?;
        self.place(cell, self.puzzle.sides().player)
    }

    /// Run the step the current phase is waiting on.
    ///
    /// # Errors
    ///
    /// `InvalidPhase` in `AwaitingMove` and `Resolved`, which wait on the
    /// player or on nothing.
    pub fn advance(&mut self) -> Result<Advance> {
        match self.phase {
            SessionPhase::OpponentThinking => {
                let cell = self.node().best_move.ok_or(Error::NoMoveAvailable)?;
                let outcome = self.place(cell, self.puzzle.sides().opponent)?;
                Ok(Advance::OpponentMoved(outcome))
            }
            SessionPhase::Struck => {
                self.host.strike();
                self.phase = SessionPhase::Resetting;
                Ok(Advance::StrikeSignaled)
            }
            SessionPhase::Resetting => {
                self.current = self.puzzle.tree().root();
                self.unwinnable = false;
                tracing::info!(shapes = %self.board(), "board reset to starting layout");
                self.enter_awaiting_move();
                Ok(Advance::Restored)
            }
            phase => Err(Error::InvalidPhase { phase }),
        }
    }

    /// How long the host should wait before calling `advance`, or `None`
    /// when the session is not waiting on the host.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            SessionPhase::OpponentThinking => Some(self.config.opponent_delay),
            SessionPhase::Struck => Some(self.config.reset_delay),
            SessionPhase::Resetting => Some(Duration::ZERO),
            SessionPhase::AwaitingMove | SessionPhase::Resolved => None,
        }
    }

    /// One assisted step: play the recommended move for the player.
    ///
    /// If the position is already flagged unwinnable the session is
    /// resolved as a pass instead, and `None` is returned.
    pub fn assist(&mut self) -> Result<Option<MoveOutcome>> {
        self.expect_phase(SessionPhase::AwaitingMove)?;
        if self.unwinnable {
            tracing::info!("assisted play on an unwinnable position, passing");
            self.host.pass();
            self.phase = SessionPhase::Resolved;
            return Ok(None);
        }
        let cell = self.node().best_move.ok_or(Error::NoMoveAvailable)?;
        self.apply_move(cell).map(Some)
    }

    /// Play assisted moves and host steps until the session resolves.
    pub fn solve_assisted(&mut self) -> Result<()> {
        loop {
            match self.phase {
                SessionPhase::Resolved => return Ok(()),
                SessionPhase::AwaitingMove => {
                    self.assist()?;
                }
                _ => {
                    self.advance()?;
                }
            }
        }
    }

    /// The move the tree recommends for whoever is due to move.
    #[must_use]
    pub fn recommended_move(&self) -> Option<usize> {
        self.node().best_move
    }

    /// Whether optimal play from here no longer ends in a player win.
    /// Sticky until the next reset.
    #[must_use]
    pub fn is_unwinnable(&self) -> bool {
        self.unwinnable
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The board as it stands.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.node().board
    }

    /// The tree node for the current position.
    #[must_use]
    pub fn current_node(&self) -> NodeId {
        self.current
    }

    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    fn node(&self) -> &DecisionNode {
        self.puzzle.tree().get(self.current)
    }

    fn expect_phase(&self, expected: SessionPhase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(Error::InvalidPhase { phase: self.phase })
        }
    }

    fn place(&mut self, cell: usize, kind: PieceKind) -> Result<MoveOutcome> {
        let placed = self.board().add(cell, kind)?;
        let next = self.puzzle.tree().move_to(self.current, cell)?;
        debug_assert_eq!(placed, self.puzzle.tree().get(next).board);
        self.current = next;
        tracing::info!(%kind, cell, position = cell_name(cell), "piece placed");

        let winner = self.node().winner;
        let board_full = self.board().is_full();
        self.resolve(kind, winner, board_full);

        Ok(MoveOutcome {
            cell,
            kind,
            winner,
            board_full,
            phase: self.phase,
        })
    }

    fn resolve(&mut self, mover: PieceKind, winner: PieceKind, board_full: bool) {
        let sides = self.puzzle.sides();
        if winner == sides.player {
            tracing::info!(player = %sides.player, "player completed a win-condition");
            self.host.pass();
            self.phase = SessionPhase::Resolved;
        } else if winner == sides.opponent {
            tracing::info!(opponent = %sides.opponent, "opponent completed a win-condition, strike");
            self.phase = SessionPhase::Struck;
        } else if board_full {
            tracing::info!("board filled with no winner, strike");
            self.phase = SessionPhase::Struck;
        } else if mover == sides.player {
            self.phase = SessionPhase::OpponentThinking;
        } else {
            self.enter_awaiting_move();
        }
    }

    fn enter_awaiting_move(&mut self) {
        self.phase = SessionPhase::AwaitingMove;
        let player = self.puzzle.sides().player;
        if !self.unwinnable && self.puzzle.tree().ultimate_winner(self.current) != player {
            tracing::warn!(board = %self.board(), "position can no longer be won");
            self.unwinnable = true;
        }
        if let Some(cell) = self.recommended_move() {
            tracing::debug!(cell, position = cell_name(cell), "recommended move");
        }
    }
}
