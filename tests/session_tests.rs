//! Puzzle generation and session integration tests.

use toe_tactics::core::PieceKind::{self, Empty as E, A, B};
use toe_tactics::rules::{Board, SeedTable, WinCondition, WinConditionPool};
use toe_tactics::{
    Advance, Error, GameRng, HostSignals, PieceColor, Puzzle, PuzzleGenerator, Session,
    SessionConfig, SessionPhase, Sides, CELL_COUNT,
};

#[derive(Debug, Default)]
struct Host {
    passes: usize,
    strikes: usize,
}

impl HostSignals for Host {
    fn pass(&mut self) {
        self.passes += 1;
    }

    fn strike(&mut self) {
        self.strikes += 1;
    }
}

fn generate(table_seed: u64, rng_seed: u64, player: PieceKind) -> Puzzle {
    let table = SeedTable::build(table_seed, &WinConditionPool::reference()).unwrap();
    PuzzleGenerator::default()
        .generate(&table, Sides::new(player), &mut GameRng::new(rng_seed))
        .unwrap()
}

// =============================================================================
// Generator Tests
// =============================================================================

#[test]
fn test_generated_puzzles_are_fair() {
    for (seed, player) in [(1, A), (2, B), (42, A), (1337, B)] {
        let puzzle = generate(seed, seed + 100, player);
        let tree = puzzle.tree();
        let root = tree.root();
        let sides = puzzle.sides();

        assert_eq!(tree.ultimate_winner(root), sides.player, "seed {}", seed);

        let best = puzzle.root_node().best_move.unwrap();
        let best_child = tree.move_to(root, best).unwrap();
        assert_ne!(tree.get(best_child).winner, sides.player, "seed {}", seed);

        let traps = tree
            .immediate_children(root)
            .filter(|&child| tree.ultimate_winner(child) == sides.opponent)
            .count();
        assert!(traps > 0, "seed {}", seed);
    }
}

#[test]
fn test_generated_layout_uses_table() {
    let table = SeedTable::build(99, &WinConditionPool::reference()).unwrap();
    let puzzle = PuzzleGenerator::default()
        .generate(&table, Sides::new(A), &mut GameRng::new(4))
        .unwrap();

    let board = puzzle.board();
    assert_eq!(board.occupied_count(), 4);
    for cell in 0..CELL_COUNT {
        let kind = board.get(cell).unwrap();
        if kind.is_empty() {
            continue;
        }
        let condition = table.lookup(cell, kind, puzzle.colors()[cell]).unwrap();
        assert!(board.win_conditions().contains(&condition));
    }
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_apply_move_completes_line() {
    let line = WinCondition::from_cells([0, 1, 2]).unwrap();
    let board = Board::new(&[A, A, E, B, B, E, E, E, E], vec![line]).unwrap();
    let mut colors = [PieceColor::Uncolored; CELL_COUNT];
    for cell in [0, 1, 3, 4] {
        colors[cell] = PieceColor::C2;
    }
    let puzzle = Puzzle::new(board, colors, Sides::new(A));
    let mut session = Session::new(puzzle, SessionConfig::immediate(), Host::default());

    let outcome = session.apply_move(2).unwrap();

    assert_eq!(outcome.winner, A);
    assert_eq!(session.phase(), SessionPhase::Resolved);
    assert_eq!(session.host().passes, 1);
}

#[test]
fn test_occupied_cell_leaves_session_unchanged() {
    let puzzle = generate(42, 7, A);
    let occupied = (0..CELL_COUNT)
        .find(|&cell| !puzzle.board().get(cell).unwrap().is_empty())
        .unwrap();
    let mut session = Session::new(puzzle, SessionConfig::default(), Host::default());
    let node = session.current_node();

    assert_eq!(session.apply_move(occupied), Err(Error::OccupiedCell { cell: occupied }));
    assert_eq!(session.current_node(), node);
    assert_eq!(session.board(), session.puzzle().board());
    assert_eq!(session.phase(), SessionPhase::AwaitingMove);
}

#[test]
fn test_assisted_solve_never_strikes() {
    for seed in [3, 8, 21] {
        let puzzle = generate(seed, seed, B);
        let mut session = Session::new(puzzle, SessionConfig::immediate(), Host::default());

        session.solve_assisted().unwrap();

        assert_eq!(session.phase(), SessionPhase::Resolved);
        assert_eq!(session.board().winner(), B);
        assert_eq!(session.host().passes, 1);
        assert_eq!(session.host().strikes, 0);
    }
}

#[test]
fn test_trap_move_loses_the_round() {
    let puzzle = generate(5, 11, A);
    let tree = puzzle.tree();
    let trap = tree
        .root_node()
        .moves()
        .find(|&(_, child)| tree.ultimate_winner(child) == B)
        .map(|(cell, _)| cell)
        .unwrap();
    let mut session = Session::new(puzzle, SessionConfig::default(), Host::default());

    session.apply_move(trap).unwrap();
    assert_eq!(session.phase(), SessionPhase::OpponentThinking);

    // The opponent plays out its forced win; assisted replies cannot save it
    while session.phase() != SessionPhase::Struck {
        match session.phase() {
            SessionPhase::AwaitingMove => {
                assert!(session.is_unwinnable());
                let cell = session.recommended_move().unwrap();
                session.apply_move(cell).unwrap();
            }
            _ => {
                session.advance().unwrap();
            }
        }
    }
    assert_eq!(session.board().winner(), B);
    assert_eq!(session.next_delay(), Some(SessionConfig::default().reset_delay));

    assert_eq!(session.advance().unwrap(), Advance::StrikeSignaled);
    assert_eq!(session.advance().unwrap(), Advance::Restored);
    assert_eq!(session.host().strikes, 1);
    assert!(!session.is_unwinnable());
    assert_eq!(session.board(), session.puzzle().board());
}
