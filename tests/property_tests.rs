//! Property tests for boards, seed tables and decision trees.

use proptest::prelude::*;

use toe_tactics::core::PieceKind::{self, Empty as E, A, B};
use toe_tactics::decision::DecisionTree;
use toe_tactics::rules::{Board, SeedTable, WinCondition, WinConditionPool};
use toe_tactics::{GameRng, NodeId, PuzzleGenerator, Sides, CELL_COUNT};

fn kind() -> impl Strategy<Value = PieceKind> {
    prop_oneof![Just(E), Just(A), Just(B)]
}

fn layout() -> impl Strategy<Value = [PieceKind; CELL_COUNT]> {
    prop::array::uniform9(kind())
}

fn conditions() -> impl Strategy<Value = Vec<WinCondition>> {
    prop::sample::subsequence(WinConditionPool::reference().as_slice().to_vec(), 0..=8)
}

fn move_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0..CELL_COUNT).collect::<Vec<_>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn winner_ignores_move_order(
        cells in layout(),
        conditions in conditions(),
        order in move_order(),
    ) {
        let direct = Board::new(&cells, conditions.clone()).unwrap();

        let mut replayed = Board::empty(conditions);
        for cell in order {
            if !cells[cell].is_empty() {
                replayed = replayed.add(cell, cells[cell]).unwrap();
            }
        }

        prop_assert_eq!(replayed.cells(), direct.cells());
        prop_assert_eq!(replayed.winner(), direct.winner());
    }

    #[test]
    fn add_never_mutates_original(
        cells in layout(),
        conditions in conditions(),
        cell in 0..CELL_COUNT,
        piece in prop_oneof![Just(A), Just(B)],
    ) {
        let board = Board::new(&cells, conditions).unwrap();
        let before = board.clone();
        let winner = board.winner();

        let _ = board.add(cell, piece);

        prop_assert_eq!(&board, &before);
        prop_assert_eq!(board.winner(), winner);
    }

    #[test]
    fn seed_table_is_deterministic(seed in any::<u64>()) {
        let pool = WinConditionPool::reference();
        let first = SeedTable::build(seed, &pool).unwrap();
        let second = SeedTable::build(seed, &pool).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn seed_tables_differ(seed in any::<u64>()) {
        let pool = WinConditionPool::reference();
        let first = SeedTable::build(seed, &pool).unwrap();
        let second = SeedTable::build(seed.wrapping_add(1), &pool).unwrap();

        prop_assert_ne!(first, second);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn tree_is_stable(table_seed in any::<u64>(), rng_seed in any::<u64>(), even in any::<bool>()) {
        let table = SeedTable::build(table_seed, &WinConditionPool::reference()).unwrap();
        let sides = Sides::new(if even { B } else { A });
        let puzzle = PuzzleGenerator::default()
            .sample(&table, sides, &mut GameRng::new(rng_seed))
            .unwrap();

        let rebuilt = DecisionTree::build(puzzle.board().clone(), sides.player);
        let original = puzzle.tree();

        prop_assert_eq!(rebuilt.len(), original.len());
        prop_assert_eq!(rebuilt.root_node().best_move, original.root_node().best_move);
        prop_assert_eq!(rebuilt.root_node().score, original.root_node().score);
        prop_assert_eq!(
            rebuilt.principal_variation(rebuilt.root()),
            original.principal_variation(original.root())
        );
    }

    #[test]
    fn sampled_trees_score_within_bounds(table_seed in any::<u64>(), rng_seed in any::<u64>()) {
        let table = SeedTable::build(table_seed, &WinConditionPool::reference()).unwrap();
        let puzzle = PuzzleGenerator::default()
            .sample(&table, Sides::new(A), &mut GameRng::new(rng_seed))
            .unwrap();
        let tree = puzzle.tree();

        for id in (0..tree.len() as u32).map(NodeId::new) {
            let node = tree.get(id);
            prop_assert!((-10..=10).contains(&node.score));
            prop_assert_eq!(node.is_leaf(), node.best_move.is_none());
        }
    }
}
