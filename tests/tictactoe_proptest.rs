//! Property tests over arbitrary move/jump sequences.

use proptest::prelude::*;
use tictactoe_timetravel::invariants::{EngineInvariants, InvariantSet};
use tictactoe_timetravel::{GameEngine, MoveOutcome};

#[derive(Debug, Clone, Copy)]
enum Op {
    Move(usize),
    Jump(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..10).prop_map(Op::Move),
        1 => (0usize..11).prop_map(Op::Jump),
    ]
}

fn run(ops: &[Op]) -> GameEngine {
    let mut engine = GameEngine::new();
    for op in ops {
        match *op {
            Op::Move(cell) => {
                engine.apply_move(cell);
            }
            Op::Jump(step) => {
                let _ = engine.jump_to(step);
            }
        }
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn same_ops_same_state(ops in prop::collection::vec(op_strategy(), 0..40)) {
        prop_assert_eq!(run(&ops), run(&ops));
    }

    #[test]
    fn invariants_hold_after_every_op(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut engine = GameEngine::new();
        for op in ops {
            match op {
                Op::Move(cell) => {
                    engine.apply_move(cell);
                }
                Op::Jump(step) => {
                    let _ = engine.jump_to(step);
                }
            }
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
            prop_assert_eq!(engine.x_is_next(), engine.step() % 2 == 0);
        }
    }

    #[test]
    fn moves_truncate_or_do_nothing(
        prefix in prop::collection::vec(op_strategy(), 0..30),
        cell in 0usize..10,
    ) {
        let mut engine = run(&prefix);
        let before = engine.clone();

        match engine.apply_move(cell) {
            MoveOutcome::Accepted { step, .. } => {
                prop_assert_eq!(step, before.step() + 1);
                prop_assert_eq!(engine.history_len(), before.step() + 2);
                prop_assert_ne!(engine.x_is_next(), before.x_is_next());
                prop_assert_eq!(
                    &engine.history().entries()[..=before.step()],
                    &before.history().entries()[..=before.step()]
                );
            }
            MoveOutcome::Rejected(_) => prop_assert_eq!(engine, before),
        }
    }

    #[test]
    fn jumps_never_touch_history(
        prefix in prop::collection::vec(op_strategy(), 0..30),
        step in 0usize..12,
    ) {
        let mut engine = run(&prefix);
        let before = engine.clone();

        match engine.jump_to(step) {
            Ok(()) => {
                prop_assert!(step < before.history_len());
                prop_assert_eq!(engine.step(), step);
            }
            Err(_) => {
                prop_assert!(step >= before.history_len());
                prop_assert_eq!(engine.step(), before.step());
            }
        }
        prop_assert_eq!(engine.history(), before.history());
    }
}
