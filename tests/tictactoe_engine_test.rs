//! Scenario tests for the time-travel engine.

use tictactoe_timetravel::{
    GameEngine, GameStatus, JumpError, MoveOutcome, MoveRejection, Player, Position,
};

fn play(engine: &mut GameEngine, cells: &[usize]) {
    for &cell in cells {
        assert!(engine.apply_move(cell).is_accepted(), "cell {cell} should be accepted");
    }
}

#[test]
fn test_empty_board_in_progress_x() {
    let engine = GameEngine::new();
    assert_eq!(engine.status(), GameStatus::InProgress(Player::X));
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn test_top_row_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 1, 3]);
    assert_eq!(engine.status(), GameStatus::InProgress(Player::X));

    play(&mut engine, &[2]);
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    assert_eq!(engine.history_len(), 6);
}

#[test]
fn test_full_board_draw() {
    let mut engine = GameEngine::new();
    // X: 0,1,5,6,8  O: 2,3,4,7
    play(&mut engine, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert_eq!(engine.status(), GameStatus::Draw);
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let mut engine = GameEngine::replay([4]);
    let before = engine.clone();

    let outcome = engine.apply_move(4);
    assert_eq!(
        outcome,
        MoveOutcome::Rejected(MoveRejection::SquareOccupied(Position::Center))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_moves_after_win_ignored() {
    let mut engine = GameEngine::replay([0, 4, 1, 3, 2]);
    let before = engine.clone();

    let outcome = engine.apply_move(8);
    assert_eq!(
        outcome,
        MoveOutcome::Rejected(MoveRejection::GameOver(GameStatus::Won(Player::X)))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_moves_after_draw_ignored() {
    let mut engine = GameEngine::replay([0, 2, 1, 3, 5, 4, 6, 7, 8]);
    let before = engine.clone();

    // Every cell is taken, but the game-over guard fires first.
    assert_eq!(
        engine.apply_move(0),
        MoveOutcome::Rejected(MoveRejection::GameOver(GameStatus::Draw))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_jump_then_move_truncates_future() {
    let mut engine = GameEngine::replay([0, 4, 1, 3, 2]);
    assert_eq!(engine.history_len(), 6);

    engine.jump_to(2).expect("step 2 is recorded");
    assert_eq!(engine.history_len(), 6);
    assert!(engine.x_is_next());

    assert!(engine.apply_move(8).is_accepted());
    assert_eq!(engine.history_len(), 4);
    assert_eq!(engine.step(), 3);

    let board = engine.current_board();
    assert_eq!(board.occupied_count(), 3);
    assert!(board.is_empty(Position::TopCenter));
    assert_eq!(board.get(Position::BottomRight).player(), Some(Player::X));
}

#[test]
fn test_jump_back_to_start_allows_fresh_game() {
    let mut engine = GameEngine::replay([0, 4, 1, 3, 2]);
    engine.jump_to(0).expect("start is recorded");
    assert_eq!(engine.status(), GameStatus::InProgress(Player::X));

    assert!(engine.apply_move(4).is_accepted());
    assert_eq!(engine.history_len(), 2);
}

#[test]
fn test_jump_within_won_game_reopens_play() {
    let mut engine = GameEngine::replay([0, 4, 1, 3, 2]);
    engine.jump_to(4).expect("step 4 is recorded");
    assert_eq!(engine.status(), GameStatus::InProgress(Player::X));

    engine.jump_to(5).expect("step 5 is recorded");
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_jump_out_of_range_rejected() {
    let mut engine = GameEngine::replay([0, 4]);
    engine.jump_to(1).expect("step 1 is recorded");

    assert_eq!(
        engine.jump_to(10),
        Err(JumpError::StepOutOfRange { step: 10, len: 3 })
    );
    assert_eq!(engine.step(), 1);
}

#[test]
fn test_x_is_next_alternates() {
    let mut engine = GameEngine::new();
    let mut expected = true;
    for cell in [4, 0, 8, 2, 1] {
        assert_eq!(engine.x_is_next(), expected);
        play(&mut engine, &[cell]);
        expected = !expected;
    }
    assert_eq!(engine.x_is_next(), expected);
}

#[test]
fn test_history_snapshots_are_not_mutated_by_later_moves() {
    let mut engine = GameEngine::replay([4]);
    let first = *engine.history().entries()[1].board();

    play(&mut engine, &[0, 8]);
    assert_eq!(*engine.history().entries()[1].board(), first);
}

#[test]
fn test_move_list_labels() {
    let engine = GameEngine::replay([0, 4]);
    let labels: Vec<String> = engine.move_list().into_iter().map(|e| e.label).collect();
    assert_eq!(labels, ["Go to Game Start", "Go to move #1", "Go to move #2"]);
}
