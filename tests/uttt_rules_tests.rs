//! Ultimate Tic-Tac-Toe rules integration tests using full game records.

use uttt_engine::board::SubBoardOutcome;
use uttt_engine::core::{action_index, action_name, Error, Player};
use uttt_engine::games::uttt::UtttState;
use uttt_engine::rules::{GameResult, SearchState};

/// Sub-board 1 fills without a line; ends with O winning sub-board 8.
const DRAWN_SUB_BOARD: [usize; 32] = [
    12, 28, 23, 62, 16, 49, 75, 73, 67, 40, 32, 24, 74, 60, 0, 2, 7, 4, 3, 1, 5, 6, 20, 61, 22,
    59, 26, 13, 31, 14, 34, 21,
];

/// O's last stone fills sub-board 8 and completes its anti-diagonal.
const WIN_ON_LAST_CELL: [usize; 30] = [
    69, 47, 79, 77, 71, 51, 72, 74, 61, 12, 28, 4, 13, 31, 23, 78, 65, 53, 60, 10, 49, 67, 41, 43,
    32, 26, 80, 70, 50, 62,
];

/// X takes the left column of sub-boards (0, 3, 6).
const X_WINS: [usize; 29] = [
    46, 76, 67, 48, 74, 61, 22, 77, 69, 27, 11, 43, 49, 57, 2, 6, 0, 18, 54, 9, 47, 60, 20, 78,
    64, 32, 17, 42, 45,
];

/// Every sub-board decided with no meta-board line.
const TIE: [usize; 50] = [
    56, 15, 45, 64, 32, 6, 11, 33, 9, 36, 47, 71, 42, 37, 31, 23, 78, 63, 28, 3, 19, 68, 53, 79,
    77, 69, 38, 44, 35, 25, 75, 54, 10, 49, 76, 13, 50, 70, 30, 65, 43, 17, 52, 26, 8, 24, 27, 46,
    34, 29,
];

fn replay(actions: &[usize]) -> UtttState {
    let mut state = UtttState::new();
    for &action in actions {
        assert!(
            state.legal_actions().contains(&action),
            "{} should be legal after {} moves",
            action,
            state.move_count()
        );
        state = state.take_action(action).unwrap();
    }
    state
}

// =============================================================================
// Naming
// =============================================================================

#[test]
fn test_action_names() {
    assert_eq!(action_name(0).unwrap(), "A1");
    assert_eq!(action_name(40).unwrap(), "E5");
    assert_eq!(action_name(80).unwrap(), "I9");
    assert_eq!(action_index("B4").unwrap(), 28);
    assert_eq!(action_index("A3").unwrap(), 18);
    assert_eq!(action_index("e5").unwrap(), 40);
}

#[test]
fn test_action_name_round_trip() {
    for action in 0..81 {
        let name = action_name(action).unwrap();
        assert_eq!(action_index(&name).unwrap(), action);
    }
}

#[test]
fn test_bad_action_names() {
    for name in ["", "5", "Z1", "A0", "A10", "J1", "AA"] {
        assert!(
            matches!(action_index(name), Err(Error::InvalidActionName { .. })),
            "{name:?} should be rejected"
        );
    }
    assert!(matches!(
        action_name(81),
        Err(Error::ActionOutOfRange { action: 81, .. })
    ));
}

#[test]
fn test_game_record_by_name() {
    let names = "B6 E9 E8 D6 C9 H7 E3 F9 G8 A4 C2 H5 E6 D7 C1 G1 A1 A3 A7 A2 C6 G7 C3 G9 B8 F4 I2 G5 A6";
    let actions: Vec<usize> = names
        .split_whitespace()
        .map(|n| action_index(n).unwrap())
        .collect();

    assert_eq!(actions, X_WINS);
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_drawn_sub_board() {
    let before = replay(&DRAWN_SUB_BOARD[..31]);
    assert_eq!(before.meta().outcome(1), Some(SubBoardOutcome::Undecided));
    assert_eq!(before.legal_actions().as_slice(), &[21]);

    let state = replay(&DRAWN_SUB_BOARD);

    assert_eq!(state.meta().outcome(1), Some(SubBoardOutcome::Drawn));
    assert_eq!(state.meta().outcome(8), Some(SubBoardOutcome::Won(Player::O)));
    assert_eq!(state.raw_meta(), [-2, 0, -2, -2, -2, -2, -2, -2, -1, 6]);
    assert_eq!(state.outcome(), None);
    assert_eq!(state.turn(), Player::X);
    assert_eq!(
        state.legal_actions().as_slice(),
        &[54, 55, 56, 63, 64, 65, 72]
    );

    // Drawn sub-boards are closed to further play.
    assert!(state.raw_board()[0][3..6].iter().all(|&v| v != 0));
}

#[test]
fn test_line_on_last_cell_wins_sub_board() {
    let before = replay(&WIN_ON_LAST_CELL[..29]);
    assert_eq!(before.meta().outcome(8), Some(SubBoardOutcome::Undecided));
    assert_eq!(before.meta().forced(), Some(8));
    assert_eq!(before.legal_actions().as_slice(), &[62]);

    let state = replay(&WIN_ON_LAST_CELL);

    assert!(state.board().sub_board_full(8));
    assert_eq!(state.board().sub_board_winner(8), Some(Player::O));
    assert_eq!(state.meta().outcome(8), Some(SubBoardOutcome::Won(Player::O)));
    assert_eq!(state.raw_meta(), [-2, -2, -2, -2, 1, -2, -2, -2, -1, 2]);
    assert_eq!(state.outcome(), None);
}

#[test]
fn test_x_wins_meta_board_column() {
    let before = replay(&X_WINS[..28]);
    assert_eq!(before.outcome(), None);
    assert_eq!(before.meta().forced(), Some(3));

    let state = replay(&X_WINS);

    assert_eq!(state.outcome(), Some(GameResult::Winner(Player::X)));
    assert_eq!(state.raw_meta(), [1, -2, -2, 1, -2, -2, 1, -2, -2, -2]);
    assert_eq!(state.move_count(), 29);
    assert!(state.is_terminal());
    assert!(state.legal_actions().is_empty());
    assert_eq!(state.take_action(0), Err(Error::GameOver));
    assert_eq!(state.outcome().map(|r| r.value()), Some(1));
}

#[test]
fn test_tie_when_every_sub_board_decided() {
    let state = replay(&TIE);

    assert_eq!(state.outcome(), Some(GameResult::Draw));
    assert_eq!(state.raw_meta(), [1, -1, -1, 0, 1, 1, -1, 1, -1, -2]);
    assert!(state.meta().all_decided());
    assert_eq!(state.board().stone_count(), 50);
    assert!(state.legal_actions().is_empty());
    assert_eq!(state.outcome().map(|r| r.reward_for(Player::O)), Some(0.5));
}

#[test]
fn test_every_prefix_has_consistent_counts() {
    let mut state = UtttState::new();
    for (i, &action) in TIE.iter().enumerate() {
        state.apply(action).unwrap();
        let raw = state.raw_board();
        let x = raw.iter().flatten().filter(|&&v| v == 1).count();
        let o = raw.iter().flatten().filter(|&&v| v == -1).count();

        assert_eq!(x + o, i + 1);
        assert!(x == o || x == o + 1);
        assert_eq!(state.turn(), Player::to_move_after(state.move_count()));
    }
}

// =============================================================================
// Rejected Moves
// =============================================================================

#[test]
fn test_rejection_reasons() {
    let state = replay(&DRAWN_SUB_BOARD);

    // Forced into sub-board 6.
    assert!(matches!(
        state.take_action(0),
        Err(Error::WrongSubBoard { forced: 6, .. })
    ));
    assert!(matches!(
        state.take_action(73),
        Err(Error::CellOccupied { action: 73 })
    ));
    assert!(matches!(
        state.take_action(200),
        Err(Error::ActionOutOfRange { action: 200, .. })
    ));

    for err in [Error::GameOver, Error::CellOccupied { action: 1 }] {
        assert!(err.is_illegal_move());
    }
}

#[test]
fn test_decided_sub_board_rejected_under_free_choice() {
    // X wins sub-board 0 with its top row from local 0, so O chooses freely.
    let state = replay(&[1, 3, 2, 6, 0]);
    assert_eq!(state.meta().forced(), None);

    assert!(matches!(
        state.take_action(9),
        Err(Error::SubBoardDecided { sub_board: 0, .. })
    ));
    assert!(state.take_action(10).is_err());
    assert!(state.take_action(4).is_ok());
}
