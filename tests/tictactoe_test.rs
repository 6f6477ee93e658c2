//! Tests for the tic-tac-toe rules engine.

use parlor_games::{GameError, Mark, Square, TicTacToeState, Winner};

fn play(positions: &[usize]) -> TicTacToeState {
    positions
        .iter()
        .fold(TicTacToeState::new(), |state, &pos| {
            state.apply_move(pos).expect("legal move")
        })
}

#[test]
fn new_game_is_empty_with_x_to_move() {
    let state = TicTacToeState::new();
    assert!(state.board().iter().all(|&s| s == Square::Empty));
    assert_eq!(state.current_player(), Mark::X);
    assert_eq!(state.winner(), None);
    assert!(!state.game_over());
}

#[test]
fn current_player_alternates_for_all_legal_sequences() {
    let mut state = TicTacToeState::new();
    for (turn, &pos) in [4, 0, 8, 2, 6].iter().enumerate() {
        let expected = if turn % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(state.current_player(), expected);
        state = state.apply_move(pos).unwrap();
    }
}

#[test]
fn filled_moves_equal_moves_made() {
    let state = play(&[4, 0, 8, 2]);
    let filled = state
        .board()
        .iter()
        .filter(|&&s| s != Square::Empty)
        .count();
    assert_eq!(filled, 4);
}

#[test]
fn top_row_scenario_wins_for_x_on_the_fifth_move() {
    // X at 0, 1, 2; O at 4, 3.
    let state = play(&[0, 4, 1, 3, 2]);
    assert_eq!(state.winner(), Some(Winner::X));
    assert!(state.game_over());
}

#[test]
fn winning_freezes_the_board() {
    let state = play(&[0, 4, 1, 3, 2]);
    for pos in 0..9 {
        assert!(matches!(
            state.apply_move(pos),
            Err(GameError::InvalidMove { .. })
        ));
    }
}

#[test]
fn o_can_win_too() {
    // X: 0, 1, 8; O: 4, 2, 6 completes the anti-diagonal.
    let state = play(&[0, 4, 1, 2, 8, 6]);
    assert_eq!(state.winner(), Some(Winner::O));
    assert!(state.game_over());
}

#[test]
fn full_board_without_a_line_is_a_tie() {
    // X O X / X X O / O X O
    let state = play(&[0, 1, 2, 5, 3, 6, 4, 8, 7]);
    assert_eq!(state.winner(), Some(Winner::Tie));
    assert!(state.game_over());
}

#[test]
fn occupied_and_out_of_range_positions_are_rejected() {
    let state = play(&[4]);
    assert!(matches!(
        state.apply_move(4),
        Err(GameError::InvalidMove { .. })
    ));
    assert!(matches!(
        state.apply_move(9),
        Err(GameError::InvalidMove { .. })
    ));
}

#[test]
fn rejected_moves_leave_the_state_usable() {
    let state = play(&[4]);
    let _ = state.apply_move(4);
    let next = state.apply_move(0).unwrap();
    assert_eq!(next.current_player(), Mark::X);
}

#[test]
fn wire_round_trip_yields_an_equal_state() {
    let state = play(&[0, 4, 1, 3]);
    let json = serde_json::to_string(&state).unwrap();
    let parsed: TicTacToeState = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, state);
}
