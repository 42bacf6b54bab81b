use chess_engine::perft::{perft, perft_divide, PerftCounts};
use chess_engine::{GameState, Square};

#[test]
fn start_position_depth_three() {
    let mut state = GameState::new();
    assert_eq!(perft(&mut state, 3), PerftCounts { nodes: 8902, captures: 34 });
    assert_eq!(state, GameState::new());
}

#[test]
fn divide_after_e2e4() {
    let mut state = GameState::new();
    let e2e4 = state
        .valid_moves()
        .find(Square::new(6, 4), Square::new(4, 4))
        .unwrap();
    state.make_move(e2e4);

    let divided = perft_divide(&mut state, 1);
    assert_eq!(divided.len(), 20);
    assert!(divided.iter().all(|(_, counts)| counts.nodes == 1));
}

#[test]
fn lone_kings_have_only_king_moves() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w").unwrap();
    assert_eq!(perft(&mut state, 1).nodes, 5);
}
