use chess_engine::{GameState, GameStatus, PieceKind, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GAMES: u64 = 12;
const MAX_PLIES: usize = 80;

fn own_king_attacked(state: &GameState, mover: Player) -> bool {
    let king = state.king_location(mover);
    state
        .possible_moves()
        .iter()
        .any(|reply| reply.to_sq() == king)
}

#[test]
fn legal_moves_never_expose_the_king() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new();

        for _ in 0..MAX_PLIES {
            let moves = state.valid_moves();
            if moves.is_empty() {
                break;
            }
            let mover = state.player_to_move();
            for &mv in &moves {
                assert_ne!(mv.piece_captured().kind(), Some(PieceKind::King));
                state.make_move(mv);
                assert!(
                    !own_king_attacked(&state, mover),
                    "{} leaves the {} king attacked in {}",
                    mv,
                    mover,
                    state.to_fen()
                );
                state.undo_move();
            }
            state.make_move(moves[rng.gen_range(0..moves.len())]);
        }
    }
}

#[test]
fn make_then_undo_restores_everything() {
    for seed in 100..100 + GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new();

        for _ in 0..MAX_PLIES {
            let moves = state.valid_moves();
            if moves.is_empty() {
                break;
            }
            let before = state.clone();
            for &mv in &moves {
                state.make_move(mv);
                state.undo_move();
                assert_eq!(state, before, "undo of {} did not restore the position", mv);
            }
            state.make_move(moves[rng.gen_range(0..moves.len())]);
        }

        // Unwinding the whole game lands back on the start position.
        while state.undo_move().is_some() {}
        let mut fresh = GameState::new();
        assert_eq!(state.board(), fresh.board());
        assert_eq!(state.valid_moves().as_slice(), fresh.valid_moves().as_slice());
    }
}

#[test]
fn terminal_flags_agree_with_check() {
    for seed in 200..200 + GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new();

        for _ in 0..MAX_PLIES * 2 {
            let moves = state.valid_moves();
            match state.status() {
                GameStatus::Checkmate => {
                    assert!(moves.is_empty());
                    assert!(state.in_check());
                    break;
                }
                GameStatus::Stalemate => {
                    assert!(moves.is_empty());
                    assert!(!state.in_check());
                    break;
                }
                GameStatus::Active => assert!(!moves.is_empty()),
            }
            state.make_move(moves[rng.gen_range(0..moves.len())]);
        }
    }
}
