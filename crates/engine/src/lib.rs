pub mod board;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod move_gen;
pub mod movelist;
pub mod r#move;
pub mod perft;
pub mod square;

pub use board::Board;
pub use constants::{Piece, PieceKind, Player};
pub use error::ChessError;
pub use game_state::{GameState, GameStatus};
pub use movelist::MoveList;
pub use r#move::Move;
pub use square::Square;

#[cfg(test)]
mod tests {
    use super::constants::{Piece, START_FEN};
    use super::game_state::GameState;

    #[test]
    fn test_make_move() {
        let mut state = GameState::from_fen(START_FEN).unwrap();
        let moves = state.valid_moves();
        let first_move = moves[0];
        let from_sq = first_move.from_sq();
        let to_sq = first_move.to_sq();
        let moving_piece = state.board().piece_at(from_sq);

        state.make_move(first_move);

        assert_eq!(state.board().piece_at(to_sq), moving_piece);
        assert_eq!(state.board().piece_at(from_sq), Piece::Empty);
    }

    #[test]
    fn test_undo_move() {
        let mut state = GameState::from_fen(START_FEN).unwrap();
        let original_fen = state.to_fen();
        let moves = state.valid_moves();
        let first_move = moves[0];

        state.make_move(first_move);
        state.undo_move();

        assert_eq!(state.to_fen(), original_fen);
        assert!(state.move_log().is_empty());
    }
}
