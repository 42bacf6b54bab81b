//! The game state: board, side to move, move log and terminal flags.

use crate::board::Board;
use crate::constants::{Piece, PieceKind, Player};
use crate::error::ChessError;
use crate::move_gen;
use crate::movelist::MoveList;
use crate::r#move::Move;
use crate::square::Square;
use log::{debug, trace};

/// Where the game stands after the last call to `GameState::valid_moves`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Checkmate,
    Stalemate,
}

/// Represents the state of the game at any point in time.
///
/// Only `make_move` and `undo_move` write the board, the king cache and the
/// side to move. The move log doubles as the undo stack: every logged move
/// carries the piece it captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    player_to_move: Player,
    move_log: Vec<Move>,
    white_king: Square,
    black_king: Square,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// A new game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            player_to_move: Player::White,
            move_log: Vec::new(),
            white_king: Square::new(7, 4),
            black_king: Square::new(0, 4),
            checkmate: false,
            stalemate: false,
        }
    }

    /// Sets up a position from a FEN string. Only the placement and the
    /// optional side-to-move fields are read.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let mut parts = fen.split_whitespace();
        let placement = parts
            .next()
            .ok_or_else(|| ChessError::InvalidFen(fen.to_string()))?;
        let board = Board::from_fen(placement)?;

        let player = match parts.next() {
            None | Some("w") => Player::White,
            Some("b") => Player::Black,
            Some(_) => return Err(ChessError::InvalidFen(fen.to_string())),
        };
        Self::with_board(board, player)
    }

    /// Wraps `board`, enforcing exactly one king per side.
    pub fn with_board(board: Board, player_to_move: Player) -> Result<Self, ChessError> {
        let white_king = Self::single_king(&board, Player::White)?;
        let black_king = Self::single_king(&board, Player::Black)?;
        Ok(Self {
            board,
            player_to_move,
            move_log: Vec::new(),
            white_king,
            black_king,
            checkmate: false,
            stalemate: false,
        })
    }

    fn single_king(board: &Board, player: Player) -> Result<Square, ChessError> {
        match board.king_squares(player).as_slice() {
            [sq] => Ok(*sq),
            others => Err(ChessError::KingCount {
                player,
                count: others.len(),
            }),
        }
    }

    /// Placement and side to move, e.g. `START_FEN` for a new game.
    pub fn to_fen(&self) -> String {
        format!("{} {}", self.board.to_fen(), self.player_to_move.fen_char())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    pub fn white_to_move(&self) -> bool {
        self.player_to_move == Player::White
    }

    /// Moves played so far, oldest first.
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn king_location(&self, player: Player) -> Square {
        match player {
            Player::White => self.white_king,
            Player::Black => self.black_king,
        }
    }

    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate
        } else if self.stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Active
        }
    }

    /// Plays `mv` without checking legality; callers validate against `valid_moves`.
    pub fn make_move(&mut self, mv: Move) {
        let from_sq = mv.from_sq();
        let to_sq = mv.to_sq();
        let moving_piece = mv.piece_moved();

        self.board.set(from_sq, Piece::Empty);
        self.board.set(to_sq, moving_piece);
        self.move_log.push(mv);

        if moving_piece.kind() == Some(PieceKind::King) {
            self.set_king_location(moving_piece.player(), to_sq);
        }

        trace!("{}: {}", self.player_to_move, mv.notation());
        self.player_to_move = self.player_to_move.opponent();
    }

    /// Takes back the last move. Returns `None` and changes nothing when no move was played.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        let moving_piece = mv.piece_moved();

        self.board.set(mv.to_sq(), mv.piece_captured());
        self.board.set(mv.from_sq(), moving_piece);

        if moving_piece.kind() == Some(PieceKind::King) {
            self.set_king_location(moving_piece.player(), mv.from_sq());
        }

        self.player_to_move = self.player_to_move.opponent();
        Some(mv)
    }

    fn set_king_location(&mut self, player: Option<Player>, sq: Square) {
        match player {
            Some(Player::White) => self.white_king = sq,
            Some(Player::Black) => self.black_king = sq,
            None => {}
        }
    }

    /// All pseudo-legal moves of the side to move; the own king may be left in check.
    pub fn possible_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        move_gen::generate_moves(&self.board, self.player_to_move, &mut moves);
        moves
    }

    /// All legal moves of the side to move. Updates the checkmate and stalemate flags.
    pub fn valid_moves(&mut self) -> MoveList {
        let mut moves = self.possible_moves();
        let mover = self.player_to_move;

        moves.retain(|&mv| {
            self.make_move(mv);
            let exposed = self.is_attacked_by(self.king_location(mover), mover.opponent());
            self.undo_move();
            !exposed
        });

        if moves.is_empty() {
            if self.in_check() {
                self.checkmate = true;
                self.stalemate = false;
                debug!("Checkmate: {} wins", mover.opponent());
            } else {
                self.checkmate = false;
                self.stalemate = true;
                debug!("Stalemate: {} has no legal move", mover);
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        moves
    }

    /// Whether the side to move has its king attacked.
    pub fn in_check(&self) -> bool {
        self.square_under_attack(self.king_location(self.player_to_move))
    }

    /// Whether the opponent of the side to move could move a piece onto `sq`.
    pub fn square_under_attack(&self, sq: Square) -> bool {
        self.is_attacked_by(sq, self.player_to_move.opponent())
    }

    // Brute force: any pseudo-legal move of `attacker` that lands on `sq`.
    // Exact for occupied squares such as a king's; pawn pushes onto an empty
    // square count while pawn diagonals onto one do not.
    fn is_attacked_by(&self, sq: Square, attacker: Player) -> bool {
        let mut replies = MoveList::new();
        move_gen::generate_moves(&self.board, attacker, &mut replies);
        replies.iter().any(|reply| reply.to_sq() == sq)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::START_FEN;

    fn play(state: &mut GameState, from: (usize, usize), to: (usize, usize)) {
        let from = Square::new(from.0, from.1);
        let to = Square::new(to.0, to.1);
        let mv = state
            .valid_moves()
            .find(from, to)
            .unwrap_or_else(|| panic!("{}{} is not legal", from, to));
        state.make_move(mv);
    }

    #[test]
    fn new_game_matches_start_fen() {
        let state = GameState::new();
        assert_eq!(state.to_fen(), START_FEN);
        assert_eq!(GameState::from_fen(START_FEN).unwrap(), state);
        assert!(state.white_to_move());
        assert_eq!(state.king_location(Player::White), Square::new(7, 4));
        assert_eq!(state.king_location(Player::Black), Square::new(0, 4));
    }

    #[test]
    fn from_fen_enforces_one_king_per_side() {
        assert_eq!(
            GameState::from_fen("8/8/8/8/8/8/8/4K3 w"),
            Err(ChessError::KingCount { player: Player::Black, count: 0 })
        );
        assert_eq!(
            GameState::from_fen("k6k/8/8/8/8/8/8/4K3 w"),
            Err(ChessError::KingCount { player: Player::Black, count: 2 })
        );
        assert!(matches!(GameState::from_fen("k7/8/8/8/8/8/8/4K3 x"), Err(ChessError::InvalidFen(_))));
        assert!(GameState::from_fen("").is_err());

        let state = GameState::from_fen("k7/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(state.player_to_move(), Player::Black);
    }

    #[test]
    fn make_move_updates_board_log_and_side() {
        let mut state = GameState::new();
        let mv = Move::new(Square::new(6, 4), Square::new(4, 4), state.board());
        state.make_move(mv);

        assert_eq!(state.board().piece_at(Square::new(6, 4)), Piece::Empty);
        assert_eq!(state.board().piece_at(Square::new(4, 4)), Piece::WPawn);
        assert_eq!(state.move_log(), &[mv]);
        assert_eq!(state.player_to_move(), Player::Black);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut state = GameState::new();
        let before = state.clone();
        assert_eq!(state.undo_move(), None);
        assert_eq!(state, before);
    }

    #[test]
    fn undo_restores_captures_and_king_cache() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/3p4/4K3 w").unwrap();
        let before = state.clone();

        let capture = state.valid_moves().find(Square::new(7, 4), Square::new(6, 3)).unwrap();
        assert!(capture.is_capture());
        state.make_move(capture);
        assert_eq!(state.king_location(Player::White), Square::new(6, 3));

        assert_eq!(state.undo_move(), Some(capture));
        assert_eq!(state.board().piece_at(Square::new(6, 3)), Piece::BPawn);
        assert_eq!(state, before);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // White bishop on e2 is pinned by the rook on e8.
        let mut state = GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w").unwrap();
        let moves = state.valid_moves();
        assert!(moves.iter().all(|mv| mv.piece_moved() != Piece::WBishop));
        assert!(!state.in_check());
    }

    #[test]
    fn check_must_be_answered() {
        let mut state = GameState::from_fen("4r1k1/8/8/8/8/8/3P1P2/R3K3 w").unwrap();
        assert!(state.in_check());
        let moves = state.valid_moves();
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(mv.piece_moved(), Piece::WKing);
        }
        assert_eq!(state.status(), GameStatus::Active);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut state = GameState::new();
        play(&mut state, (6, 5), (5, 5));
        play(&mut state, (1, 4), (3, 4));
        play(&mut state, (6, 6), (4, 6));
        play(&mut state, (0, 3), (4, 7));

        assert!(state.valid_moves().is_empty());
        assert!(state.checkmate());
        assert!(!state.stalemate());
        assert_eq!(state.status(), GameStatus::Checkmate);

        state.undo_move();
        assert!(!state.valid_moves().is_empty());
        assert_eq!(state.status(), GameStatus::Active);
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let mut state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b").unwrap();
        assert!(state.valid_moves().is_empty());
        assert!(state.stalemate());
        assert!(!state.checkmate());
        assert!(!state.in_check());
    }

    #[test]
    fn crowded_setups_keep_every_move() {
        // 27 white queens: more pseudo-legal moves than any reachable position has.
        let mut state =
            GameState::from_fen("kQQQQQNB/Q4Q1R/Q6R/Q5Q1/Q6Q/Q4Q1B/Q6Q/QQQQQ1QK w").unwrap();
        let moves = state.possible_moves();
        assert!(moves.len() > 256);

        let legal = state.valid_moves();
        assert!(!legal.is_empty());
        assert_eq!(state.status(), GameStatus::Active);
        // The black king is boxed in and attacked.
        let mut black =
            GameState::from_fen("kQQQQQNB/Q4Q1R/Q6R/Q5Q1/Q6Q/Q4Q1B/Q6Q/QQQQQ1QK b").unwrap();
        assert!(black.in_check());
        assert!(black.valid_moves().is_empty());
        assert!(black.checkmate());
    }

    #[test]
    fn square_under_attack_sees_through_simulated_moves() {
        let state = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b").unwrap();
        assert!(state.in_check());
        assert!(state.square_under_attack(Square::new(0, 5)));
        // h8 sits behind the king on the rook's ray.
        assert!(!state.square_under_attack(Square::new(0, 7)));
    }
}
