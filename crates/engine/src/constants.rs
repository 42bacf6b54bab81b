//! Constants and piece definitions used by the chess engine.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Standard starting position (placement and side to move).
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

// Negative for Black, positive for White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Piece {
    BKing = -6,
    BQueen = -5,
    BRook = -4,
    BBishop = -3,
    BKnight = -2,
    BPawn = -1,
    Empty = 0,
    WPawn = 1,
    WKnight = 2,
    WBishop = 3,
    WRook = 4,
    WQueen = 5,
    WKing = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

/// Piece type without colour. Move generation dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Builds the piece of the given colour and kind.
    pub fn new(player: Player, kind: PieceKind) -> Self {
        match (player, kind) {
            (Player::White, PieceKind::Pawn) => Piece::WPawn,
            (Player::White, PieceKind::Knight) => Piece::WKnight,
            (Player::White, PieceKind::Bishop) => Piece::WBishop,
            (Player::White, PieceKind::Rook) => Piece::WRook,
            (Player::White, PieceKind::Queen) => Piece::WQueen,
            (Player::White, PieceKind::King) => Piece::WKing,
            (Player::Black, PieceKind::Pawn) => Piece::BPawn,
            (Player::Black, PieceKind::Knight) => Piece::BKnight,
            (Player::Black, PieceKind::Bishop) => Piece::BBishop,
            (Player::Black, PieceKind::Rook) => Piece::BRook,
            (Player::Black, PieceKind::Queen) => Piece::BQueen,
            (Player::Black, PieceKind::King) => Piece::BKing,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    /// Get the player owning a piece.
    /// Returns `None` if the piece is `Empty`.
    pub fn player(self) -> Option<Player> {
        if (self as i8) > 0 {
            Some(Player::White)
        } else if (self as i8) < 0 {
            Some(Player::Black)
        } else {
            None
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        match (self as i8).abs() {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Two-character code: colour then type, e.g. `wP`. `--` for an empty square.
    pub fn code(self) -> &'static str {
        match self {
            Piece::BKing => "bK",
            Piece::BQueen => "bQ",
            Piece::BRook => "bR",
            Piece::BBishop => "bB",
            Piece::BKnight => "bN",
            Piece::BPawn => "bP",
            Piece::Empty => "--",
            Piece::WPawn => "wP",
            Piece::WKnight => "wN",
            Piece::WBishop => "wB",
            Piece::WRook => "wR",
            Piece::WQueen => "wQ",
            Piece::WKing => "wK",
        }
    }
}

// Add FEN character conversions to Piece
impl Piece {
    pub fn to_fen_char(self) -> char {
        match self {
            Piece::BKing => 'k',
            Piece::BQueen => 'q',
            Piece::BRook => 'r',
            Piece::BBishop => 'b',
            Piece::BKnight => 'n',
            Piece::BPawn => 'p',
            Piece::Empty => '.',
            Piece::WPawn => 'P',
            Piece::WKnight => 'N',
            Piece::WBishop => 'B',
            Piece::WRook => 'R',
            Piece::WQueen => 'Q',
            Piece::WKing => 'K',
        }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        match c {
            'k' => Some(Piece::BKing),
            'q' => Some(Piece::BQueen),
            'r' => Some(Piece::BRook),
            'b' => Some(Piece::BBishop),
            'n' => Some(Piece::BKnight),
            'p' => Some(Piece::BPawn),
            'K' => Some(Piece::WKing),
            'Q' => Some(Piece::WQueen),
            'R' => Some(Piece::WRook),
            'B' => Some(Piece::WBishop),
            'N' => Some(Piece::WKnight),
            'P' => Some(Piece::WPawn),
            _ => None,
        }
    }
}

impl Player {
    /// Get the opponent of the current player.
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a single pawn step.
    pub fn pawn_direction(self) -> isize {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Row the player's pawns start on; double steps are only allowed from here.
    pub fn pawn_start_row(self) -> usize {
        match self {
            Player::White => 6,
            Player::Black => 1,
        }
    }

    pub fn fen_char(self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}
