//! The 8x8 board array.

use crate::constants::{Piece, PieceKind, Player, BOARD_SIZE};
use crate::error::ChessError;
use crate::square::Square;
use std::fmt;
use std::ops::Index;

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Contents of every square. Row 0 is Black's back rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Piece; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting position.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][col] = Piece::new(Player::Black, kind);
            board.squares[1][col] = Piece::BPawn;
            board.squares[6][col] = Piece::WPawn;
            board.squares[7][col] = Piece::new(Player::White, kind);
        }
        board
    }

    /// Parses the piece-placement field of a FEN string.
    pub fn from_fen(placement: &str) -> Result<Self, ChessError> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(ChessError::InvalidFen(placement.to_string()));
        }

        for (row, rank) in ranks.into_iter().enumerate() {
            let mut col = 0;
            for ch in rank.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    col += digit as usize;
                } else {
                    let piece = Piece::from_fen_char(ch)
                        .ok_or_else(|| ChessError::InvalidFen(placement.to_string()))?;
                    if col >= BOARD_SIZE {
                        return Err(ChessError::InvalidFen(placement.to_string()));
                    }
                    board.squares[row][col] = piece;
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err(ChessError::InvalidFen(placement.to_string()));
                }
            }
            if col != BOARD_SIZE {
                return Err(ChessError::InvalidFen(placement.to_string()));
            }
        }
        Ok(board)
    }

    /// The piece-placement field of a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(72);
        for (r, row) in self.squares.iter().enumerate() {
            let mut empty_count = 0;
            for &piece in row {
                if piece.is_empty() {
                    empty_count += 1;
                } else {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_fen_char());
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if r < BOARD_SIZE - 1 {
                fen.push('/');
            }
        }
        fen
    }

    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq.row][sq.col]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_empty()
    }

    /// Puts `piece` on `sq`, replacing whatever was there.
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.row][sq.col] = piece;
    }

    pub fn rows(&self) -> &[[Piece; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Every occupied square with its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.piece_at(sq)))
            .filter(|(_, piece)| !piece.is_empty())
    }

    pub fn king_squares(&self, player: Player) -> Vec<Square> {
        let king = Piece::new(player, PieceKind::King);
        self.pieces()
            .filter(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl Index<Square> for Board {
    type Output = Piece;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row][sq.col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for (r, row) in self.squares.iter().enumerate() {
            write!(f, "{} | ", BOARD_SIZE - r)?;
            for piece in row {
                write!(f, "{} ", piece.to_fen_char())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")
    }
}
