//! Defines the representation of a move in the engine.

use crate::board::Board;
use crate::constants::Piece;
use crate::square::Square;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Represents a single ply.
///
/// The moved and captured pieces are snapshots of the board taken when the
/// move is built, which is what lets `GameState::undo_move` restore the board.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Piece,
    piece_captured: Piece,
}

impl Move {
    /// Creates a move from `from` to `to`, reading both pieces off `board`.
    /// Neither legality nor coordinate range is checked.
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        Self {
            from,
            to,
            piece_moved: board.piece_at(from),
            piece_captured: board.piece_at(to),
        }
    }

    /// Gets the source square.
    pub fn from_sq(&self) -> Square {
        self.from
    }

    /// Gets the destination square.
    pub fn to_sq(&self) -> Square {
        self.to
    }

    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    /// `Piece::Empty` when nothing stood on the destination square.
    pub fn piece_captured(&self) -> Piece {
        self.piece_captured
    }

    pub fn is_capture(&self) -> bool {
        !self.piece_captured.is_empty()
    }

    /// Origin and destination square names, e.g. `e2e4`. Moves compare equal by this key.
    pub fn key(&self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// `e2e4`, or `e4xd5` when the move captures.
    pub fn notation(&self) -> String {
        if self.is_capture() {
            format!("{}x{}", self.from, self.to)
        } else {
            self.key()
        }
    }
}

// Equality looks only at the squares; the piece snapshots are ignored.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
