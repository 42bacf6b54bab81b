//! Errors returned by the fallible parts of the engine.

use crate::constants::Player;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    /// The board must carry exactly one king per side.
    #[error("expected exactly one {player} king, found {count}")]
    KingCount { player: Player, count: usize },
}
