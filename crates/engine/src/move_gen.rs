//! Pseudo-legal move generation, including pre-computed knight and king targets.

use crate::board::Board;
use crate::constants::{PieceKind, Player, BOARD_SIZE};
use crate::movelist::MoveList;
use crate::r#move::Move;
use crate::square::Square;
use once_cell::sync::Lazy;

const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const fn sq_to_idx(sq: Square) -> usize {
    sq.row * BOARD_SIZE + sq.col
}

/// On-board targets of the fixed-offset pieces, indexed by square.
pub struct LeaperTables {
    pub knight: [Vec<Square>; 64],
    pub king: [Vec<Square>; 64],
}

impl LeaperTables {
    fn new() -> Self {
        let targets = |offsets: &[(isize, isize)], idx: usize| -> Vec<Square> {
            let from = Square::new(idx / BOARD_SIZE, idx % BOARD_SIZE);
            offsets
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .collect()
        };
        Self {
            knight: std::array::from_fn(|idx| targets(&KNIGHT_OFFSETS, idx)),
            king: std::array::from_fn(|idx| targets(&KING_OFFSETS, idx)),
        }
    }
}

// Initialized lazily and only once.
pub static LEAPER_TABLES: Lazy<LeaperTables> = Lazy::new(LeaperTables::new);

/// Appends every pseudo-legal move of `player` to `moves`, scanning row-major.
pub fn generate_moves(board: &Board, player: Player, moves: &mut MoveList) {
    for (from, piece) in board.pieces() {
        if piece.player() == Some(player) {
            generate_piece_moves(board, from, moves);
        }
    }
}

/// Appends the pseudo-legal moves of the piece standing on `from`.
pub fn generate_piece_moves(board: &Board, from: Square, moves: &mut MoveList) {
    let piece = board.piece_at(from);
    let (Some(player), Some(kind)) = (piece.player(), piece.kind()) else {
        return;
    };

    match kind {
        PieceKind::Pawn => pawn_moves(board, from, player, moves),
        PieceKind::Rook => slider_moves(board, from, player, &ROOK_DIRECTIONS, moves),
        PieceKind::Bishop => slider_moves(board, from, player, &BISHOP_DIRECTIONS, moves),
        PieceKind::Queen => {
            slider_moves(board, from, player, &BISHOP_DIRECTIONS, moves);
            slider_moves(board, from, player, &ROOK_DIRECTIONS, moves);
        }
        PieceKind::Knight => leaper_moves(board, from, player, &LEAPER_TABLES.knight, moves),
        PieceKind::King => leaper_moves(board, from, player, &LEAPER_TABLES.king, moves),
    }
}

fn pawn_moves(board: &Board, from: Square, player: Player, moves: &mut MoveList) {
    let dir = player.pawn_direction();

    // The double step is only looked at once the single step is known to be empty.
    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty(one_step) {
            moves.add(Move::new(from, one_step, board));
            if from.row == player.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * dir, 0) {
                    if board.is_empty(two_step) {
                        moves.add(Move::new(from, two_step, board));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc) {
            if board.piece_at(target).player() == Some(player.opponent()) {
                moves.add(Move::new(from, target, board));
            }
        }
    }
}

fn slider_moves(
    board: &Board,
    from: Square,
    player: Player,
    directions: &[(isize, isize)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(target) = current.offset(dr, dc) {
            match board.piece_at(target).player() {
                None => moves.add(Move::new(from, target, board)),
                Some(owner) if owner == player => break,
                Some(_) => {
                    moves.add(Move::new(from, target, board));
                    break;
                }
            }
            current = target;
        }
    }
}

fn leaper_moves(
    board: &Board,
    from: Square,
    player: Player,
    table: &[Vec<Square>; 64],
    moves: &mut MoveList,
) {
    for &target in &table[sq_to_idx(from)] {
        if board.piece_at(target).player() != Some(player) {
            moves.add(Move::new(from, target, board));
        }
    }
}
