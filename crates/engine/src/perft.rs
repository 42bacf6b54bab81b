//! Perft: counts the leaf nodes of the legal move tree to validate generation.

use crate::game_state::GameState;
use crate::r#move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

/// Counts the positions reachable in exactly `depth` plies.
///
/// The state comes back unchanged, terminal flags included.
pub fn perft(state: &mut GameState, depth: u32) -> PerftCounts {
    let flags = (state.checkmate, state.stalemate);
    let counts = perft_recurse(state, depth);
    (state.checkmate, state.stalemate) = flags;
    counts
}

/// Per root move counts, in generation order.
pub fn perft_divide(state: &mut GameState, depth: u32) -> Vec<(Move, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }
    let flags = (state.checkmate, state.stalemate);
    let root_moves = state.valid_moves();
    let mut divided = Vec::with_capacity(root_moves.len());

    for &mv in &root_moves {
        state.make_move(mv);
        let mut counts = perft_recurse(state, depth - 1);
        state.undo_move();
        if depth == 1 && mv.is_capture() {
            counts.captures += 1;
        }
        divided.push((mv, counts));
    }

    (state.checkmate, state.stalemate) = flags;
    divided
}

fn perft_recurse(state: &mut GameState, depth: u32) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            captures: 0,
        };
    }

    let moves = state.valid_moves();
    if depth == 1 {
        return PerftCounts {
            nodes: moves.len() as u64,
            captures: moves.iter().filter(|mv| mv.is_capture()).count() as u64,
        };
    }

    let mut total = PerftCounts::default();
    for &mv in &moves {
        state.make_move(mv);
        total.merge(perft_recurse(state, depth - 1));
        state.undo_move();
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_counts_from_the_start() {
        let mut state = GameState::new();
        assert_eq!(perft(&mut state, 0).nodes, 1);
        assert_eq!(perft(&mut state, 1), PerftCounts { nodes: 20, captures: 0 });
        assert_eq!(perft(&mut state, 2), PerftCounts { nodes: 400, captures: 0 });
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut state = GameState::new();
        let divided = perft_divide(&mut state, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, counts)| counts.nodes == 20));
        let total: u64 = divided.iter().map(|(_, counts)| counts.nodes).sum();
        assert_eq!(total, perft(&mut state, 2).nodes);
    }
}
