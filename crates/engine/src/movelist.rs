//! The move accumulator shared by every generator.

use crate::r#move::Move;
use crate::square::Square;
use std::ops::Index;

/// Enough for any position reachable in play; set-up positions may grow past it.
const MAX_MOVES: usize = 256;

#[derive(Debug, Clone)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    pub fn add(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    /// The listed move going from `from` to `to`, if any.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.iter()
            .find(|mv| mv.from_sq() == from && mv.to_sq() == to)
            .copied()
    }

    /// Keeps the moves for which `keep` returns true, preserving order.
    pub fn retain<F: FnMut(&Move) -> bool>(&mut self, keep: F) {
        self.moves.retain(keep);
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
