//! Moves and successor generation.
//!
//! A move names the direction the blank travels. The numbered tile that
//! physically slides goes the opposite way, see [`Move::tile_direction`].

use std::fmt;

use smallvec::SmallVec;

use crate::board::Coord;
use crate::tree::{NodeId, State};

/// Children of one state; a blank has at most four neighbours.
pub type Successors = SmallVec<[State; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// All moves in generation order.
    ///
    /// Ordering note: depth-first strategies pop the last pushed child first,
    /// so this order decides which branch they try first.
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// (row, column) shift of the blank.
    #[inline]
    pub const fn offset(self) -> Coord {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Left => Move::Right,
            Move::Down => Move::Up,
            Move::Right => Move::Left,
        }
    }

    /// Direction the numbered tile travels when the blank makes this move.
    #[inline]
    pub const fn tile_direction(self) -> Self {
        self.inverse()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        f.write_str(name)
    }
}

/// Generates the legal children of `state`, which lives at `parent` in the
/// search tree.
///
/// Each child is the parent's board with the blank swapped into one
/// neighbouring cell, one level deeper. Moves that would push the blank off
/// the grid are skipped.
pub fn successors(parent: NodeId, state: &State) -> Successors {
    Move::ALL
        .iter()
        .filter_map(|&direction| {
            state
                .board
                .apply(direction)
                .map(|board| State::child(board, parent, direction, state.depth + 1))
        })
        .collect()
}
