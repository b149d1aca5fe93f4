//! Sliding-Tile Puzzle Solver Library
//!
//! Searches the configurations of an N-puzzle (8-puzzle, 15-puzzle, ...)
//! for a sequence of blank moves that reaches the solved layout. Seven
//! classic strategies share one graph-search loop and differ in the
//! frontier they plug into it; see [`Strategy`].

pub mod board;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod heuristics;
pub mod moves;
pub mod puzzle_file;
mod solver;
pub mod strategy;
pub mod tree;

pub use board::{Board, Goal};
pub use error::InvalidPuzzle;
pub use heuristics::Heuristic;
pub use moves::Move;
pub use solver::{solve, solve_towards, Outcome, SearchResult};
pub use strategy::Strategy;
