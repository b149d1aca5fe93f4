//! Distance estimates used by the informed strategies.
//!
//! Both estimates ignore the blank, so neither overestimates the number of
//! slides left: each slide moves exactly one numbered tile by one cell.

use std::fmt;
use std::str::FromStr;

use crate::board::{idx_to_coord, Board, Goal};

/// A pure scoring function: lower means closer to the goal.
///
/// The board and the goal must have the same size.
pub type HeuristicFn = fn(&Board, &Goal) -> u32;

/// Number of numbered tiles not on their goal cell.
pub fn misplaced_tiles(board: &Board, goal: &Goal) -> u32 {
    debug_assert_eq!(board.size(), goal.board().size());
    board
        .cells()
        .iter()
        .zip(goal.board().cells())
        .filter(|&(&tile, &target)| tile != 0 && tile != target)
        .count() as u32
}

/// Sum of row and column distances from every numbered tile to its home.
pub fn manhattan_distance(board: &Board, goal: &Goal) -> u32 {
    debug_assert_eq!(board.size(), goal.board().size());
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(cell_index, &tile)| {
            let (row, col) = idx_to_coord(board.size(), cell_index);
            let (home_row, home_col) = goal.home(tile);
            row.abs_diff(home_row) + col.abs_diff(home_col)
        })
        .sum()
}

/// Scores every board the same; turns A* into Dijkstra.
pub fn zero(_board: &Board, _goal: &Goal) -> u32 {
    0
}

/// Selectable heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heuristic {
    MisplacedTiles,
    #[default]
    Manhattan,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::MisplacedTiles, Heuristic::Manhattan];

    pub fn function(self) -> HeuristicFn {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles,
            Heuristic::Manhattan => manhattan_distance,
        }
    }

    /// Short name accepted by [`FromStr`].
    pub fn code(self) -> &'static str {
        match self {
            Heuristic::MisplacedTiles => "misplaced",
            Heuristic::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "misplaced" | "misplaced-tiles" | "hamming" => Ok(Heuristic::MisplacedTiles),
            "manhattan" | "taxicab" => Ok(Heuristic::Manhattan),
            _ => Err(format!(
                "unknown heuristic '{s}', expected one of: misplaced, manhattan"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_scores_zero() {
        let goal = Goal::canonical(4).unwrap();
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.function()(goal.board(), &goal), 0);
        }
    }

    #[test]
    fn test_one_move_from_goal() {
        let goal = Goal::canonical(3).unwrap();
        let board = Board::new(3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(misplaced_tiles(&board, &goal), 1);
        assert_eq!(manhattan_distance(&board, &goal), 1);
    }

    #[test]
    fn test_scattered_board() {
        let goal = Goal::canonical(3).unwrap();
        let board = Board::new(3, &[8, 1, 3, 4, 0, 2, 7, 6, 5]).unwrap();
        assert_eq!(misplaced_tiles(&board, &goal), 5);
        assert_eq!(manhattan_distance(&board, &goal), 10);
        assert_eq!(zero(&board, &goal), 0);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        let goal = Goal::canonical(3).unwrap();
        let boards = [
            [2, 8, 3, 1, 6, 4, 7, 0, 5],
            [0, 1, 2, 3, 4, 5, 6, 7, 8],
            [8, 6, 7, 2, 5, 4, 3, 0, 1],
        ];
        for cells in boards {
            let board = Board::new(3, &cells).unwrap();
            assert!(manhattan_distance(&board, &goal) >= misplaced_tiles(&board, &goal));
        }
    }

    #[test]
    fn test_custom_goal() {
        let goal = Goal::new(Board::new(2, &[0, 1, 2, 3]).unwrap());
        let board = Board::solved(2).unwrap(); // 1 2 / 3 0
        assert_eq!(misplaced_tiles(&board, &goal), 3);
        // 1: (0,0)->(0,1), 2: (0,1)->(1,0), 3: (1,0)->(1,1)
        assert_eq!(manhattan_distance(&board, &goal), 1 + 2 + 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_size_mismatch_is_rejected() {
        let goal = Goal::canonical(3).unwrap();
        let board = Board::solved(4).unwrap();
        misplaced_tiles(&board, &goal);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Manhattan".parse::<Heuristic>(), Ok(Heuristic::Manhattan));
        assert_eq!("misplaced".parse::<Heuristic>(), Ok(Heuristic::MisplacedTiles));
        assert!("euclid".parse::<Heuristic>().is_err());
    }
}
