//! Board representation for square sliding-tile puzzles.
//!
//! A board of size `k` is a flat, row-major array of `k * k` tiles where
//! `0` is the blank and `1..k*k` are the numbered tiles. The canonical goal
//! lists the tiles in ascending order with the blank in the last cell.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::InvalidPuzzle;
use crate::moves::Move;

/// Largest supported side length; every tile must fit in a `u8`.
pub const MAX_SIZE: usize = 15;

/// A (row, column) position on the board.
pub type Coord = (i32, i32);

/// Converts (row, column) coordinates to a linear cell index.
///
/// Index order is row-major: `idx = row * size + col`.
#[inline(always)]
pub const fn coord_to_idx(size: usize, row: i32, col: i32) -> usize {
    (row as usize) * size + (col as usize)
}

/// Converts a linear cell index to (row, column) coordinates.
#[inline(always)]
pub const fn idx_to_coord(size: usize, cell_index: usize) -> Coord {
    ((cell_index / size) as i32, (cell_index % size) as i32)
}

/// One configuration of the puzzle.
///
/// Equality and hashing cover the cell layout only, so two boards reached
/// along different paths compare equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Box<[u8]>,
    blank: usize,
}

impl Board {
    /// Builds a board from row-major cells, validating that they form a
    /// permutation of `0..size*size`.
    pub fn new(size: usize, cells: &[u32]) -> Result<Self, InvalidPuzzle> {
        if !(2..=MAX_SIZE).contains(&size) {
            return Err(InvalidPuzzle::UnsupportedSize(size));
        }
        let cell_count = size * size;
        if cells.len() != cell_count {
            return Err(InvalidPuzzle::CellCount {
                size,
                expected: cell_count,
                found: cells.len(),
            });
        }

        match cells.iter().filter(|&&tile| tile == 0).count() {
            0 => return Err(InvalidPuzzle::MissingBlank),
            1 => {}
            blanks => return Err(InvalidPuzzle::MultipleBlanks(blanks)),
        }

        let mut seen = vec![false; cell_count];
        for &tile in cells {
            if tile as usize >= cell_count {
                return Err(InvalidPuzzle::TileOutOfRange {
                    tile,
                    cells: cell_count,
                });
            }
            if seen[tile as usize] {
                return Err(InvalidPuzzle::DuplicateTile(tile as u8));
            }
            seen[tile as usize] = true;
        }

        let cells: Box<[u8]> = cells.iter().map(|&tile| tile as u8).collect();
        let blank = cells.iter().position(|&tile| tile == 0).unwrap_or_default();
        Ok(Self { size, cells, blank })
    }

    /// The canonical solved board: `1, 2, ..., k*k - 1, 0`.
    pub fn solved(size: usize) -> Result<Self, InvalidPuzzle> {
        if !(2..=MAX_SIZE).contains(&size) {
            return Err(InvalidPuzzle::UnsupportedSize(size));
        }
        let cell_count = size * size;
        let cells: Box<[u8]> = (1..cell_count)
            .map(|tile| tile as u8)
            .chain(std::iter::once(0))
            .collect();
        Ok(Self {
            size,
            cells,
            blank: cell_count - 1,
        })
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major tiles, `0` for the blank.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Cell index of the blank.
    #[inline]
    pub fn blank(&self) -> usize {
        self.blank
    }

    /// Position of the blank as (row, column).
    #[inline]
    pub fn blank_coord(&self) -> Coord {
        idx_to_coord(self.size, self.blank)
    }

    /// Slides the blank one cell in `direction`.
    ///
    /// Returns `None` if the blank would leave the grid.
    pub fn apply(&self, direction: Move) -> Option<Self> {
        let (row, col) = self.blank_coord();
        let (row_delta, col_delta) = direction.offset();
        let (target_row, target_col) = (row + row_delta, col + col_delta);

        let bounds = 0..self.size as i32;
        if !bounds.contains(&target_row) || !bounds.contains(&target_col) {
            return None;
        }

        let target = coord_to_idx(self.size, target_row, target_col);
        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);
        Some(Self {
            size: self.size,
            cells,
            blank: target,
        })
    }

    /// Applies a sequence of moves in order.
    ///
    /// Returns `None` as soon as one of them is illegal.
    pub fn replay(&self, moves: &[Move]) -> Option<Self> {
        moves
            .iter()
            .try_fold(self.clone(), |board, &direction| board.apply(direction))
    }

    /// Whether `goal` lies in the same reachability class as this board.
    ///
    /// Every slide is one transposition involving the blank and shifts the
    /// blank's taxicab position by one, so the permutation parity taking this
    /// board to the goal must match the parity of the blank's distance.
    pub fn is_solvable_towards(&self, goal: &Goal) -> bool {
        if goal.board.size != self.size {
            return false;
        }

        let cell_count = self.cells.len();
        // where each cell's tile has to end up
        let destination: Vec<usize> = self
            .cells
            .iter()
            .map(|&tile| {
                let (row, col) = goal.home(tile);
                coord_to_idx(self.size, row, col)
            })
            .collect();

        let mut visited = vec![false; cell_count];
        let mut cycles = 0;
        for start in 0..cell_count {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut cell = start;
            while !visited[cell] {
                visited[cell] = true;
                cell = destination[cell];
            }
        }
        let permutation_parity = (cell_count - cycles) % 2;

        let (blank_row, blank_col) = self.blank_coord();
        let (goal_row, goal_col) = goal.board.blank_coord();
        let blank_distance = blank_row.abs_diff(goal_row) + blank_col.abs_diff(goal_col);

        permutation_parity == (blank_distance % 2) as usize
    }

    /// Random walk of `steps` slides away from the solved board.
    ///
    /// A step never undoes the previous one, and the result is always
    /// solvable towards the canonical goal.
    pub fn scrambled<R: Rng + ?Sized>(
        size: usize,
        steps: usize,
        rng: &mut R,
    ) -> Result<Self, InvalidPuzzle> {
        let mut board = Self::solved(size)?;
        let mut previous: Option<Move> = None;

        for _ in 0..steps {
            let options: Vec<(Move, Board)> = Move::ALL
                .iter()
                .filter(|&&direction| previous != Some(direction.inverse()))
                .filter_map(|&direction| board.apply(direction).map(|next| (direction, next)))
                .collect();
            // every cell has at least two neighbours, so one survives the filter
            let Some((direction, next)) = options.choose(rng).cloned() else {
                break;
            };
            board = next;
            previous = Some(direction);
        }

        Ok(board)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board{:?}", self.cells)
    }
}

/// Renders the board as a grid with `.` for the blank.
///
/// Tiles are right-aligned to the width of the largest tile number.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();

        for row in self.cells.chunks(self.size) {
            for (col, &tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if tile == 0 {
                    write!(f, "{:>width$}", '.', width = width)?;
                } else {
                    write!(f, "{:>width$}", tile, width = width)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// The configuration a search is trying to reach.
///
/// Keeps a lookup of each tile's home coordinates so heuristics can score a
/// board in one pass.
#[derive(Clone, Debug)]
pub struct Goal {
    board: Board,
    /// `homes[tile]` is where `tile` sits in the goal board.
    homes: Box<[Coord]>,
}

impl Goal {
    /// Wraps an arbitrary board as the target configuration.
    pub fn new(board: Board) -> Self {
        let mut homes = vec![(0, 0); board.cells.len()].into_boxed_slice();
        for (cell_index, &tile) in board.cells.iter().enumerate() {
            homes[tile as usize] = idx_to_coord(board.size, cell_index);
        }
        Self { board, homes }
    }

    /// The canonical goal for a board of side `size`.
    pub fn canonical(size: usize) -> Result<Self, InvalidPuzzle> {
        Ok(Self::new(Board::solved(size)?))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Home coordinates of `tile` in the goal layout.
    #[inline]
    pub fn home(&self, tile: u8) -> Coord {
        self.homes[tile as usize]
    }

    #[inline]
    pub fn is_reached(&self, board: &Board) -> bool {
        self.board == *board
    }
}
