//! Closed set of boards that have already been expanded.

use rustc_hash::FxHashMap;

use crate::board::Board;

/// Boards already expanded, keyed by cell layout.
///
/// Two states with the same layout are the same node of the puzzle graph
/// regardless of the path that produced them. Each board remembers the
/// shallowest depth it was expanded at; a set built with
/// [`ExploredSet::reopening`] lets a board back in when a later route
/// reaches it strictly shallower than that.
#[derive(Debug, Default)]
pub struct ExploredSet {
    depths: FxHashMap<Board, u32>,
    reopen_shallower: bool,
}

impl ExploredSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set for depth-bounded searches, where a board first expanded deep
    /// may still lead to the goal within the bound from a shallower route.
    pub fn reopening() -> Self {
        Self {
            depths: FxHashMap::default(),
            reopen_shallower: true,
        }
    }

    #[inline]
    pub fn contains(&self, board: &Board) -> bool {
        self.depths.contains_key(board)
    }

    /// Whether a state for `board` at `depth` should be discarded.
    #[inline]
    pub fn is_closed(&self, board: &Board, depth: u32) -> bool {
        match self.depths.get(board) {
            None => false,
            Some(&seen) => !self.reopen_shallower || seen <= depth,
        }
    }

    /// Records `board` as expanded at `depth`; returns `false` if it was
    /// already present at that depth or shallower.
    #[inline]
    pub fn add(&mut self, board: Board, depth: u32) -> bool {
        match self.depths.get_mut(&board) {
            Some(seen) if *seen <= depth => false,
            Some(seen) => {
                *seen = depth;
                true
            }
            None => {
                self.depths.insert(board, depth);
                true
            }
        }
    }

    /// Number of distinct boards recorded.
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    #[test]
    fn test_keyed_by_layout_not_path() {
        let start = Board::solved(3).unwrap();
        let mut explored = ExploredSet::new();
        assert!(explored.is_empty());
        assert!(explored.add(start.clone(), 0));

        // a move followed by its inverse lands on an equal board
        let round_trip = start.replay(&[Move::Left, Move::Right]).unwrap();
        assert!(explored.contains(&round_trip));
        assert!(explored.is_closed(&round_trip, 2));
        assert!(!explored.add(round_trip, 2));
        assert_eq!(explored.len(), 1);

        assert!(!explored.contains(&start.apply(Move::Up).unwrap()));
    }

    #[test]
    fn test_plain_set_ignores_depth() {
        let board = Board::solved(3).unwrap();
        let mut explored = ExploredSet::new();
        explored.add(board.clone(), 7);
        assert!(explored.is_closed(&board, 7));
        assert!(explored.is_closed(&board, 2));
    }

    #[test]
    fn test_reopening_admits_shallower_routes_only() {
        let board = Board::solved(3).unwrap();
        let mut explored = ExploredSet::reopening();
        assert!(!explored.is_closed(&board, 7));
        assert!(explored.add(board.clone(), 7));

        assert!(explored.is_closed(&board, 7));
        assert!(explored.is_closed(&board, 9));
        assert!(!explored.is_closed(&board, 6));

        assert!(explored.add(board.clone(), 3));
        assert!(explored.is_closed(&board, 6));
        assert!(!explored.add(board, 5));
        assert_eq!(explored.len(), 1);
    }
}
