//! Search tree storage and path reconstruction.
//!
//! States live in an append-only arena owned by one search. A state refers
//! to its parent by index, so the tree has no reference cycles even though
//! the puzzle graph does; duplicate boards are filtered by the explored set,
//! not by node identity.

use crate::board::Board;
use crate::moves::Move;

/// Index of a state in its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The start state is always the first node of a tree.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

/// One node of the search tree.
#[derive(Debug, Clone)]
pub struct State {
    pub board: Board,
    /// `None` only for the start state.
    pub parent: Option<NodeId>,
    /// Move that produced this state from its parent.
    pub mv: Option<Move>,
    /// Number of moves from the start.
    pub depth: u32,
}

impl State {
    pub fn root(board: Board) -> Self {
        Self {
            board,
            parent: None,
            mv: None,
            depth: 0,
        }
    }

    pub fn child(board: Board, parent: NodeId, mv: Move, depth: u32) -> Self {
        Self {
            board,
            parent: Some(parent),
            mv: Some(mv),
            depth,
        }
    }

    /// Accumulated path cost. Every slide costs one.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.depth
    }
}

/// Arena holding every state materialized during one search.
#[derive(Debug)]
pub struct SearchTree {
    states: Vec<State>,
}

impl SearchTree {
    /// Starts a tree whose root is `start`.
    pub fn new(start: Board) -> Self {
        Self {
            states: vec![State::root(start)],
        }
    }

    pub fn insert(&mut self, state: State) -> NodeId {
        let id = NodeId(self.states.len());
        self.states.push(state);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &State {
        &self.states[id.index()]
    }

    /// Number of states materialized so far, the root included.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Moves leading from the root to `id`, in forward order.
    ///
    /// Empty when `id` is the root.
    pub fn path_to(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.get(id).depth as usize);
        let mut current = self.get(id);

        while let (Some(parent), Some(mv)) = (current.parent, current.mv) {
            moves.push(mv);
            current = self.get(parent);
        }

        moves.reverse();
        moves
    }
}
