//! Open sets for the generic search loop.
//!
//! The frontier stores node ids only; the states themselves stay in the
//! search tree. Each strategy differs from the others mainly in which of
//! these orderings it plugs into the loop.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use log::debug;

use crate::tree::{NodeId, State};

/// Ordering policy for states waiting to be expanded.
pub trait Frontier {
    fn push(&mut self, id: NodeId, state: &State);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a freshly generated state may enter at all.
    ///
    /// A state turned away here is never materialized, and the search
    /// reports that it hit a limit instead of exhausting the graph.
    fn admits(&self, _state: &State) -> bool {
        true
    }

    /// Whether a board already expanded may be expanded again when a
    /// later route reaches it at a strictly shallower depth.
    fn reopens_shallower(&self) -> bool {
        false
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct Stack {
    items: Vec<NodeId>,
}

impl Frontier for Stack {
    fn push(&mut self, id: NodeId, _state: &State) {
        self.items.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct Queue {
    items: VecDeque<NodeId>,
}

impl Frontier for Queue {
    fn push(&mut self, id: NodeId, _state: &State) {
        self.items.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Min-priority queue keyed by a function of the state.
///
/// Equal keys come out in insertion order: every entry carries a sequence
/// number that breaks ties, so runs are reproducible.
pub struct PriorityQueue<K> {
    heap: BinaryHeap<Reverse<(u32, u64, NodeId)>>,
    key: K,
    sequence: u64,
}

impl<K: Fn(&State) -> u32> PriorityQueue<K> {
    pub fn new(key: K) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key,
            sequence: 0,
        }
    }
}

impl<K: Fn(&State) -> u32> Frontier for PriorityQueue<K> {
    fn push(&mut self, id: NodeId, state: &State) {
        let priority = (self.key)(state);
        self.heap.push(Reverse((priority, self.sequence, id)));
        self.sequence += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, id))| id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Stack that refuses states deeper than `limit`.
#[derive(Debug)]
pub struct BoundedStack {
    stack: Stack,
    limit: u32,
}

impl BoundedStack {
    pub fn new(limit: u32) -> Self {
        Self {
            stack: Stack::default(),
            limit,
        }
    }
}

impl Frontier for BoundedStack {
    fn push(&mut self, id: NodeId, state: &State) {
        self.stack.push(id, state);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn admits(&self, state: &State) -> bool {
        state.depth <= self.limit
    }

    fn reopens_shallower(&self) -> bool {
        true
    }
}

/// Depth-first stack that deepens in stages.
///
/// States deeper than the current bound are parked. Once the active stack
/// drains, the parked states become active and the bound grows by `step`.
#[derive(Debug)]
pub struct DeepeningStack {
    active: Vec<NodeId>,
    parked: Vec<NodeId>,
    step: u32,
    bound: u32,
}

impl DeepeningStack {
    pub fn new(step: u32) -> Self {
        let step = step.max(1);
        Self {
            active: Vec::new(),
            parked: Vec::new(),
            step,
            bound: step,
        }
    }

    /// Current depth bound.
    pub fn bound(&self) -> u32 {
        self.bound
    }
}

impl Frontier for DeepeningStack {
    fn push(&mut self, id: NodeId, state: &State) {
        if state.depth <= self.bound {
            self.active.push(id);
        } else {
            self.parked.push(id);
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        if self.active.is_empty() && !self.parked.is_empty() {
            std::mem::swap(&mut self.active, &mut self.parked);
            self.bound += self.step;
            debug!(
                "depth bound raised to {} with {} parked states",
                self.bound,
                self.active.len()
            );
        }
        self.active.pop()
    }

    fn len(&self) -> usize {
        self.active.len() + self.parked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::moves::Move;
    use crate::tree::SearchTree;

    /// Hangs one child per entry of `depths` off the root and returns their ids.
    fn states_with_depths(depths: &[u32]) -> (SearchTree, Vec<NodeId>) {
        let board = Board::solved(2).unwrap();
        let mut tree = SearchTree::new(board.clone());
        let ids = depths
            .iter()
            .map(|&depth| {
                tree.insert(State::child(board.clone(), NodeId::ROOT, Move::Up, depth))
            })
            .collect();
        (tree, ids)
    }

    fn drain(frontier: &mut impl Frontier) -> Vec<NodeId> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    fn fill(frontier: &mut impl Frontier, tree: &SearchTree, ids: &[NodeId]) {
        for &id in ids {
            frontier.push(id, tree.get(id));
        }
    }

    #[test]
    fn test_stack_is_lifo() {
        let (tree, ids) = states_with_depths(&[1, 1, 1]);
        let mut stack = Stack::default();
        fill(&mut stack, &tree, &ids);
        assert_eq!(stack.len(), 3);
        assert_eq!(drain(&mut stack), vec![ids[2], ids[1], ids[0]]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_queue_is_fifo() {
        let (tree, ids) = states_with_depths(&[1, 1, 1]);
        let mut queue = Queue::default();
        fill(&mut queue, &tree, &ids);
        assert_eq!(drain(&mut queue), ids);
    }

    #[test]
    fn test_priority_queue_breaks_ties_fifo() {
        let (tree, ids) = states_with_depths(&[3, 1, 2, 1, 3]);
        let mut queue = PriorityQueue::new(|state: &State| state.depth);
        fill(&mut queue, &tree, &ids);
        assert_eq!(
            drain(&mut queue),
            vec![ids[1], ids[3], ids[2], ids[0], ids[4]]
        );
    }

    #[test]
    fn test_bounded_stack_admits_up_to_limit() {
        let (tree, ids) = states_with_depths(&[0, 2, 3]);
        let bounded = BoundedStack::new(2);
        assert!(bounded.admits(tree.get(ids[0])));
        assert!(bounded.admits(tree.get(ids[1])));
        assert!(!bounded.admits(tree.get(ids[2])));
        assert!(!BoundedStack::new(0).admits(tree.get(ids[1])));
        assert!(bounded.reopens_shallower());
        assert!(!Stack::default().reopens_shallower());
    }

    #[test]
    fn test_deepening_stack_resumes_parked_states() {
        let (tree, ids) = states_with_depths(&[1, 5, 2, 9]);
        let mut stack = DeepeningStack::new(3);
        fill(&mut stack, &tree, &ids);
        assert_eq!(stack.len(), 4);

        assert_eq!(stack.pop(), Some(ids[2]));
        assert_eq!(stack.pop(), Some(ids[0]));
        assert_eq!(stack.bound(), 3);

        // active stack drained: parked states come back with a wider bound
        assert_eq!(stack.pop(), Some(ids[3]));
        assert_eq!(stack.bound(), 6);
        assert_eq!(stack.pop(), Some(ids[1]));
        assert_eq!(stack.pop(), None);
    }
}
