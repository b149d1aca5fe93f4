//! Search strategies for sliding-tile puzzles.
//!
//! Every strategy except hill-climb runs the same graph-search loop:
//! - pop a state from the frontier, skipping boards already expanded
//! - stop if it matches the goal
//! - otherwise mark it explored and push its unexplored children
//!
//! The strategies differ only in the [`Frontier`] they plug in and, for the
//! priority-ordered ones, in the key they sort by.

use std::fmt;

use log::{debug, trace};

use crate::board::{Board, Goal};
use crate::error::InvalidPuzzle;
use crate::explored::ExploredSet;
use crate::frontier::{BoundedStack, DeepeningStack, Frontier, PriorityQueue, Queue, Stack};
use crate::heuristics::{self, Heuristic, HeuristicFn};
use crate::moves::{successors, Move};
use crate::strategy::Strategy;
use crate::tree::{NodeId, SearchTree, State};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    /// The frontier ran dry; the goal is unreachable from the start.
    NoSolution,
    /// A depth bound withheld states before the goal was found. A solution
    /// may still exist deeper.
    LimitReached,
    /// Hill-climb reached a board none of whose neighbours score better.
    LocalOptimum,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Solved => "solved",
            Outcome::NoSolution => "no solution found",
            Outcome::LimitReached => "depth limit reached",
            Outcome::LocalOptimum => "stuck at local optimum",
        };
        f.write_str(text)
    }
}

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: Outcome,
    /// Blank moves from start to goal. Empty unless solved.
    pub moves: Vec<Move>,
    /// States expanded, or steps taken by hill-climb. Depth-limited search
    /// counts a board again each time a shallower route reopens it.
    pub expanded: usize,
    /// States materialized, the start included.
    pub generated: usize,
    /// Largest frontier length seen.
    pub peak_frontier: usize,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// The move sequence, if the search found one.
    pub fn solution(&self) -> Option<&[Move]> {
        self.is_solved().then_some(self.moves.as_slice())
    }
}

/// Solves `start` towards the canonical goal (ascending tiles, blank last).
///
/// `heuristic` is used by the informed strategies and defaults to
/// Manhattan distance; the others ignore it.
pub fn solve(
    start: &Board,
    strategy: Strategy,
    heuristic: Option<Heuristic>,
) -> Result<SearchResult, InvalidPuzzle> {
    let goal = Goal::canonical(start.size())?;
    solve_towards(start, &goal, strategy, heuristic)
}

/// Solves `start` towards an arbitrary goal layout of the same size.
pub fn solve_towards(
    start: &Board,
    goal: &Goal,
    strategy: Strategy,
    heuristic: Option<Heuristic>,
) -> Result<SearchResult, InvalidPuzzle> {
    if goal.board().size() != start.size() {
        return Err(InvalidPuzzle::GoalSizeMismatch {
            start: start.size(),
            goal: goal.board().size(),
        });
    }

    if heuristic.is_some() && !strategy.is_informed() {
        debug!("{} is uninformed, ignoring heuristic", strategy.name());
    }
    let heuristic = heuristic.unwrap_or_default();
    let estimate = heuristic.function();

    debug!(
        "starting {} search on {:?} (heuristic: {})",
        strategy.name(),
        start,
        heuristic
    );

    let result = match strategy {
        Strategy::DepthFirst => graph_search(start, goal, Stack::default()),
        Strategy::BreadthFirst => graph_search(start, goal, Queue::default()),
        Strategy::GreedyBestFirst => graph_search(
            start,
            goal,
            PriorityQueue::new(|state: &State| estimate(&state.board, goal)),
        ),
        Strategy::AStar => graph_search(start, goal, a_star_queue(goal, estimate)),
        Strategy::Dijkstra => graph_search(start, goal, a_star_queue(goal, heuristics::zero)),
        Strategy::DepthLimited { limit } => graph_search(start, goal, BoundedStack::new(limit)),
        Strategy::HillClimb => hill_climb(start, goal, estimate),
        Strategy::IterativeDeepening { step } => {
            graph_search(start, goal, DeepeningStack::new(step))
        }
    };

    debug!(
        "{} finished: {} after {} expansions ({} generated, peak frontier {})",
        strategy.name(),
        result.outcome,
        result.expanded,
        result.generated,
        result.peak_frontier
    );

    Ok(result)
}

/// Priority queue ordered by path cost plus estimate.
fn a_star_queue(goal: &Goal, estimate: HeuristicFn) -> PriorityQueue<impl Fn(&State) -> u32 + '_> {
    PriorityQueue::new(move |state: &State| state.cost() + estimate(&state.board, goal))
}

/// The shared pop/test/expand loop.
fn graph_search<F: Frontier>(start: &Board, goal: &Goal, mut frontier: F) -> SearchResult {
    let mut tree = SearchTree::new(start.clone());
    let mut explored = if frontier.reopens_shallower() {
        ExploredSet::reopening()
    } else {
        ExploredSet::new()
    };
    let mut expanded = 0;
    let mut cut_off = false;
    let mut peak_frontier = 1;

    frontier.push(NodeId::ROOT, tree.get(NodeId::ROOT));

    while let Some(id) = frontier.pop() {
        let state = tree.get(id);
        if explored.is_closed(&state.board, state.depth) {
            continue;
        }

        if goal.is_reached(&state.board) {
            return SearchResult {
                outcome: Outcome::Solved,
                moves: tree.path_to(id),
                expanded,
                generated: tree.len(),
                peak_frontier,
            };
        }

        trace!("expanding {:?} at depth {}", state.board, state.depth);
        explored.add(state.board.clone(), state.depth);
        expanded += 1;

        for child in successors(id, state) {
            if explored.is_closed(&child.board, child.depth) {
                continue;
            }
            if !frontier.admits(&child) {
                cut_off = true;
                continue;
            }
            let child_id = tree.insert(child);
            frontier.push(child_id, tree.get(child_id));
        }

        peak_frontier = peak_frontier.max(frontier.len());
    }

    SearchResult {
        outcome: if cut_off {
            Outcome::LimitReached
        } else {
            Outcome::NoSolution
        },
        moves: Vec::new(),
        expanded,
        generated: tree.len(),
        peak_frontier,
    }
}

/// Steepest-descent walk on the heuristic score.
///
/// Moves to the best-scoring child only when it strictly improves on the
/// current score, so the walk cannot revisit a board and always ends.
fn hill_climb(start: &Board, goal: &Goal, estimate: HeuristicFn) -> SearchResult {
    let mut tree = SearchTree::new(start.clone());
    let mut current = NodeId::ROOT;
    let mut score = estimate(start, goal);
    let mut expanded = 0;

    loop {
        let state = tree.get(current);
        if goal.is_reached(&state.board) {
            return SearchResult {
                outcome: Outcome::Solved,
                moves: tree.path_to(current),
                expanded,
                generated: tree.len(),
                peak_frontier: 1,
            };
        }

        expanded += 1;
        // first child wins among equal scores
        let best = successors(current, state)
            .into_iter()
            .map(|child| (estimate(&child.board, goal), child))
            .min_by_key(|(child_score, _)| *child_score);

        match best {
            Some((best_score, child)) if best_score < score => {
                trace!("climbing to {:?} (score {} -> {})", child.board, score, best_score);
                score = best_score;
                current = tree.insert(child);
            }
            _ => {
                debug!("hill-climb stuck at score {} on {:?}", score, state.board);
                return SearchResult {
                    outcome: Outcome::LocalOptimum,
                    moves: Vec::new(),
                    expanded,
                    generated: tree.len(),
                    peak_frontier: 1,
                };
            }
        }
    }
}
