//! Strategy selection.
//!
//! Each strategy is known by a short code; depth-bounded strategies accept
//! an optional `:N` suffix, e.g. `DL:12` or `ID:4`.

use std::fmt;
use std::str::FromStr;

/// Depth bound used by `DL` when none is given.
pub const DEFAULT_DEPTH_LIMIT: u32 = 30;

/// Bound increment used by `ID` when none is given.
pub const DEFAULT_DEEPENING_STEP: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    GreedyBestFirst,
    AStar,
    Dijkstra,
    /// Depth-first search that never enqueues states deeper than `limit`.
    DepthLimited { limit: u32 },
    /// Steepest-ascent walk without backtracking.
    HillClimb,
    /// Depth-first search whose bound grows by `step` each time the
    /// shallower states run out.
    IterativeDeepening { step: u32 },
}

impl Strategy {
    /// Every strategy, with default bounds.
    pub const ALL: [Strategy; 8] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
        Strategy::Dijkstra,
        Strategy::DepthLimited {
            limit: DEFAULT_DEPTH_LIMIT,
        },
        Strategy::HillClimb,
        Strategy::IterativeDeepening {
            step: DEFAULT_DEEPENING_STEP,
        },
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "DFS",
            Strategy::BreadthFirst => "BFS",
            Strategy::GreedyBestFirst => "GBFS",
            Strategy::AStar => "AS",
            Strategy::Dijkstra => "DIJ",
            Strategy::DepthLimited { .. } => "DL",
            Strategy::HillClimb => "HC",
            Strategy::IterativeDeepening { .. } => "ID",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "depth-first",
            Strategy::BreadthFirst => "breadth-first",
            Strategy::GreedyBestFirst => "greedy best-first",
            Strategy::AStar => "A*",
            Strategy::Dijkstra => "Dijkstra",
            Strategy::DepthLimited { .. } => "depth-limited",
            Strategy::HillClimb => "hill-climb",
            Strategy::IterativeDeepening { .. } => "iterative deepening",
        }
    }

    /// Whether the strategy consults a heuristic.
    pub fn is_informed(&self) -> bool {
        matches!(
            self,
            Strategy::GreedyBestFirst | Strategy::AStar | Strategy::HillClimb
        )
    }

    /// Whether a found solution is guaranteed to be shortest.
    pub fn is_optimal(&self) -> bool {
        matches!(
            self,
            Strategy::BreadthFirst | Strategy::AStar | Strategy::Dijkstra
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthLimited { limit } => write!(f, "DL:{limit}"),
            Strategy::IterativeDeepening { step } => write!(f, "ID:{step}"),
            other => f.write_str(other.code()),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, bound) = match s.split_once(':') {
            Some((code, bound)) => {
                let bound = bound
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| format!("invalid bound in '{s}': {e}"))?;
                (code, Some(bound))
            }
            None => (s, None),
        };

        let strategy = match code.trim().to_ascii_uppercase().as_str() {
            "DFS" => Strategy::DepthFirst,
            "BFS" => Strategy::BreadthFirst,
            "GBFS" => Strategy::GreedyBestFirst,
            "AS" => Strategy::AStar,
            "DIJ" => Strategy::Dijkstra,
            "HC" => Strategy::HillClimb,
            "DL" => Strategy::DepthLimited {
                limit: bound.unwrap_or(DEFAULT_DEPTH_LIMIT),
            },
            "ID" => Strategy::IterativeDeepening {
                step: bound.unwrap_or(DEFAULT_DEEPENING_STEP),
            },
            _ => {
                let codes: Vec<&str> = Strategy::ALL.iter().map(Strategy::code).collect();
                return Err(format!(
                    "unknown strategy '{code}', available: {}",
                    codes.join(", ")
                ));
            }
        };

        if bound.is_some()
            && !matches!(
                strategy,
                Strategy::DepthLimited { .. } | Strategy::IterativeDeepening { .. }
            )
        {
            return Err(format!("strategy {} does not take a bound", strategy.code()));
        }

        Ok(strategy)
    }
}
