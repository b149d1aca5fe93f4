//! Sliding-Tile Puzzle Solver
//!
//! Solves N-puzzles read from text files with a choice of search strategy,
//! compares strategies side by side, checks solvability and generates
//! scrambled puzzles.

mod walkthrough;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use npuzzle::heuristics::{manhattan_distance, misplaced_tiles};
use npuzzle::puzzle_file::{self, PuzzleFile};
use npuzzle::{solve_towards, Board, Goal, Heuristic, SearchResult, Strategy};

/// Seed and scramble length of the built-in demo puzzle.
const DEMO_SEED: u64 = 2024;
const DEMO_STEPS: usize = 40;

/// Solves sliding-tile puzzles with classic search strategies.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle file with one strategy.
    Solve {
        /// Puzzle file: dimensions line, start layout, optional goal layout.
        file: PathBuf,
        /// Strategy code: DFS, BFS, GBFS, AS, DIJ, DL[:limit], HC, ID[:step].
        #[arg(default_value = "AS")]
        strategy: Strategy,
        /// Heuristic for informed strategies: manhattan or misplaced.
        #[arg(short = 'H', long)]
        heuristic: Option<Heuristic>,
        /// Print the board after every move.
        #[arg(long)]
        steps: bool,
    },
    /// Run several strategies on one puzzle and tabulate the results.
    Compare {
        file: PathBuf,
        /// Strategies to run, comma separated. Defaults to all of them.
        #[arg(short, long, value_delimiter = ',')]
        strategies: Vec<Strategy>,
        #[arg(short = 'H', long)]
        heuristic: Option<Heuristic>,
    },
    /// Validate a puzzle file and report whether the goal is reachable.
    Check { file: PathBuf },
    /// Generate a solvable puzzle by random moves away from the goal.
    Scramble {
        #[arg(long, default_value_t = 3)]
        size: usize,
        #[arg(long, default_value_t = 30)]
        steps: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
        /// Write the puzzle here instead of printing it.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Solve {
            file,
            strategy,
            heuristic,
            steps,
        }) => run_solve(&file, strategy, heuristic, steps),
        Some(Command::Compare {
            file,
            strategies,
            heuristic,
        }) => run_compare(&file, &strategies, heuristic),
        Some(Command::Check { file }) => run_check(&file),
        Some(Command::Scramble {
            size,
            steps,
            seed,
            output,
        }) => run_scramble(size, steps, seed, output.as_deref()),
        None => run_demo(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}

fn load(path: &Path) -> Result<(PuzzleFile, Goal)> {
    let puzzle = puzzle_file::load(path)
        .with_context(|| format!("failed to load puzzle {}", path.display()))?;
    let goal = puzzle.goal()?;
    info!("loaded {}x{} puzzle from {}", goal.board().size(), goal.board().size(), path.display());
    Ok((puzzle, goal))
}

/// Solves one puzzle file and prints the report.
fn run_solve(
    path: &Path,
    strategy: Strategy,
    heuristic: Option<Heuristic>,
    show_steps: bool,
) -> Result<()> {
    let (puzzle, goal) = load(path)?;
    if !puzzle.start.is_solvable_towards(&goal) {
        warn!("start and goal have different parity, the search will exhaust without a solution");
    }

    let started = Instant::now();
    let result = solve_towards(&puzzle.start, &goal, strategy, heuristic)?;
    let elapsed = started.elapsed();

    println!("Time taken: {:.6} secs", elapsed.as_secs_f64());
    print!("{}", format_report(&path.display().to_string(), strategy, &result));

    if show_steps {
        if let Some(moves) = result.solution() {
            println!();
            print!("{}", walkthrough::render(&puzzle.start, moves));
        }
    }
    Ok(())
}

/// Runs each strategy in turn and prints a comparison table.
fn run_compare(path: &Path, strategies: &[Strategy], heuristic: Option<Heuristic>) -> Result<()> {
    let (puzzle, goal) = load(path)?;
    let all = Strategy::ALL;
    let strategies = if strategies.is_empty() {
        &all[..]
    } else {
        strategies
    };

    let mut rows = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        info!("running {}", strategy.name());
        let started = Instant::now();
        let result = solve_towards(&puzzle.start, &goal, strategy, heuristic)?;
        rows.push((strategy, result, started.elapsed()));
    }

    print!("{}", format_comparison(&rows));
    Ok(())
}

/// Prints the puzzle, its heuristic scores and whether it can be solved.
fn run_check(path: &Path) -> Result<()> {
    let (puzzle, goal) = load(path)?;
    print!("{}", format_check(&puzzle.start, &goal));
    Ok(())
}

fn run_scramble(size: usize, steps: usize, seed: Option<u64>, output: Option<&Path>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let puzzle = PuzzleFile {
        start: Board::scrambled(size, steps, &mut rng)?,
        goal: None,
    };

    match output {
        Some(path) => {
            puzzle.save(path)?;
            info!("wrote {}", path.display());
        }
        None => print!("{puzzle}"),
    }
    Ok(())
}

/// Scrambles a fixed 3x3 puzzle, solves it with A* and walks through it.
fn run_demo() -> Result<()> {
    let start = Board::scrambled(3, DEMO_STEPS, &mut SmallRng::seed_from_u64(DEMO_SEED))?;
    let goal = Goal::canonical(3)?;
    let result = solve_towards(&start, &goal, Strategy::AStar, None)?;

    print!("{}", format_report("demo", Strategy::AStar, &result));
    if let Some(moves) = result.solution() {
        println!();
        print!("{}", walkthrough::render(&start, moves));
    }
    Ok(())
}

/// Summary in the form `<puzzle> <strategy> <expanded>` followed by the
/// moves separated by `;`, or the reason no solution was produced.
fn format_report(name: &str, strategy: Strategy, result: &SearchResult) -> String {
    let mut output = format!("{name} {strategy} {}\n", result.expanded);
    match result.solution() {
        Some(moves) => {
            for mv in moves {
                output.push_str(&format!("{mv};"));
            }
            output.push('\n');
        }
        None => output.push_str(&format!("{}.\n", capitalize(&result.outcome.to_string()))),
    }
    output
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_comparison(rows: &[(Strategy, SearchResult, Duration)]) -> String {
    let mut output = format!(
        "{:<8} {:<22} {:>5} {:>8} {:>9} {:>5} {:>10}\n",
        "strategy", "outcome", "moves", "expanded", "generated", "peak", "secs"
    );
    for (strategy, result, elapsed) in rows {
        let moves = match result.solution() {
            Some(moves) => moves.len().to_string(),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:<8} {:<22} {:>5} {:>8} {:>9} {:>5} {:>10.4}\n",
            strategy.to_string(),
            result.outcome.to_string(),
            moves,
            result.expanded,
            result.generated,
            result.peak_frontier,
            elapsed.as_secs_f64()
        ));
    }
    output
}

fn format_check(start: &Board, goal: &Goal) -> String {
    let size = start.size();
    format!(
        "size: {size}x{size}\nstart:\n{start}goal:\n{}solvable: {}\nmanhattan: {}, misplaced: {}\n",
        goal.board(),
        if start.is_solvable_towards(goal) { "yes" } else { "no" },
        manhattan_distance(start, goal),
        misplaced_tiles(start, goal),
    )
}
