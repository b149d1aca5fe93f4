//! Step-by-step rendering of a solution in the terminal.

use npuzzle::{Board, Move};

/// Renders the start board followed by the board after every move.
///
/// Each step names the blank's move and the numbered tile that physically
/// slides. Stops early if a move is illegal for the current board.
pub fn render(start: &Board, moves: &[Move]) -> String {
    let mut output = format!("Start:\n{start}");
    let mut board = start.clone();

    for (step, &mv) in moves.iter().enumerate() {
        let Some(next) = board.apply(mv) else {
            output.push_str(&format!("\nStep {}: {mv} is not a legal move\n", step + 1));
            break;
        };
        // the tile now sitting where the blank was is the one that moved
        let tile = next.cells()[board.blank()];
        output.push_str(&format!(
            "\nStep {}: blank {mv}, tile {tile} slides {}\n{next}",
            step + 1,
            mv.tile_direction()
        ));
        board = next;
    }

    output
}
