//! Reading and writing puzzle definition files.
//!
//! Text format, one item per line:
//! - `WxH`: board dimensions, which must be square
//! - start layout: `W * H` space-separated tiles in row-major order, `0` for the blank
//! - optional goal layout in the same form; the canonical goal is used if absent
//!
//! Blank lines and lines starting with `#` are ignored.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::board::{Board, Goal};
use crate::error::InvalidPuzzle;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: InvalidPuzzle,
    },
}

/// A start board and, optionally, the goal it should be solved towards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleFile {
    pub start: Board,
    pub goal: Option<Board>,
}

impl PuzzleFile {
    /// The target layout: the file's own goal, or the canonical one.
    pub fn goal(&self) -> Result<Goal, InvalidPuzzle> {
        match &self.goal {
            Some(board) => Ok(Goal::new(board.clone())),
            None => Goal::canonical(self.start.size()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), LoadError> {
        fs::write(path, self.to_string()).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl fmt::Display for PuzzleFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.start.size();
        writeln!(f, "{size}x{size}")?;
        write_layout(f, &self.start)?;
        if let Some(goal) = &self.goal {
            write_layout(f, goal)?;
        }
        Ok(())
    }
}

fn write_layout(f: &mut fmt::Formatter<'_>, board: &Board) -> fmt::Result {
    let tiles: Vec<String> = board.cells().iter().map(u8::to_string).collect();
    writeln!(f, "{}", tiles.join(" "))
}

/// Loads a puzzle from disk.
pub fn load(path: &Path) -> Result<PuzzleFile, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parses the text form of a puzzle.
pub fn parse(text: &str) -> Result<PuzzleFile, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_line, header) = lines.next().ok_or_else(|| LoadError::Syntax {
        line: 1,
        message: "missing dimensions line, expected e.g. '3x3'".to_string(),
    })?;
    let size = parse_dimensions(header_line, header)?;

    let (start_line, start) = lines.next().ok_or_else(|| LoadError::Syntax {
        line: header_line + 1,
        message: "missing start layout".to_string(),
    })?;
    let start = parse_layout(start_line, start, size)?;

    let goal = match lines.next() {
        Some((goal_line, goal)) => Some(parse_layout(goal_line, goal, size)?),
        None => None,
    };

    if let Some((line, _)) = lines.next() {
        return Err(LoadError::Syntax {
            line,
            message: "unexpected content after the goal layout".to_string(),
        });
    }

    Ok(PuzzleFile { start, goal })
}

fn parse_dimensions(line: usize, text: &str) -> Result<usize, LoadError> {
    let syntax = |message: String| LoadError::Syntax { line, message };

    let (width, height) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| syntax(format!("expected dimensions like '3x3', found '{text}'")))?;
    let width: usize = width
        .trim()
        .parse()
        .map_err(|e| syntax(format!("invalid width '{width}': {e}")))?;
    let height: usize = height
        .trim()
        .parse()
        .map_err(|e| syntax(format!("invalid height '{height}': {e}")))?;

    if width != height {
        return Err(LoadError::Invalid {
            line,
            source: InvalidPuzzle::NotSquare { width, height },
        });
    }
    Ok(width)
}

fn parse_layout(line: usize, text: &str, size: usize) -> Result<Board, LoadError> {
    let cells = text
        .split_whitespace()
        .map(|token| {
            token.parse::<u32>().map_err(|e| LoadError::Syntax {
                line,
                message: format!("invalid tile '{token}': {e}"),
            })
        })
        .collect::<Result<Vec<u32>, LoadError>>()?;

    Board::new(size, &cells).map_err(|source| LoadError::Invalid { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_only() {
        let puzzle = parse("3x3\n1 2 3 4 5 6 7 0 8\n").unwrap();
        assert_eq!(puzzle.start.cells(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert!(puzzle.goal.is_none());
        assert_eq!(puzzle.goal().unwrap().board(), &Board::solved(3).unwrap());
    }

    #[test]
    fn test_parse_with_goal_comments_and_blank_lines() {
        let text = "# corner swap\n\n2X2\n  1 2 3 0  \n\n0 1 3 2\n";
        let puzzle = parse(text).unwrap();
        assert_eq!(puzzle.start, Board::solved(2).unwrap());
        assert_eq!(puzzle.goal.as_ref().unwrap().cells(), &[0, 1, 3, 2]);
    }

    #[test]
    fn test_display_roundtrip() {
        let text = "2x2\n1 2 3 0\n0 1 3 2\n";
        let puzzle = parse(text).unwrap();
        assert_eq!(puzzle.to_string(), text);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("npuzzle-{}.txt", std::process::id()));
        let puzzle = PuzzleFile {
            start: Board::new(3, &[1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap(),
            goal: None,
        };
        puzzle.save(&path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, puzzle);
    }

    #[test]
    fn test_missing_file() {
        let err = load(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().starts_with("cannot access /definitely/not/here.txt"));
    }

    #[test]
    fn test_syntax_errors_carry_line_numbers() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, LoadError::Syntax { line: 1, .. }));

        let err = parse("3by3\n").unwrap_err();
        assert!(matches!(err, LoadError::Syntax { line: 1, .. }));

        let err = parse("2x2\n").unwrap_err();
        assert!(matches!(err, LoadError::Syntax { line: 2, .. }));

        let err = parse("2x2\n1 2 three 0\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: invalid tile 'three': invalid digit found in string");

        let err = parse("2x2\n1 2 3 0\n1 2 3 0\n1 2 3 0\n").unwrap_err();
        assert!(matches!(err, LoadError::Syntax { line: 4, .. }));
    }

    #[test]
    fn test_invalid_boards() {
        let err = parse("2x3\n1 2 3 4 5 0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid {
                line: 1,
                source: InvalidPuzzle::NotSquare {
                    width: 2,
                    height: 3
                }
            }
        ));

        let err = parse("2x2\n1 1 3 0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid {
                line: 2,
                source: InvalidPuzzle::DuplicateTile(1)
            }
        ));

        let err = parse("2x2\n1 2 3 0\n0 0 1 2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid {
                line: 3,
                source: InvalidPuzzle::MultipleBlanks(2)
            }
        ));
    }
}
