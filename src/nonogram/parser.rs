#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Reader for the line-oriented puzzle format.
//!
//! The format:
//! - first line: two integers, the row count and column count;
//! - next `rows` lines: one row clue each, block lengths separated by
//!   whitespace, a blank line meaning the empty clue;
//! - next `cols` lines: the column clues, same convention.
//!
//! Blank lines before the dimension line and after the last column clue
//! are ignored; blank lines inside the clue block are positional and stand
//! for empty clues.

use crate::nonogram::clue::Clue;
use crate::nonogram::puzzle::Puzzle;
use itertools::Itertools;
use std::fmt::Display;
use std::io::{self, BufRead};
use std::path::Path;

/// Why a puzzle file could not be read.
#[derive(Debug)]
pub enum ParseError {
    /// The underlying reader failed.
    Io(io::Error),
    /// The content does not follow the format.
    Malformed(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Malformed(msg) => write!(f, "malformed puzzle: {msg}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parses a puzzle from any buffered reader.
///
/// # Errors
///
/// [`ParseError::Io`] when reading fails, [`ParseError::Malformed`] when
/// the dimension line is missing or unreadable, a clue token is not a
/// positive integer, or the clue block is truncated.
pub fn parse_puzzle<R: BufRead>(reader: R) -> Result<Puzzle, ParseError> {
    let lines: Vec<String> = reader.lines().try_collect()?;
    let mut lines = lines.into_iter();

    let dims = lines
        .by_ref()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| ParseError::Malformed("missing dimension line".into()))?;
    let (rows, cols) = parse_dims(&dims)?;

    let row_clues = parse_clues(&mut lines, rows, "row")?;
    let col_clues = parse_clues(&mut lines, cols, "column")?;

    for trailing in lines {
        if !trailing.trim().is_empty() {
            return Err(ParseError::Malformed(format!(
                "unexpected content after clues: '{}'",
                trailing.trim()
            )));
        }
    }

    Ok(Puzzle::new(row_clues, col_clues))
}

/// Opens `path` and parses it as a puzzle file.
///
/// # Errors
///
/// See [`parse_puzzle`]; additionally fails when the file cannot be opened.
pub fn parse_file(path: &Path) -> Result<Puzzle, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_puzzle(io::BufReader::new(file))
}

fn parse_dims(line: &str) -> Result<(usize, usize), ParseError> {
    let mut parts = line.split_whitespace();
    let rows = parse_count(parts.next(), "row count")?;
    let cols = parse_count(parts.next(), "column count")?;
    if parts.next().is_some() {
        return Err(ParseError::Malformed(format!(
            "dimension line has trailing tokens: '{line}'"
        )));
    }
    Ok((rows, cols))
}

fn parse_count(token: Option<&str>, what: &str) -> Result<usize, ParseError> {
    let token = token.ok_or_else(|| ParseError::Malformed(format!("missing {what}")))?;
    token
        .parse::<usize>()
        .map_err(|e| ParseError::Malformed(format!("bad {what} '{token}': {e}")))
}

/// Takes the next `count` lines positionally; a blank line is the empty clue.
fn parse_clues(
    lines: &mut impl Iterator<Item = String>,
    count: usize,
    axis: &str,
) -> Result<Vec<Clue>, ParseError> {
    (0..count)
        .map(|i| {
            let line = lines.next().ok_or_else(|| {
                ParseError::Malformed(format!("missing clue for {axis} {i}"))
            })?;
            parse_clue(&line, axis, i)
        })
        .try_collect()
}

fn parse_clue(line: &str, axis: &str, index: usize) -> Result<Clue, ParseError> {
    let blocks: Vec<usize> = line
        .split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|e| {
                ParseError::Malformed(format!("bad block '{token}' in {axis} {index}: {e}"))
            })
        })
        .try_collect()?;
    if blocks.contains(&0) {
        return Err(ParseError::Malformed(format!(
            "zero-length block in {axis} {index}"
        )));
    }
    Ok(Clue::from(blocks))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Puzzle, ParseError> {
        parse_puzzle(input.as_bytes())
    }

    #[test]
    fn test_parse_simple() {
        let puzzle = parse("2 3\n3\n1 1\n1\n2\n1\n").unwrap();
        assert_eq!(puzzle.height(), 2);
        assert_eq!(puzzle.width(), 3);
        assert_eq!(puzzle.row_clue(0).blocks(), &[3]);
        assert_eq!(puzzle.row_clue(1).blocks(), &[1, 1]);
        assert_eq!(puzzle.col_clue(2).blocks(), &[1]);
    }

    #[test]
    fn test_blank_line_is_empty_clue() {
        let puzzle = parse("1 2\n\n1\n\n").unwrap();
        assert!(puzzle.row_clue(0).is_empty());
        assert_eq!(puzzle.col_clue(0).blocks(), &[1]);
        assert!(puzzle.col_clue(1).is_empty());
    }

    #[test]
    fn test_surrounding_blank_lines_ignored() {
        let puzzle = parse("\n\n1 1\n2\n2\n\n\n").unwrap();
        assert_eq!(puzzle.height(), 1);
        assert_eq!(puzzle.row_clue(0).blocks(), &[2]);
        assert_eq!(puzzle.col_clue(0).blocks(), &[2]);
    }

    #[test]
    fn test_missing_dimensions() {
        assert!(matches!(parse(""), Err(ParseError::Malformed(_))));
        assert!(matches!(parse("\n \n"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn test_bad_dimension_tokens() {
        assert!(matches!(parse("2\n"), Err(ParseError::Malformed(_))));
        assert!(matches!(parse("a b\n"), Err(ParseError::Malformed(_))));
        assert!(matches!(parse("1 1 1\n"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn test_truncated_clue_block() {
        assert!(matches!(parse("2 2\n1\n1\n1\n"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn test_bad_clue_token() {
        assert!(matches!(parse("1 1\nx\n1\n"), Err(ParseError::Malformed(_))));
        assert!(matches!(parse("1 1\n0\n1\n"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(matches!(
            parse("1 1\n1\n1\nextra\n"),
            Err(ParseError::Malformed(_))
        ));
    }
}
