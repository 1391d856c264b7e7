//! A parser for the whitespace-delimited puzzle text format.
//!
//! A puzzle is exactly `size × size` tokens in row-major order, separated by
//! arbitrary whitespace (spaces, tabs, newlines). The tokens `"1"`..`"9"` map
//! to digits and `"."` maps to an empty cell:
//!
//! ```text
//! 5 3 . . 7 . . . .
//! 6 . . 1 9 5 . . .
//! . 9 8 . . . . 6 .
//! ...
//! ```
//!
//! Two readers share that token grammar but differ on malformed input:
//!
//! - [`parse_str`] / [`parse_reader`] / [`parse_file`] are strict. Any token
//!   outside the grammar, a short token stream, or trailing tokens fail with
//!   an [`InputFormatError`]. This is the right behavior for files and
//!   command-line text, where there is nobody to re-prompt.
//! - [`read_interactive`] is forgiving, for consoles: a malformed token is
//!   skipped and reading continues until enough valid tokens have arrived,
//!   so a typo only costs a retype. End of input before the grid is full is
//!   still an error.

use super::{Dimensions, Grid};
use itertools::Itertools;
use std::io::{BufRead, Read};
use std::path::Path;
use thiserror::Error;

/// The ways puzzle input can fail to describe a grid.
#[derive(Debug, Error)]
pub enum InputFormatError {
    /// A token was not a digit in range or the empty-cell marker.
    #[error("invalid token '{token}' for cell {cell} (expected 1..={max} or '.')")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// The zero-based index of the cell the token was meant for.
        cell: usize,
        /// The largest digit the grid accepts.
        max: u8,
    },

    /// The input ended before every cell had a token.
    #[error("puzzle truncated: expected {expected} cells, got {found}")]
    Truncated {
        /// The number of cells the grid requires.
        expected: usize,
        /// The number of tokens actually supplied.
        found: usize,
    },

    /// More tokens followed a complete grid.
    #[error("trailing token '{token}' after {expected} cells")]
    TrailingInput {
        /// The first unexpected token.
        token: String,
        /// The number of cells the grid requires.
        expected: usize,
    },

    /// The underlying reader failed.
    #[error("failed to read puzzle input: {0}")]
    Io(#[from] std::io::Error),
}

/// Maps a single token to a cell value: `"."` to 0, `"1"`..=`max` to the
/// digit. Anything else is `None`.
fn digit_of(token: &str, max: u8) -> Option<u8> {
    if token == "." {
        return Some(0);
    }
    let ch = token.chars().exactly_one().ok()?;
    let d = u8::try_from(ch.to_digit(10)?).ok()?;
    (1..=max).contains(&d).then_some(d)
}

/// Strictly parses a whole puzzle from a string.
///
/// # Errors
///
/// Returns an [`InputFormatError`] if any token is outside the grammar, or if
/// the token count differs from `dims.cell_count()`.
pub fn parse_str(input: &str, dims: Dimensions) -> Result<Grid, InputFormatError> {
    let expected = dims.cell_count();
    let tokens = input.split_whitespace().collect_vec();

    if tokens.len() < expected {
        return Err(InputFormatError::Truncated {
            expected,
            found: tokens.len(),
        });
    }
    if tokens.len() > expected {
        return Err(InputFormatError::TrailingInput {
            token: tokens[expected].to_string(),
            expected,
        });
    }

    let mut grid = Grid::empty(dims);
    let size = dims.size();
    for (cell, &token) in tokens.iter().enumerate() {
        let digit = digit_of(token, dims.digit_max()).ok_or_else(|| {
            InputFormatError::InvalidToken {
                token: token.to_string(),
                cell,
                max: dims.digit_max(),
            }
        })?;
        if digit != 0 {
            grid.set(cell / size, cell % size, digit);
        }
    }
    Ok(grid)
}

/// Strictly parses a whole puzzle from a reader.
///
/// # Errors
///
/// Returns an [`InputFormatError`] on read failure or malformed content; see
/// [`parse_str`].
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Grid, InputFormatError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_str(&input, Dimensions::CLASSIC)
}

/// Strictly parses the puzzle file at `path`.
///
/// # Errors
///
/// Returns an [`InputFormatError`] if the file cannot be opened or read, or
/// if its content is malformed; see [`parse_str`].
pub fn parse_file(path: &Path) -> Result<Grid, InputFormatError> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file))
}

/// Reads a puzzle token by token, skipping malformed tokens instead of
/// failing, until every cell has a value.
///
/// An unrecognized token simply leaves the cursor where it is and the next
/// token is tried in its place, so an interactive user can correct a typo by
/// retyping the cell.
///
/// # Errors
///
/// Returns [`InputFormatError::Truncated`] if the reader is exhausted before
/// the grid is complete, or [`InputFormatError::Io`] on read failure.
pub fn read_interactive<R: BufRead>(reader: R, dims: Dimensions) -> Result<Grid, InputFormatError> {
    let expected = dims.cell_count();
    let size = dims.size();
    let mut grid = Grid::empty(dims);
    let mut cell = 0;

    for line in reader.lines() {
        for token in line?.split_whitespace() {
            let Some(digit) = digit_of(token, dims.digit_max()) else {
                continue;
            };
            if digit != 0 {
                grid.set(cell / size, cell % size, digit);
            }
            cell += 1;
            if cell == expected {
                return Ok(grid);
            }
        }
    }

    Err(InputFormatError::Truncated {
        expected,
        found: cell,
    })
}
