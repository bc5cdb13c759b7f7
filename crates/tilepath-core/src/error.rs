//! Error types for grid construction, access and text parsing.

use std::fmt;

use crate::geom::Cell;

/// Errors raised by [`CostGrid`](crate::CostGrid) accessors and constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The cell lies outside the grid.
    OutOfBounds(Cell),
    /// A flat cost buffer does not match the requested dimensions.
    SizeMismatch { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "cell {c} is outside the grid"),
            Self::SizeMismatch { expected, found } => {
                write!(f, "expected {expected} costs, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no rows.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a terrain glyph was found.
    InvalidGlyph { glyph: char, cell: Cell },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("map: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidGlyph { glyph, cell } => {
                write!(f, "map contains invalid glyph \u{201c}{glyph}\u{201d} at {cell}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
