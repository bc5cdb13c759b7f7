use std::fmt;

use tilepath_core::Cell;

/// Errors raised when creating or running a search episode.
///
/// Search outcomes such as "no path" are not errors; see
/// [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start or end cell lies outside the grid.
    InvalidCoordinate(Cell),
    /// The start or end cell cannot be entered.
    ImpassableEndpoint(Cell),
    /// Following predecessors from the end did not arrive at the start.
    /// This means the node table was populated incorrectly.
    BrokenChain { at: Cell },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate(c) => write!(f, "endpoint {c} is outside the grid"),
            Self::ImpassableEndpoint(c) => write!(f, "endpoint {c} is impassable"),
            Self::BrokenChain { at } => {
                write!(f, "predecessor chain broken at {at}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

