//! Path reconstruction from predecessor links.

use tilepath_core::Cell;

use crate::error::SearchError;
use crate::nodes::NodeTable;

/// Walk predecessor links from `end` back to `start` and return the path in
/// start→end order, both endpoints included.
///
/// Fails with [`SearchError::BrokenChain`] if a cell other than `start` has
/// no predecessor, or if the walk takes more steps than the grid has cells
/// (a cycle).
pub fn reconstruct(
    nodes: &NodeTable,
    start: Cell,
    end: Cell,
) -> Result<Vec<Cell>, SearchError> {
    let mut path = vec![end];
    let mut current = end;
    let max_len = nodes.dims().len();

    while current != start {
        if path.len() > max_len {
            return Err(SearchError::BrokenChain { at: current });
        }
        current = nodes
            .get(current)
            .and_then(|n| n.predecessor())
            .ok_or(SearchError::BrokenChain { at: current })?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}
