use std::collections::HashSet;

use tilepath_core::Cell;

/// Records every cell the engine expands during an episode.
///
/// Purely diagnostic: hosts use it to draw explored cells, either after each
/// batch or once a search ends unreachable. The engine never reads it back.
#[derive(Clone, Debug, Default)]
pub struct ExplorationTracker {
    visited: HashSet<Cell>,
    order: Vec<Cell>,
}

impl ExplorationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expansion. Returns `false` if the cell was already recorded.
    pub(crate) fn record(&mut self, cell: Cell) -> bool {
        if !self.visited.insert(cell) {
            return false;
        }
        self.order.push(cell);
        true
    }

    /// The set of expanded cells.
    pub fn visited_cells(&self) -> &HashSet<Cell> {
        &self.visited
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Expanded cells in first-expansion order, for progressive display.
    pub fn in_order(&self) -> &[Cell] {
        &self.order
    }
}
