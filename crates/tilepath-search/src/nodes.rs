use tilepath_core::{Cell, Dims};

/// Sentinel `g` for cells not yet reached in the current episode.
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// SearchNode
// ---------------------------------------------------------------------------

/// Per-cell bookkeeping for one episode.
///
/// Fields are read-only outside the crate: the engine is the only writer, and
/// hosts read them as diagnostics (for example a debug overlay showing F/G/H).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    g: u32,
    h: u32,
    predecessor: Option<Cell>,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            predecessor: None,
        }
    }
}

impl SearchNode {
    /// Best known cost from the start, or [`UNREACHABLE`].
    #[inline]
    pub fn g(&self) -> u32 {
        self.g
    }

    /// Heuristic estimate to the goal. Always 0 under Dijkstra.
    #[inline]
    pub fn h(&self) -> u32 {
        self.h
    }

    /// `g + h`, saturating at [`UNREACHABLE`].
    #[inline]
    pub fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }

    /// The cell that achieved the current `g`. `None` for the start cell and
    /// for cells not yet reached.
    #[inline]
    pub fn predecessor(&self) -> Option<Cell> {
        self.predecessor
    }

    /// Whether the cell has been reached at all.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.g != UNREACHABLE
    }
}

// ---------------------------------------------------------------------------
// NodeTable
// ---------------------------------------------------------------------------

/// One [`SearchNode`] per grid cell, stored row-major.
#[derive(Clone, Debug)]
pub struct NodeTable {
    dims: Dims,
    nodes: Vec<SearchNode>,
}

impl NodeTable {
    /// A table with every cell unreached.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            nodes: vec![SearchNode::default(); dims.len()],
        }
    }

    /// Dimensions of the grid this table covers.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Node for `cell`, or `None` if the cell lies outside the table.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<&SearchNode> {
        self.dims.index(cell).map(|i| &self.nodes[i])
    }

    /// Best known cost of `cell`; [`UNREACHABLE`] if unreached or outside.
    #[inline]
    pub fn g(&self, cell: Cell) -> u32 {
        self.get(cell).map_or(UNREACHABLE, SearchNode::g)
    }

    /// Number of cells reached so far.
    pub fn reached(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_reached()).count()
    }

    /// Mark `cell` as the search origin: `g = 0`, no predecessor.
    pub(crate) fn seed(&mut self, cell: Cell, h: u32) {
        if let Some(i) = self.dims.index(cell) {
            self.nodes[i] = SearchNode {
                g: 0,
                h,
                predecessor: None,
            };
        }
    }

    /// Lower `cell`'s cost to `g` via `from` if that is a strict improvement.
    ///
    /// Cost, heuristic and predecessor change together or not at all.
    /// Returns whether the node was updated.
    pub(crate) fn relax(&mut self, cell: Cell, g: u32, h: u32, from: Cell) -> bool {
        let Some(i) = self.dims.index(cell) else {
            return false;
        };
        let n = &mut self.nodes[i];
        if g >= n.g {
            return false;
        }
        *n = SearchNode {
            g,
            h,
            predecessor: Some(from),
        };
        true
    }

    #[cfg(test)]
    pub(crate) fn set_predecessor(&mut self, cell: Cell, predecessor: Option<Cell>) {
        if let Some(i) = self.dims.index(cell) {
            self.nodes[i].predecessor = predecessor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_is_unreached() {
        let t = NodeTable::new(Dims::new(2, 2));
        let n = t.get(Cell::new(1, 1)).unwrap();
        assert_eq!(n.g(), UNREACHABLE);
        assert_eq!(n.f(), UNREACHABLE);
        assert_eq!(n.predecessor(), None);
        assert!(!n.is_reached());
        assert_eq!(t.reached(), 0);
        assert!(t.get(Cell::new(2, 0)).is_none());
        assert_eq!(t.g(Cell::new(-1, 0)), UNREACHABLE);
    }

    #[test]
    fn relax_requires_strict_improvement() {
        let mut t = NodeTable::new(Dims::new(3, 3));
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 1);
        let c = Cell::new(1, 1);
        t.seed(a, 2);

        assert!(t.relax(c, 5, 1, a));
        // Equal cost never replaces the predecessor.
        assert!(!t.relax(c, 5, 1, b));
        assert_eq!(t.get(c).unwrap().predecessor(), Some(a));
        // Worse cost is ignored.
        assert!(!t.relax(c, 6, 1, b));
        assert_eq!(t.g(c), 5);

        assert!(t.relax(c, 3, 1, b));
        let n = t.get(c).unwrap();
        assert_eq!((n.g(), n.h(), n.f()), (3, 1, 4));
        assert_eq!(n.predecessor(), Some(b));
        assert_eq!(t.reached(), 2);
    }

    #[test]
    fn seed_sets_origin() {
        let mut t = NodeTable::new(Dims::new(2, 2));
        t.seed(Cell::new(1, 0), 3);
        let n = t.get(Cell::new(1, 0)).unwrap();
        assert_eq!((n.g(), n.h(), n.f()), (0, 3, 3));
        assert_eq!(n.predecessor(), None);
    }
}
