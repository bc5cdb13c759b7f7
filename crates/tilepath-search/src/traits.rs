use tilepath_core::{Cell, CostGrid, Dims, GridError};

/// Read-only view of terrain that the search engine runs over.
///
/// Implementations must not change dimensions or costs while an episode
/// borrows them.
pub trait GridModel {
    /// Grid dimensions.
    fn dimensions(&self) -> Dims;

    /// Cost of entering `cell`. Fails with [`GridError::OutOfBounds`] if the
    /// cell lies outside the grid.
    fn cost_at(&self, cell: Cell) -> Result<u32, GridError>;

    /// Whether `cell` can be entered. Out-of-bounds cells are not passable.
    fn is_passable(&self, cell: Cell) -> bool;

    /// Append the in-bounds orthogonal neighbours of `cell` into `buf` in the
    /// order left, right, up, down. Passability is not checked here. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, cell: Cell, buf: &mut Vec<Cell>) {
        let dims = self.dimensions();
        buf.extend(
            cell.neighbors_4()
                .into_iter()
                .filter(|&n| dims.contains(n)),
        );
    }
}

impl GridModel for CostGrid {
    #[inline]
    fn dimensions(&self) -> Dims {
        self.dims()
    }

    #[inline]
    fn cost_at(&self, cell: Cell) -> Result<u32, GridError> {
        self.cost(cell)
    }

    #[inline]
    fn is_passable(&self, cell: Cell) -> bool {
        self.passable(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbors_in_order() {
        let g = CostGrid::new(Dims::new(3, 3), 1);
        let mut buf = Vec::new();
        g.neighbors(Cell::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn center_has_four_neighbors_in_order() {
        let g = CostGrid::new(Dims::new(3, 3), 1);
        let mut buf = Vec::new();
        g.neighbors(Cell::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Cell::new(1, 0),
                Cell::new(1, 2),
                Cell::new(0, 1),
                Cell::new(2, 1),
            ]
        );
    }

    #[test]
    fn walls_are_still_listed_as_neighbors() {
        let g = CostGrid::parse(".#\n#.").unwrap();
        let mut buf = Vec::new();
        g.neighbors(Cell::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Cell::new(0, 1), Cell::new(1, 0)]);
        assert!(buf.iter().all(|&c| !g.is_passable(c)));
    }
}
