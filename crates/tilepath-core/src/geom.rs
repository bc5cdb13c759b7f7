//! Geometry primitives: [`Cell`] coordinates and grid [`Dims`].
//!
//! Cells are addressed as `(row, col)`. Rows grow downwards and columns grow
//! to the right, so "up" means `row - 1`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate. Signed so that neighbour arithmetic may step outside
/// the grid before being bounds-checked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Create a new cell coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in search order: left, right, up, down.
    ///
    /// This order is part of the search tie-breaking contract; do not reorder.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(0, -1),
            self.shift(0, 1),
            self.shift(-1, 0),
            self.shift(1, 0),
        ]
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions. Valid cells are `0 <= row < rows` and `0 <= col < cols`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawDims"))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

// Deserialized sizes go through `Dims::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDims {
    rows: i32,
    cols: i32,
}

#[cfg(feature = "serde")]
impl From<RawDims> for Dims {
    fn from(raw: RawDims) -> Self {
        Self::new(raw.rows, raw.cols)
    }
}

impl Dims {
    /// Create new dimensions. Negative values are clamped to zero.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: if rows < 0 { 0 } else { rows },
            cols: if cols < 0 { 0 } else { cols },
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows.max(0) as usize) * (self.cols.max(0) as usize)
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    /// Row-major flat index of `cell`, or `None` if outside.
    #[inline]
    pub fn index(self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.row as usize) * (self.cols as usize) + cell.col as usize)
    }

    /// Convert a flat index back to a cell.
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let cols = self.cols.max(1) as usize;
        Cell::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            next: 0,
        }
    }
}

impl IntoIterator for Dims {
    type Item = Cell;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the cells of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    next: usize,
}

impl Iterator for DimsIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.dims.len() {
            return None;
        }
        let c = self.dims.cell(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.dims.len().saturating_sub(self.next);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for DimsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_arithmetic() {
        let a = Cell::new(1, 2);
        let b = Cell::new(3, 4);
        assert_eq!(a + b, Cell::new(4, 6));
        assert_eq!(b - a, Cell::new(2, 2));
        assert_eq!(a.shift(-1, 1), Cell::new(0, 3));
    }

    #[test]
    fn neighbor_order_is_left_right_up_down() {
        let n = Cell::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Cell::new(5, 4),
                Cell::new(5, 6),
                Cell::new(4, 5),
                Cell::new(6, 5),
            ]
        );
        assert!(n.iter().all(|&c| c.is_adjacent(Cell::new(5, 5))));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(2, 3)), 5);
        assert_eq!(Cell::new(-1, 4).manhattan(Cell::new(1, 0)), 6);
        assert_eq!(Cell::new(7, 7).manhattan(Cell::new(7, 7)), 0);
    }

    #[test]
    fn cells_order_row_major() {
        let mut v = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn dims_contains_and_index() {
        let d = Dims::new(3, 4);
        assert_eq!(d.len(), 12);
        assert!(d.contains(Cell::new(2, 3)));
        assert!(!d.contains(Cell::new(3, 0)));
        assert!(!d.contains(Cell::new(0, -1)));
        assert_eq!(d.index(Cell::new(1, 2)), Some(6));
        assert_eq!(d.index(Cell::new(0, 4)), None);
        assert_eq!(d.cell(6), Cell::new(1, 2));
    }

    #[test]
    fn dims_iter_row_major() {
        let d = Dims::new(2, 3);
        let cells: Vec<_> = d.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert_eq!(cells[5], Cell::new(1, 2));
        assert_eq!(d.iter().len(), 6);
    }

    #[test]
    fn negative_dims_are_empty() {
        let d = Dims::new(-2, 5);
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert_eq!(d.iter().count(), 0);

        let raw = Dims { rows: -3, cols: 4 };
        assert_eq!(raw.len(), 0);
        assert!(!raw.contains(Cell::new(0, 0)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn negative_dims_deserialize_clamped() {
        let d: Dims = serde_json::from_str(r#"{"rows":-2,"cols":5}"#).unwrap();
        assert_eq!(d, Dims::new(0, 5));
        assert_eq!(d.len(), 0);
        assert!(d.is_empty());
    }
}
