//! The [`CostGrid`] type: a flat arena of terrain costs.
//!
//! Costs are stored row-major in a single `Vec`. Regenerating terrain
//! rewrites the arena in place via [`rebuild`](CostGrid::rebuild) rather than
//! allocating a new grid.

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, ParseError};
use crate::geom::{Cell, Dims};
use crate::terrain::{Terrain, WALL_COST};

/// A rows×cols matrix of non-negative movement costs.
///
/// A cell whose cost is at or above [`wall_threshold`](Self::wall_threshold)
/// is impassable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCostGrid"))]
pub struct CostGrid {
    dims: Dims,
    costs: Vec<u32>,
    wall_threshold: u32,
}

// Deserialized grids are checked like `from_costs`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCostGrid {
    dims: Dims,
    costs: Vec<u32>,
    wall_threshold: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCostGrid> for CostGrid {
    type Error = GridError;

    fn try_from(raw: RawCostGrid) -> Result<Self, GridError> {
        Ok(Self::from_costs(raw.dims, raw.costs)?.with_wall_threshold(raw.wall_threshold))
    }
}

impl CostGrid {
    /// Create a grid with every cell set to `cost`.
    pub fn new(dims: Dims, cost: u32) -> Self {
        Self {
            dims,
            costs: vec![cost; dims.len()],
            wall_threshold: WALL_COST,
        }
    }

    /// Create a grid from a row-major cost buffer.
    pub fn from_costs(dims: Dims, costs: Vec<u32>) -> Result<Self, GridError> {
        if costs.len() != dims.len() {
            return Err(GridError::SizeMismatch {
                expected: dims.len(),
                found: costs.len(),
            });
        }
        Ok(Self {
            dims,
            costs,
            wall_threshold: WALL_COST,
        })
    }

    /// Create a grid from rows of terrain. Every row must have the same
    /// length as the first.
    pub fn from_terrain<R: AsRef<[Terrain]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let dims = Dims::new(rows.len() as i32, cols as i32);
        let costs: Vec<u32> = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().map(|t| t.cost()))
            .collect();
        Self::from_costs(dims, costs)
    }

    /// Parse a text map: one line per row, `.` ground, `~` water, `#` wall
    /// and digits `1`-`9` for explicit costs.
    ///
    /// Surrounding whitespace on the whole input and on each line is ignored,
    /// so maps can be written as indented string literals.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut costs = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0usize;

        for (row, line) in s.trim().lines().enumerate() {
            let line = line.trim();
            let mut found = 0usize;
            for (col, glyph) in line.chars().enumerate() {
                let terrain = Terrain::from_glyph(glyph).ok_or(ParseError::InvalidGlyph {
                    glyph,
                    cell: Cell::new(row as i32, col as i32),
                })?;
                costs.push(terrain.cost());
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(ParseError::InconsistentWidth {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = width.unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(ParseError::Empty);
        }
        Ok(Self {
            dims: Dims::new(rows as i32, cols as i32),
            costs,
            wall_threshold: WALL_COST,
        })
    }

    /// Use a different impassability threshold (builder).
    pub fn with_wall_threshold(mut self, threshold: u32) -> Self {
        self.wall_threshold = threshold;
        self
    }

    /// Costs at or above this value are impassable.
    #[inline]
    pub fn wall_threshold(&self) -> u32 {
        self.wall_threshold
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Cost of entering `cell`.
    #[inline]
    pub fn cost(&self, cell: Cell) -> Result<u32, GridError> {
        self.dims
            .index(cell)
            .map(|i| self.costs[i])
            .ok_or(GridError::OutOfBounds(cell))
    }

    /// Terrain classification of `cell`.
    pub fn terrain(&self, cell: Cell) -> Result<Terrain, GridError> {
        self.cost(cell).map(Terrain::from_cost)
    }

    /// Whether `cell` is inside the grid and below the wall threshold.
    #[inline]
    pub fn passable(&self, cell: Cell) -> bool {
        self.cost(cell).is_ok_and(|c| c < self.wall_threshold)
    }

    /// Set the cost of `cell`.
    pub fn set(&mut self, cell: Cell, cost: u32) -> Result<(), GridError> {
        let i = self.dims.index(cell).ok_or(GridError::OutOfBounds(cell))?;
        self.costs[i] = cost;
        Ok(())
    }

    /// Set every cell to `cost`.
    pub fn fill(&mut self, cost: u32) {
        self.costs.fill(cost);
    }

    /// Rewrite every cell in place with the value returned by `f`.
    ///
    /// This is the hook for terrain regeneration: the caller decides the
    /// policy (random, scripted, loaded), the grid keeps its allocation.
    pub fn rebuild(&mut self, mut f: impl FnMut(Cell) -> u32) {
        let dims = self.dims;
        for (i, cost) in self.costs.iter_mut().enumerate() {
            *cost = f(dims.cell(i));
        }
    }

    /// Row-major iterator over `(Cell, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.dims.iter().zip(self.costs.iter().copied())
    }
}

impl FromStr for CostGrid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the text map format. Costs without a glyph are drawn as `?`.
impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, cost) in self.iter() {
            if cell.col == 0 && cell.row > 0 {
                f.write_str("\n")?;
            }
            let glyph = Terrain::from_cost(cost).glyph().unwrap_or('?');
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "
        ..~
        .#.
        ...
    ";

    #[test]
    fn parse_and_query() {
        let g = CostGrid::parse(MAP).unwrap();
        assert_eq!(g.dims(), Dims::new(3, 3));
        assert_eq!(g.cost(Cell::new(0, 2)), Ok(10));
        assert_eq!(g.cost(Cell::new(1, 1)), Ok(255));
        assert_eq!(g.terrain(Cell::new(2, 0)), Ok(Terrain::Ground));
        assert!(g.passable(Cell::new(0, 2)));
        assert!(!g.passable(Cell::new(1, 1)));
    }

    #[test]
    fn out_of_bounds_access() {
        let g = CostGrid::new(Dims::new(2, 2), 1);
        let oob = Cell::new(2, 0);
        assert_eq!(g.cost(oob), Err(GridError::OutOfBounds(oob)));
        assert!(!g.passable(oob));
        assert!(!g.passable(Cell::new(-1, 0)));
    }

    #[test]
    fn display_round_trip() {
        let g = CostGrid::parse(MAP).unwrap();
        let text = g.to_string();
        assert_eq!(text, "..~\n.#.\n...");
        assert_eq!(text.parse::<CostGrid>().unwrap(), g);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(CostGrid::parse("   \n  "), Err(ParseError::Empty));
        assert_eq!(
            CostGrid::parse("...\n..\n..."),
            Err(ParseError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(
            CostGrid::parse("..\n.x"),
            Err(ParseError::InvalidGlyph {
                glyph: 'x',
                cell: Cell::new(1, 1),
            })
        );
    }

    #[test]
    fn from_costs_checks_size() {
        let err = CostGrid::from_costs(Dims::new(2, 2), vec![1, 1, 1]).unwrap_err();
        assert_eq!(
            err,
            GridError::SizeMismatch {
                expected: 4,
                found: 3,
            }
        );
    }

    #[test]
    fn from_terrain_rows() {
        use Terrain::*;
        let g = CostGrid::from_terrain(&[[Ground, Wall], [Water, Ground]]).unwrap();
        assert_eq!(g.dims(), Dims::new(2, 2));
        assert_eq!(g.cost(Cell::new(1, 0)), Ok(10));
        assert!(!g.passable(Cell::new(0, 1)));
    }

    #[test]
    fn custom_wall_threshold() {
        let g = CostGrid::parse(".~").unwrap().with_wall_threshold(10);
        assert!(g.passable(Cell::new(0, 0)));
        assert!(!g.passable(Cell::new(0, 1)));
    }

    #[test]
    fn set_fill_rebuild() {
        let mut g = CostGrid::new(Dims::new(2, 3), 1);
        g.set(Cell::new(1, 2), 7).unwrap();
        assert_eq!(g.cost(Cell::new(1, 2)), Ok(7));
        assert!(g.set(Cell::new(5, 5), 1).is_err());

        g.fill(10);
        assert!(g.iter().all(|(_, c)| c == 10));

        g.rebuild(|c| if c.col == 1 { WALL_COST } else { 1 });
        assert_eq!(g.to_string(), ".#.\n.#.");
        assert_eq!(g.dims(), Dims::new(2, 3));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cost_grid_round_trip() {
        let g = CostGrid::parse(".~#\n#~.").unwrap().with_wall_threshold(200);
        let json = serde_json::to_string(&g).unwrap();
        let back: CostGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.wall_threshold(), 200);
    }

    #[test]
    fn short_cost_buffer_is_rejected() {
        let json = r#"{"dims":{"rows":3,"cols":3},"costs":[1],"wall_threshold":255}"#;
        let err = serde_json::from_str::<CostGrid>(json).unwrap_err();
        assert!(err.to_string().contains("expected 9"), "{err}");
    }

    #[test]
    fn negative_dims_need_empty_costs() {
        let json = r#"{"dims":{"rows":-1,"cols":4},"costs":[],"wall_threshold":255}"#;
        let g: CostGrid = serde_json::from_str(json).unwrap();
        assert!(g.dims().is_empty());
        assert_eq!(g.cost(Cell::new(0, 0)), Err(GridError::OutOfBounds(Cell::new(0, 0))));

        let json = r#"{"dims":{"rows":-1,"cols":4},"costs":[1,1,1,1],"wall_threshold":255}"#;
        assert!(serde_json::from_str::<CostGrid>(json).is_err());
    }
}
