//! Expansion policies: the only difference between Dijkstra and A*.

use std::fmt;

use tilepath_core::Cell;

/// Which search to run.
///
/// Both share one expansion skeleton and differ only in heuristic and
/// frontier priority.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Uniform-cost search. Priority is `g`.
    Dijkstra,
    /// Best-first search with the Manhattan heuristic. Priority is
    /// `f = g + h`.
    ///
    /// The heuristic is admissible and consistent as long as every passable
    /// cost is at least 1.
    #[default]
    AStar,
}

impl Algorithm {
    /// Heuristic estimate of the remaining cost from `from` to `goal`.
    #[inline]
    pub fn estimate(self, from: Cell, goal: Cell) -> u32 {
        match self {
            Self::Dijkstra => 0,
            Self::AStar => from.manhattan(goal),
        }
    }

    /// Frontier priority for a node with the given `g` and `h`.
    #[inline]
    pub fn priority(self, g: u32, h: u32) -> u32 {
        match self {
            Self::Dijkstra => g,
            Self::AStar => g.saturating_add(h),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => f.write_str("Dijkstra"),
            Self::AStar => f.write_str("A*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dijkstra_ignores_goal() {
        let a = Algorithm::Dijkstra;
        assert_eq!(a.estimate(Cell::new(0, 0), Cell::new(9, 9)), 0);
        assert_eq!(a.priority(7, 100), 7);
    }

    #[test]
    fn astar_uses_manhattan() {
        let a = Algorithm::AStar;
        assert_eq!(a.estimate(Cell::new(0, 0), Cell::new(2, 3)), 5);
        assert_eq!(a.priority(4, 5), 9);
        assert_eq!(a.priority(u32::MAX, 5), u32::MAX);
    }
}
