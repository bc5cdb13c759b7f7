//! Terrain classes and their movement costs.

use std::fmt;

/// Cost of entering a ground cell.
pub const GROUND_COST: u32 = 1;
/// Cost of entering a water cell.
pub const WATER_COST: u32 = 10;
/// Sentinel cost for walls. Any cost at or above the grid's wall threshold
/// is impassable; this is the default threshold.
pub const WALL_COST: u32 = 255;

/// The terrain classes of the reference map.
///
/// A [`CostGrid`](crate::CostGrid) stores raw costs, so terrain is only a
/// convenient way to build and describe one. Costs outside the three
/// reference values classify as [`Terrain::Custom`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Ground,
    Water,
    Wall,
    Custom(u32),
}

impl Terrain {
    /// Movement cost of entering a cell of this terrain.
    #[inline]
    pub const fn cost(self) -> u32 {
        match self {
            Self::Ground => GROUND_COST,
            Self::Water => WATER_COST,
            Self::Wall => WALL_COST,
            Self::Custom(c) => c,
        }
    }

    /// Classify a raw cost.
    #[inline]
    pub const fn from_cost(cost: u32) -> Self {
        match cost {
            GROUND_COST => Self::Ground,
            WATER_COST => Self::Water,
            WALL_COST => Self::Wall,
            c => Self::Custom(c),
        }
    }

    /// Glyph used by the text map format, if this terrain has one.
    ///
    /// Custom costs 1..=9 use their digit; other custom costs have no glyph.
    pub fn glyph(self) -> Option<char> {
        match self {
            Self::Ground => Some('.'),
            Self::Water => Some('~'),
            Self::Wall => Some('#'),
            Self::Custom(c) if (1..=9).contains(&c) => char::from_digit(c, 10),
            Self::Custom(_) => None,
        }
    }

    /// Parse a text map glyph.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Ground),
            '~' => Some(Self::Water),
            '#' => Some(Self::Wall),
            '1'..='9' => ch.to_digit(10).map(Self::from_cost),
            _ => None,
        }
    }
}

impl From<Terrain> for u32 {
    fn from(t: Terrain) -> Self {
        t.cost()
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ground => f.write_str("ground"),
            Self::Water => f.write_str("water"),
            Self::Wall => f.write_str("wall"),
            Self::Custom(c) => write!(f, "cost {c}"),
        }
    }
}
