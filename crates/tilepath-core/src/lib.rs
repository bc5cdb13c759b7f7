//! **tilepath-core**: core types for weighted-terrain grid pathfinding.
//!
//! This crate provides the foundational types used by the search engine in
//! `tilepath-search`: cell coordinates and grid dimensions, terrain classes,
//! and the [`CostGrid`] arena that terrain sources produce.

pub mod error;
pub mod geom;
pub mod grid;
pub mod terrain;

pub use error::{GridError, ParseError};
pub use geom::{Cell, Dims};
pub use grid::CostGrid;
pub use terrain::{GROUND_COST, Terrain, WALL_COST, WATER_COST};
