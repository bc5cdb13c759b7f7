//! Incremental grid search for weighted-terrain maps.
//!
//! This crate provides one search skeleton with two expansion policies:
//!
//! - **Dijkstra** uniform-cost search ([`Algorithm::Dijkstra`])
//! - **A\*** with the Manhattan heuristic ([`Algorithm::AStar`])
//!
//! Searches run as a [`SearchEpisode`] that advances in bounded batches
//! ([`SearchEpisode::run_batch`]), so a host can spread one search across
//! many frames and draw progress in between.
//!
//! # Example
//!
//! ```
//! use tilepath_core::{Cell, CostGrid};
//! use tilepath_search::{Algorithm, Outcome, SearchEpisode};
//!
//! let grid: CostGrid = "
//!     ..#.
//!     ..#.
//!     ....
//! "
//! .parse()
//! .unwrap();
//!
//! let mut episode =
//!     SearchEpisode::new(&grid, Cell::new(0, 0), Cell::new(0, 3), Algorithm::AStar).unwrap();
//! let outcome = loop {
//!     match episode.run_batch(2).unwrap() {
//!         Outcome::Continuing => continue,
//!         done => break done,
//!     }
//! };
//! assert_eq!(outcome.total_cost(), Some(7));
//! ```
//!
//! # Components
//!
//! | Type | Role |
//! |---|---|
//! | [`GridModel`] | terrain costs and neighbours the engine reads |
//! | [`NodeTable`] | per-cell `g`, `h` and predecessor |
//! | [`Frontier`] | open set, lowest priority first, FIFO on ties |
//! | [`ExplorationTracker`] | cells expanded, for display |
//! | [`backtrace::reconstruct`] | predecessor links to an ordered path |

pub mod backtrace;
mod config;
mod episode;
mod error;
mod explore;
mod frontier;
mod nodes;
mod policy;
mod traits;

pub use config::SearchConfig;
pub use episode::{Outcome, SearchEpisode, Status};
pub use error::SearchError;
pub use explore::ExplorationTracker;
pub use frontier::{Frontier, FrontierEntry};
pub use nodes::{NodeTable, SearchNode, UNREACHABLE};
pub use policy::Algorithm;
pub use traits::GridModel;
