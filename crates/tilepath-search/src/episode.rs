//! Resumable Dijkstra / A* search.
//!
//! A [`SearchEpisode`] holds all state for one search between a fixed start
//! and end. [`run_batch`](SearchEpisode::run_batch) advances it by a bounded
//! number of iterations and returns, so a host can spread one search over
//! many frames. Dropping the episode cancels it.

use tilepath_core::Cell;

use crate::backtrace;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::explore::ExplorationTracker;
use crate::frontier::Frontier;
use crate::nodes::{NodeTable, SearchNode};
use crate::policy::Algorithm;
use crate::traits::GridModel;

// ---------------------------------------------------------------------------
// Status / Outcome
// ---------------------------------------------------------------------------

/// Lifecycle state of an episode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// No batch has run yet.
    Created,
    /// The last batch ran out of budget; call again to resume.
    Continuing,
    /// The end cell was reached. Terminal.
    Found,
    /// The frontier emptied without reaching the end. Terminal.
    Unreachable,
}

impl Status {
    /// Whether no further batch can change the result.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Unreachable)
    }
}

/// Result of a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Budget exhausted; state is kept for the next batch.
    Continuing,
    /// Path from start to end, both included, and the sum of the costs of
    /// every cell after the start.
    Found { path: Vec<Cell>, total_cost: u32 },
    /// No path exists. The explored set is available from
    /// [`SearchEpisode::explored`].
    Unreachable,
}

impl Outcome {
    pub fn status(&self) -> Status {
        match self {
            Self::Continuing => Status::Continuing,
            Self::Found { .. } => Status::Found,
            Self::Unreachable => Status::Unreachable,
        }
    }

    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Self::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn total_cost(&self) -> Option<u32> {
        match self {
            Self::Found { total_cost, .. } => Some(*total_cost),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchEpisode
// ---------------------------------------------------------------------------

/// One in-progress or finished search over a borrowed grid.
///
/// The grid stays borrowed for the episode's lifetime, so it cannot be
/// regenerated while a search is running. Drop the episode first.
pub struct SearchEpisode<'g, G: GridModel + ?Sized> {
    grid: &'g G,
    start: Cell,
    end: Cell,
    config: SearchConfig,
    nodes: NodeTable,
    frontier: Frontier,
    explored: ExplorationTracker,
    iterations: usize,
    stale_discards: usize,
    status: Status,
    // scratch buffer for neighbor queries
    nbuf: Vec<Cell>,
}

impl<'g, G: GridModel + ?Sized> SearchEpisode<'g, G> {
    /// Start a search from `start` to `end` with the given policy and the
    /// default per-tick budget.
    pub fn new(
        grid: &'g G,
        start: Cell,
        end: Cell,
        algorithm: Algorithm,
    ) -> Result<Self, SearchError> {
        Self::with_config(
            grid,
            start,
            end,
            SearchConfig::default().with_algorithm(algorithm),
        )
    }

    /// Start a search with explicit settings.
    ///
    /// Both endpoints are checked against the grid bounds first, then for
    /// passability. When `start == end` the episode is created already
    /// [`Found`](Status::Found).
    pub fn with_config(
        grid: &'g G,
        start: Cell,
        end: Cell,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        for cell in [start, end] {
            grid.cost_at(cell)
                .map_err(|_| SearchError::InvalidCoordinate(cell))?;
        }
        for cell in [start, end] {
            if !grid.is_passable(cell) {
                return Err(SearchError::ImpassableEndpoint(cell));
            }
        }

        let dims = grid.dimensions();
        let algorithm = config.algorithm;
        let h = algorithm.estimate(start, end);

        let mut nodes = NodeTable::new(dims);
        nodes.seed(start, h);

        let mut frontier = Frontier::new();
        let status = if start == end {
            Status::Found
        } else {
            frontier.push(start, algorithm.priority(0, h));
            Status::Created
        };

        log::debug!("{algorithm} episode {start} -> {end} on {dims} grid");

        Ok(Self {
            grid,
            start,
            end,
            config,
            nodes,
            frontier,
            explored: ExplorationTracker::new(),
            iterations: 0,
            stale_discards: 0,
            status,
            nbuf: Vec::with_capacity(4),
        })
    }

    /// Run at most `max_iterations` iterations and report where the search
    /// stands.
    ///
    /// Each iteration pops one frontier entry. A terminal episode returns its
    /// outcome again without doing any work.
    pub fn run_batch(&mut self, max_iterations: usize) -> Result<Outcome, SearchError> {
        if self.status.is_terminal() {
            return self.outcome();
        }

        let algorithm = self.config.algorithm;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut budget = max_iterations;

        let status = loop {
            if budget == 0 {
                break Status::Continuing;
            }
            let Some(entry) = self.frontier.pop() else {
                break Status::Unreachable;
            };
            budget -= 1;
            self.iterations += 1;

            let current = entry.cell;
            let (current_g, current_h) = match self.nodes.get(current) {
                Some(n) => (n.g(), n.h()),
                None => continue,
            };

            // Skip stale entries.
            if entry.priority != algorithm.priority(current_g, current_h) {
                self.stale_discards += 1;
                log::trace!("discard stale {current} at {}", entry.priority);
                continue;
            }

            if current == self.end {
                break Status::Found;
            }

            self.explored.record(current);
            log::trace!("expand {current} g={current_g} h={current_h}");

            nbuf.clear();
            self.grid.neighbors(current, &mut nbuf);

            for &next in nbuf.iter() {
                if !self.grid.is_passable(next) {
                    continue;
                }
                let Ok(cost) = self.grid.cost_at(next) else {
                    continue;
                };
                let tentative = current_g.saturating_add(cost);
                let h = algorithm.estimate(next, self.end);
                if self.nodes.relax(next, tentative, h, current) {
                    self.frontier.push(next, algorithm.priority(tentative, h));
                }
            }
        };

        self.nbuf = nbuf;
        self.status = status;

        if status.is_terminal() {
            log::debug!(
                "{algorithm} episode {} -> {} {status:?} after {} iterations, {} explored",
                self.start,
                self.end,
                self.iterations,
                self.explored.len()
            );
        }
        self.outcome()
    }

    /// Run one batch of [`SearchConfig::batch_iterations`].
    pub fn tick(&mut self) -> Result<Outcome, SearchError> {
        self.run_batch(self.config.batch_iterations)
    }

    /// Run until the episode concludes.
    pub fn run_to_end(&mut self) -> Result<Outcome, SearchError> {
        self.run_batch(usize::MAX)
    }

    /// The outcome of the most recent batch, without running anything.
    pub fn outcome(&self) -> Result<Outcome, SearchError> {
        match self.status {
            Status::Created | Status::Continuing => Ok(Outcome::Continuing),
            Status::Unreachable => Ok(Outcome::Unreachable),
            Status::Found => {
                let path = backtrace::reconstruct(&self.nodes, self.start, self.end);
                debug_assert!(path.is_ok(), "node table produced {path:?}");
                Ok(Outcome::Found {
                    path: path?,
                    total_cost: self.nodes.g(self.end),
                })
            }
        }
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Cell {
        self.end
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &'g G {
        self.grid
    }

    /// Total frontier pops so far, stale discards included.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// How many popped entries were outdated and skipped.
    #[inline]
    pub fn stale_discards(&self) -> usize {
        self.stale_discards
    }

    /// Cells expanded so far.
    #[inline]
    pub fn explored(&self) -> &ExplorationTracker {
        &self.explored
    }

    /// Per-cell costs and predecessors.
    #[inline]
    pub fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    /// Bookkeeping for one cell, for debug overlays.
    #[inline]
    pub fn node(&self, cell: Cell) -> Option<&SearchNode> {
        self.nodes.get(cell)
    }

    /// Pending frontier entries, stale ones included.
    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Discard the episode, keeping only what it explored.
    pub fn into_explored(self) -> ExplorationTracker {
        self.explored
    }
}
