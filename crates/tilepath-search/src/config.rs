use crate::policy::Algorithm;

/// Episode settings chosen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Expansion policy.
    pub algorithm: Algorithm,
    /// Iterations run by each [`tick`](crate::SearchEpisode::tick).
    pub batch_iterations: usize,
}

impl Default for SearchConfig {
    /// A*, advancing one iteration per tick so every expansion is visible.
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            batch_iterations: 1,
        }
    }
}

impl SearchConfig {
    /// Set the expansion policy (builder).
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the per-tick iteration budget (builder).
    pub fn with_batch_iterations(mut self, iterations: usize) -> Self {
        self.batch_iterations = iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let c = SearchConfig::default()
            .with_algorithm(Algorithm::Dijkstra)
            .with_batch_iterations(50);
        assert_eq!(c.algorithm, Algorithm::Dijkstra);
        assert_eq!(c.batch_iterations, 50);
        assert_eq!(SearchConfig::default().algorithm, Algorithm::AStar);
    }
}
