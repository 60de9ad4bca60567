//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Search frames entered (expanded or evaluated).
    pub nodes_visited: u64,

    /// Evaluation function invocations.
    pub evaluations: u64,

    /// Early returns taken by alpha-beta pruning.
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate visited nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of visited nodes that were evaluated rather than expanded.
    #[must_use]
    pub fn leaf_ratio(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.evaluations as f64 / self.nodes_visited as f64
        }
    }
}
