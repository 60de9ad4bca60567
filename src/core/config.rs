//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Name of the evaluation used when none is configured.
pub const DEFAULT_EVALUATION: &str = "score";

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search depth in full agent rounds (default: 2).
    /// One unit covers a move by every agent, not a single ply.
    pub depth: u32,

    /// Name of the evaluation function, resolved once at construction.
    pub evaluation: String,

    /// Upper bound on nested search frames (depth x agent count).
    /// Guards the call stack against oversized configurations.
    pub max_frames: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            evaluation: DEFAULT_EVALUATION.to_string(),
            max_frames: 512,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with a named evaluation function.
    pub fn with_evaluation(mut self, name: impl Into<String>) -> Self {
        self.evaluation = name.into();
        self
    }

    /// Create a new config with a custom frame limit.
    pub fn with_max_frames(mut self, max_frames: u32) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Check the configuration for values no search can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        if self.max_frames == 0 {
            return Err(ConfigError::InvalidFrameLimit);
        }
        Ok(())
    }
}
