//! Error types for configuration, evaluation and search.

use thiserror::Error;

use super::agent::AgentId;

/// Invalid search configuration, detected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Search depth must be at least 1, got {0}")]
    InvalidDepth(u32),

    #[error("Frame limit must be at least 1")]
    InvalidFrameLimit,

    #[error("Unknown evaluation function: {0}")]
    UnknownEvaluation(String),

    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),
}

/// Failure raised by an evaluation function.
///
/// The search passes these through to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Evaluation failed: {0}")]
pub struct EvaluationError(pub String);

impl EvaluationError {
    /// Create an evaluation error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors that can occur during a search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// An agent had to move in a live state but had nothing to play.
    #[error("{agent} has no legal actions at depth {depth} (ply {ply}) in a non-terminal state")]
    NoLegalActions { agent: AgentId, depth: u32, ply: u32 },

    #[error("Search of depth {depth} over {agents} agents needs more than {limit} frames")]
    FrameLimit { depth: u32, agents: usize, limit: u32 },

    #[error("Game must have at least 2 agents, got {0}")]
    TooFewAgents(usize),

    #[error("Game has {0} agents, more than an AgentId can address")]
    TooManyAgents(usize),

    #[error("{agent} is out of range for a game of {agents} agents")]
    InvalidAgent { agent: AgentId, agents: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_legal_actions_message() {
        let err = SearchError::NoLegalActions { agent: AgentId::new(2), depth: 1, ply: 4 };
        assert_eq!(
            err.to_string(),
            "Agent 2 has no legal actions at depth 1 (ply 4) in a non-terminal state"
        );
    }

    #[test]
    fn test_evaluation_error_is_transparent() {
        let err: SearchError = EvaluationError::new("sensor offline").into();
        assert_eq!(err.to_string(), "Evaluation failed: sensor offline");
        assert_eq!(err, SearchError::Evaluation(EvaluationError::new("sensor offline")));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: SearchError = ConfigError::InvalidDepth(0).into();
        assert!(matches!(err, SearchError::Config(ConfigError::InvalidDepth(0))));
    }
}
