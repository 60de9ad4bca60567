//! # multiagent-search
//!
//! Depth-limited game-tree search for one maximizing agent against one or
//! more opponents.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine only sees the `GameState` trait: legal
//!    actions, successors, win/lose, score. It never mutates a state.
//!
//! 2. **N-Agent First**: Agent 0 maximizes; agents 1..n-1 all oppose it.
//!    Depth counts full rounds through every agent, not single moves.
//!
//! 3. **Pluggable Evaluation**: Cutoff states are scored by an `Evaluator`,
//!    resolved once at construction (by value or by registry name).
//!
//! ## Strategies
//!
//! - **Minimax**: opponents minimize
//! - **Alpha-beta**: minimax with strict-inequality pruning; same decisions
//! - **Expectimax**: opponents choose uniformly at random
//!
//! Ties at the root go to the action listed first by the game.
//!
//! ## Modules
//!
//! - `core`: Agent IDs, the game state trait, configuration, errors, RNG
//! - `eval`: Evaluation trait, default evaluation, registry
//! - `search`: Turn cycle, pruning bounds, the search engine
//! - `games`: Reference games (explicit trees, Nim)

pub mod core;
pub mod eval;
pub mod games;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    ActionList, AgentId, AgentMap, ConfigError, EvaluationError, GameState, SearchConfig,
    SearchError, SeededRng,
};

pub use crate::eval::{CountingEvaluator, EvaluationCounter, Evaluator, EvaluatorRegistry, ScoreEvaluation};

pub use crate::search::{
    AgentSearch, Bounds, Decision, OpponentModel, SearchStats, Strategy, Turn,
};
