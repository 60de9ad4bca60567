//! Core types: agents, the game state contract, configuration, errors, RNG.
//!
//! These are the building blocks shared by every search strategy.
//! Games plug in by implementing `GameState`; nothing here knows the rules
//! of any particular game.

pub mod agent;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use agent::{AgentId, AgentMap, MAX_AGENTS};
pub use config::{SearchConfig, DEFAULT_EVALUATION};
pub use error::{ConfigError, EvaluationError, SearchError};
pub use rng::SeededRng;
pub use state::{ActionList, GameState};
