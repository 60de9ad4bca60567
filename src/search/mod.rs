//! Multi-agent game-tree search.
//!
//! ## Overview
//!
//! Agent 0 maximizes; agents 1..n-1 oppose it. The search expands the game
//! depth-first to a fixed number of full agent rounds and evaluates the
//! frontier. Three strategies share one traversal:
//!
//! - **Minimax**: opponents minimize
//! - **Alpha-beta**: opponents minimize, provably irrelevant subtrees are skipped
//! - **Expectimax**: opponents are uniform-random chance nodes
//!
//! Minimax and alpha-beta always choose the same action with the same value.
//!
//! ## Usage
//!
//! ```rust
//! use multiagent_search::eval::ScoreEvaluation;
//! use multiagent_search::games::tree::{branch, leaf, GameTree};
//! use multiagent_search::search::AgentSearch;
//!
//! let tree = GameTree::from_spec(
//!     2,
//!     &branch([
//!         branch([leaf(3.0), leaf(12.0)]),
//!         branch([leaf(8.0), leaf(2.0)]),
//!     ]),
//! );
//!
//! let mut search = AgentSearch::minimax(1, ScoreEvaluation).unwrap();
//! let decision = search.decide(&tree.root_state()).unwrap();
//! assert_eq!(decision.index, 0);
//! assert_eq!(decision.value, 3.0);
//! ```
//!
//! ## Stack depth
//!
//! Recursion goes `depth x agent_count` frames deep. `SearchConfig::max_frames`
//! bounds this and searches past it fail with `SearchError::FrameLimit`.

pub mod bounds;
pub mod engine;
pub mod stats;
pub mod strategy;
pub mod turn;

// Re-export main types
pub use bounds::Bounds;
pub use engine::{AgentSearch, Decision};
pub use stats::SearchStats;
pub use strategy::{OpponentModel, Strategy};
pub use turn::Turn;
