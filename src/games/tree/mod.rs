//! Explicit game trees for exercising the search.
//!
//! A `GameTree` lists every position up front:
//! - Inner nodes have ordered children; action `i` picks child `i`
//! - Any node may be marked won or lost for the maximizer
//! - Every node has a raw score, read by the default evaluation
//!
//! Trees are written by hand with `leaf`/`branch`/`win`/`lose`, loaded from
//! JSON via `TreeSpec`, generated with `GameTree::random`, or stored with
//! bincode.
//!
//! ```
//! use multiagent_search::games::tree::{branch, leaf, GameTree};
//!
//! let tree = GameTree::from_spec(2, &branch([leaf(1.0), leaf(2.0)]));
//! assert_eq!(tree.len(), 3);
//! ```

mod game;
mod spec;

pub use game::{ExpansionLog, GameTree, NodeId, TreeError, TreeNode, TreeState};
pub use spec::{branch, leaf, lose, win, Outcome, TreeSpec};
