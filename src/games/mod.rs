//! Reference games implementing `GameState`.
//!
//! - `tree`: explicit game trees, hand-written or random
//! - `nim`: multi-agent Nim

pub mod nim;
pub mod tree;
