//! Multi-agent Nim.
//!
//! A small real game for driving the search end to end:
//! - Piles of objects; on a turn an agent removes 1..=max_take from one pile
//! - The agent that takes the last object ends the game
//! - Agent 0 wins if it took the last object, and loses otherwise
//! - Score is what agent 0 has taken minus what the opponents have taken
//!
//! Supports 2-8 agents.

mod game;

pub use game::{NimGame, NimGameBuilder, Take};
