//! Game state trait consumed by the search engine.
//!
//! Games implement `GameState` to expose the capabilities the search needs:
//! - What actions are legal for an agent
//! - How an action produces a successor state
//! - Win/lose detection and the raw score
//!
//! The engine never mutates a state in place. Every transition goes through
//! `successor`, which must return an independent state.

use smallvec::SmallVec;

use super::agent::AgentId;

/// Legal actions for one agent, in the order the game provides them.
///
/// SmallVec keeps the common case (a handful of moves) off the heap.
pub type ActionList<A> = SmallVec<[A; 8]>;

/// Game state trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Deterministic order. May be empty only when the state
///   is won, lost, or the search is out of depth.
/// - `successor`: Pure. Must not alias or modify `self`.
/// - `agent_count`: At least 2 and constant for a match.
/// - `is_win` / `is_lose`: Never both true.
pub trait GameState: Sized {
    /// Opaque action token passed back to `successor`.
    type Action: Clone + std::fmt::Debug;

    /// Total number of agents, maximizer included.
    fn agent_count(&self) -> usize;

    /// Legal actions for `agent` in this state.
    fn legal_actions(&self, agent: AgentId) -> ActionList<Self::Action>;

    /// The state reached when `agent` plays `action`.
    fn successor(&self, agent: AgentId, action: &Self::Action) -> Self;

    /// The maximizer has won.
    fn is_win(&self) -> bool;

    /// The maximizer has lost.
    fn is_lose(&self) -> bool;

    /// Raw game score, read by the default evaluation.
    fn score(&self) -> f64;

    // === Convenience Methods ===

    /// Whether the game is decided (won or lost).
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}
