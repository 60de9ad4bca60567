//! Turn cycle shared by every search strategy.
//!
//! Agents move in the fixed order 0, 1, ..., n-1, 0, ... and the remaining
//! depth drops by one only after agent n-1 has moved. A frame is cut off
//! (evaluated directly) when the game is decided or the depth is spent,
//! regardless of whose turn it is.

use crate::core::{AgentId, GameState};

/// Position in the turn cycle: who moves, and how many full rounds remain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Agent to move.
    pub agent: AgentId,

    /// Full agent rounds left before cutoff.
    pub depth: u32,

    /// Individual moves made since the search root.
    pub ply: u32,
}

impl Turn {
    /// A turn for `agent` at `depth`, at the search root.
    #[must_use]
    pub const fn new(agent: AgentId, depth: u32) -> Self {
        Self { agent, depth, ply: 0 }
    }

    /// The maximizer's turn at the search root.
    #[must_use]
    pub const fn root(depth: u32) -> Self {
        Self::new(AgentId::MAXIMIZER, depth)
    }

    /// Whether the state at this turn is evaluated instead of expanded.
    ///
    /// Decided games are cut off even with depth remaining.
    pub fn is_cutoff<S: GameState>(&self, state: &S) -> bool {
        state.is_terminal() || self.depth == 0
    }

    /// The turn after this agent moves.
    ///
    /// Wraps to the maximizer and spends one unit of depth after the last
    /// agent; otherwise hands over to the next agent at the same depth.
    #[must_use]
    pub fn next(self, agent_count: usize) -> Self {
        if self.agent.is_last(agent_count) {
            Self {
                agent: AgentId::MAXIMIZER,
                depth: self.depth.saturating_sub(1),
                ply: self.ply + 1,
            }
        } else {
            Self {
                agent: AgentId::new(self.agent.0 + 1),
                depth: self.depth,
                ply: self.ply + 1,
            }
        }
    }
}
