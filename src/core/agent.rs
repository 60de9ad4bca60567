//! Agent identification and per-agent data storage.
//!
//! ## AgentId
//!
//! Type-safe agent index. Agent 0 is always the maximizer; every other
//! index is an opponent.
//!
//! ## AgentMap
//!
//! Per-agent data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `AgentId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Largest agent count an `AgentId` can address.
pub const MAX_AGENTS: usize = u8::MAX as usize + 1;

/// Agent identifier supporting up to `MAX_AGENTS` agents.
///
/// Agent indices are 0-based: the maximizer is `AgentId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// The sole maximizing agent.
    pub const MAXIMIZER: AgentId = AgentId(0);

    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this agent is the maximizer.
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        self.0 == 0
    }

    /// Check if this agent is the last one to move in a round.
    #[must_use]
    pub const fn is_last(self, agent_count: usize) -> bool {
        self.index() + 1 == agent_count
    }

    /// Iterate over all agent IDs for a game with `agent_count` agents.
    ///
    /// ```
    /// use multiagent_search::core::AgentId;
    ///
    /// let agents: Vec<_> = AgentId::all(3).collect();
    /// assert_eq!(agents, vec![AgentId::new(0), AgentId::new(1), AgentId::new(2)]);
    /// ```
    pub fn all(agent_count: usize) -> impl Iterator<Item = AgentId> {
        (0..agent_count.min(MAX_AGENTS)).map(|i| AgentId(i as u8))
    }

    /// Iterate over the opponents (every agent except the maximizer).
    pub fn opponents(agent_count: usize) -> impl Iterator<Item = AgentId> {
        Self::all(agent_count).skip(1)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}

/// Per-agent data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use multiagent_search::core::{AgentId, AgentMap};
///
/// let mut taken: AgentMap<u32> = AgentMap::with_value(3, 0);
/// taken[AgentId::new(2)] += 4;
/// assert_eq!(taken[AgentId::new(2)], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentMap<T> {
    data: Vec<T>,
}

impl<T> AgentMap<T> {
    /// Create a new AgentMap with values from a factory function.
    pub fn new(agent_count: usize, factory: impl Fn(AgentId) -> T) -> Self {
        assert!(agent_count > 0, "Must have at least 1 agent");
        assert!(agent_count <= MAX_AGENTS, "At most {MAX_AGENTS} agents supported");

        let data = AgentId::all(agent_count).map(factory).collect();

        Self { data }
    }

    /// Create a new AgentMap with all entries set to the same value.
    pub fn with_value(agent_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(agent_count, |_| value.clone())
    }

    /// Get the number of agents.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to an agent's data.
    #[must_use]
    pub fn get(&self, agent: AgentId) -> &T {
        &self.data[agent.index()]
    }

    /// Get a mutable reference to an agent's data.
    pub fn get_mut(&mut self, agent: AgentId) -> &mut T {
        &mut self.data[agent.index()]
    }

    /// Iterate over (AgentId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (AgentId(i as u8), v))
    }
}

impl<T> Index<AgentId> for AgentMap<T> {
    type Output = T;

    fn index(&self, agent: AgentId) -> &Self::Output {
        self.get(agent)
    }
}

impl<T> IndexMut<AgentId> for AgentMap<T> {
    fn index_mut(&mut self, agent: AgentId) -> &mut Self::Output {
        self.get_mut(agent)
    }
}
