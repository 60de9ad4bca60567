//! Multi-agent Nim implementation.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ActionList, AgentId, AgentMap, GameState};

/// Take `count` objects from pile `pile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Take {
    pub pile: usize,
    pub count: u32,
}

/// Nim position.
///
/// Piles live in a persistent vector, so each successor shares all
/// untouched piles with its parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NimGame {
    max_take: u32,
    piles: Vector<u32>,
    taken: AgentMap<u32>,
    last_mover: Option<AgentId>,
}

/// Builder for creating a NimGame.
pub struct NimGameBuilder {
    agent_count: usize,
    max_take: u32,
    piles: Vec<u32>,
}

impl Default for NimGameBuilder {
    fn default() -> Self {
        Self {
            agent_count: 2,
            max_take: 3,
            piles: vec![3, 4, 5],
        }
    }
}

impl NimGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent_count(mut self, count: usize) -> Self {
        assert!((2..=8).contains(&count), "Agent count must be 2-8");
        self.agent_count = count;
        self
    }

    pub fn max_take(mut self, max_take: u32) -> Self {
        assert!(max_take >= 1, "Must be allowed to take at least 1");
        self.max_take = max_take;
        self
    }

    pub fn piles(mut self, piles: &[u32]) -> Self {
        self.piles = piles.to_vec();
        self
    }

    pub fn build(self) -> NimGame {
        NimGame {
            max_take: self.max_take,
            piles: self.piles.into_iter().collect(),
            taken: AgentMap::with_value(self.agent_count, 0),
            last_mover: None,
        }
    }
}

impl NimGame {
    /// Objects left in each pile.
    pub fn piles(&self) -> impl Iterator<Item = u32> + '_ {
        self.piles.iter().copied()
    }

    /// Objects left across all piles.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.piles.iter().sum()
    }

    /// Objects `agent` has taken so far.
    #[must_use]
    pub fn taken_by(&self, agent: AgentId) -> u32 {
        self.taken[agent]
    }

    /// The agent that made the last move, if any.
    #[must_use]
    pub fn last_mover(&self) -> Option<AgentId> {
        self.last_mover
    }

    /// Whether every pile is empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.remaining() == 0
    }

    /// Evaluation that ranks decided games above any score difference.
    ///
    /// Win and loss map to `+/-(1000 + remaining score)`; open positions use
    /// the plain score.
    pub fn outcome_evaluation(state: &NimGame) -> f64 {
        if state.is_win() {
            1000.0 + state.score()
        } else if state.is_lose() {
            -1000.0 + state.score()
        } else {
            state.score()
        }
    }
}

impl GameState for NimGame {
    type Action = Take;

    fn agent_count(&self) -> usize {
        self.taken.agent_count()
    }

    fn legal_actions(&self, _agent: AgentId) -> ActionList<Take> {
        let mut actions = ActionList::new();
        for (pile, &size) in self.piles.iter().enumerate() {
            for count in 1..=size.min(self.max_take) {
                actions.push(Take { pile, count });
            }
        }
        actions
    }

    fn successor(&self, agent: AgentId, action: &Take) -> Self {
        let mut next = self.clone();
        if let Some(size) = next.piles.get_mut(action.pile) {
            let count = action.count.min(*size);
            *size -= count;
            next.taken[agent] += count;
        }
        next.last_mover = Some(agent);
        next
    }

    fn is_win(&self) -> bool {
        self.is_over() && self.last_mover.is_some_and(AgentId::is_maximizer)
    }

    fn is_lose(&self) -> bool {
        self.is_over() && self.last_mover.is_some_and(|agent| !agent.is_maximizer())
    }

    /// Objects taken by the maximizer minus objects taken by all opponents.
    fn score(&self) -> f64 {
        let mine = f64::from(self.taken[AgentId::MAXIMIZER]);
        let theirs: f64 = AgentId::opponents(self.taken.agent_count())
            .map(|agent| f64::from(self.taken[agent]))
            .sum();
        mine - theirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let game = NimGameBuilder::new().build();

        assert_eq!(game.agent_count(), 2);
        assert_eq!(game.piles().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(game.remaining(), 12);
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_legal_actions_respect_max_take() {
        let game = NimGameBuilder::new().piles(&[1, 5]).max_take(2).build();
        let actions = game.legal_actions(AgentId::MAXIMIZER);

        assert_eq!(
            actions.as_slice(),
            &[
                Take { pile: 0, count: 1 },
                Take { pile: 1, count: 1 },
                Take { pile: 1, count: 2 },
            ]
        );
    }

    #[test]
    fn test_successor_is_independent() {
        let game = NimGameBuilder::new().piles(&[4]).build();
        let next = game.successor(AgentId::new(1), &Take { pile: 0, count: 3 });

        assert_eq!(game.remaining(), 4);
        assert_eq!(next.remaining(), 1);
        assert_eq!(next.taken_by(AgentId::new(1)), 3);
        assert_eq!(next.last_mover(), Some(AgentId::new(1)));
        assert_eq!(next.score(), -3.0);
    }

    #[test]
    fn test_last_take_decides() {
        let game = NimGameBuilder::new().agent_count(3).piles(&[2]).build();

        let won = game.successor(AgentId::MAXIMIZER, &Take { pile: 0, count: 2 });
        assert!(won.is_win());
        assert!(!won.is_lose());
        assert!(won.legal_actions(AgentId::new(1)).is_empty());

        let lost = game.successor(AgentId::new(2), &Take { pile: 0, count: 2 });
        assert!(lost.is_lose());
        assert!(!lost.is_win());
    }

    #[test]
    fn test_outcome_evaluation() {
        let game = NimGameBuilder::new().piles(&[2]).build();
        let won = game.successor(AgentId::MAXIMIZER, &Take { pile: 0, count: 2 });
        let lost = game.successor(AgentId::new(1), &Take { pile: 0, count: 2 });

        assert_eq!(NimGame::outcome_evaluation(&game), 0.0);
        assert_eq!(NimGame::outcome_evaluation(&won), 1002.0);
        assert_eq!(NimGame::outcome_evaluation(&lost), -1002.0);
    }

    #[test]
    fn test_serialization() {
        let game = NimGameBuilder::new().agent_count(3).build();
        let json = serde_json::to_string(&game).unwrap();
        let deserialized: NimGame = serde_json::from_str(&json).unwrap();
        assert_eq!(game, deserialized);
    }
}
