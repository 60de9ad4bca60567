//! Depth-limited multi-agent search.
//!
//! One traversal serves all three strategies. Every frame is the triple
//! (state, turn, bounds) living on the call stack:
//!
//! 1. Cutoff: decided game or spent depth, return the evaluation
//! 2. Maximizer: best child value, pruning against beta for alpha-beta
//! 3. Opponent: minimum, bounded minimum, or mean of child values
//!
//! The root fold scans the maximizer's actions in the order the game gives
//! them and keeps the first action that strictly beats the best value so far.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::{ActionList, AgentId, GameState, SearchConfig, SearchError, MAX_AGENTS};
use crate::eval::{Evaluator, EvaluatorRegistry};

use super::bounds::Bounds;
use super::stats::SearchStats;
use super::strategy::{OpponentModel, Strategy};
use super::turn::Turn;

/// Outcome of a root decision.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision<A> {
    /// The chosen action for the maximizer.
    pub action: A,

    /// Search value of the chosen action.
    pub value: f64,

    /// Position of `action` in the root's legal action order.
    pub index: usize,

    /// Value returned for each root action, in legal order.
    /// Under alpha-beta, non-best entries may be bounds rather than exact.
    pub root_values: Vec<f64>,
}

/// Search context for one agent.
///
/// Generic over the game state type. Owns the configuration and the
/// resolved evaluator, and records statistics for the last call.
pub struct AgentSearch<S: GameState> {
    /// Which algorithm to run.
    strategy: Strategy,

    /// Search configuration.
    config: SearchConfig,

    /// Evaluation applied at cutoff states.
    evaluator: Arc<dyn Evaluator<S>>,

    /// Search statistics.
    stats: SearchStats,
}

impl<S: GameState> AgentSearch<S> {
    /// Create a search context with an evaluator.
    ///
    /// Fails if the configuration is invalid.
    pub fn new(
        strategy: Strategy,
        config: SearchConfig,
        evaluator: impl Evaluator<S> + 'static,
    ) -> Result<Self, SearchError> {
        Self::with_shared_evaluator(strategy, config, Arc::new(evaluator))
    }

    /// Create a search context around an already shared evaluator.
    pub fn with_shared_evaluator(
        strategy: Strategy,
        config: SearchConfig,
        evaluator: Arc<dyn Evaluator<S>>,
    ) -> Result<Self, SearchError> {
        config.validate()?;

        Ok(Self {
            strategy,
            config,
            evaluator,
            stats: SearchStats::default(),
        })
    }

    /// Create a search context, resolving `config.evaluation` in `registry`.
    pub fn from_config(
        strategy: Strategy,
        config: SearchConfig,
        registry: &EvaluatorRegistry<S>,
    ) -> Result<Self, SearchError> {
        let evaluator = registry.resolve(&config.evaluation)?;
        Self::with_shared_evaluator(strategy, config, evaluator)
    }

    /// Minimax search to `depth` rounds.
    pub fn minimax(depth: u32, evaluator: impl Evaluator<S> + 'static) -> Result<Self, SearchError> {
        Self::new(Strategy::Minimax, SearchConfig::default().with_depth(depth), evaluator)
    }

    /// Alpha-beta search to `depth` rounds.
    pub fn alpha_beta(depth: u32, evaluator: impl Evaluator<S> + 'static) -> Result<Self, SearchError> {
        Self::new(Strategy::AlphaBeta, SearchConfig::default().with_depth(depth), evaluator)
    }

    /// Expectimax search to `depth` rounds.
    pub fn expectimax(depth: u32, evaluator: impl Evaluator<S> + 'static) -> Result<Self, SearchError> {
        Self::new(Strategy::Expectimax, SearchConfig::default().with_depth(depth), evaluator)
    }

    /// Pick the maximizer's action from `state`.
    pub fn choose_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        self.decide(state).map(|decision| decision.action)
    }

    /// Pick the maximizer's action from `state`, with its value and the
    /// value of every root action.
    ///
    /// The root must offer the maximizer at least one action; otherwise this
    /// returns `SearchError::NoLegalActions`.
    pub fn decide(&mut self, state: &S) -> Result<Decision<S::Action>, SearchError> {
        let start = Instant::now();
        self.stats.reset();

        let agent_count = self.check_frames(state, self.config.depth)?;
        let root = Turn::root(self.config.depth);

        let actions = state.legal_actions(root.agent);
        if actions.is_empty() {
            return Err(self.no_legal_actions(root));
        }

        let mut bounds = Bounds::unbounded();
        let mut best: Option<(usize, f64)> = None;
        let mut root_values = Vec::with_capacity(actions.len());

        for (index, action) in actions.iter().enumerate() {
            let child = state.successor(root.agent, action);
            let value = self.value_at(&child, root.next(agent_count), bounds)?;
            trace!(index, ?action, value, "root action scored");

            root_values.push(value);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((index, value));
            }
            if self.strategy.prunes() {
                bounds.raise_alpha(value);
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let Some((index, value)) = best else {
            return Err(self.no_legal_actions(root));
        };

        debug!(
            strategy = %self.strategy,
            depth = self.config.depth,
            index,
            value,
            nodes = self.stats.nodes_visited,
            evaluations = self.stats.evaluations,
            cutoffs = self.stats.cutoffs,
            leaf_ratio = self.stats.leaf_ratio(),
            "search decided"
        );

        Ok(Decision {
            action: actions[index].clone(),
            value,
            index,
            root_values,
        })
    }

    /// Search value of `state` with `agent` to move and `depth` rounds left.
    ///
    /// Alpha-beta starts from the unbounded window.
    pub fn value(&mut self, state: &S, depth: u32, agent: AgentId) -> Result<f64, SearchError> {
        let start = Instant::now();
        self.stats.reset();

        let agent_count = self.check_frames(state, depth)?;
        if agent.index() >= agent_count {
            return Err(SearchError::InvalidAgent { agent, agents: agent_count });
        }

        let value = self.value_at(state, Turn::new(agent, depth), Bounds::unbounded());
        self.stats.time_us = start.elapsed().as_micros() as u64;
        value
    }

    /// Value of one search frame.
    fn value_at(&mut self, state: &S, turn: Turn, bounds: Bounds) -> Result<f64, SearchError> {
        self.stats.nodes_visited += 1;
        self.stats.max_ply = self.stats.max_ply.max(turn.ply);

        if turn.is_cutoff(state) {
            self.stats.evaluations += 1;
            return Ok(self.evaluator.evaluate(state)?);
        }

        let actions = state.legal_actions(turn.agent);
        if actions.is_empty() {
            return Err(self.no_legal_actions(turn));
        }

        if turn.agent.is_maximizer() {
            return self.max_value(state, turn, &actions, bounds);
        }

        match self.strategy.opponent_model() {
            OpponentModel::Minimize => self.min_value(state, turn, &actions, bounds, false),
            OpponentModel::MinimizeWithBounds => self.min_value(state, turn, &actions, bounds, true),
            OpponentModel::Average => self.chance_value(state, turn, &actions),
        }
    }

    fn max_value(
        &mut self,
        state: &S,
        turn: Turn,
        actions: &ActionList<S::Action>,
        mut bounds: Bounds,
    ) -> Result<f64, SearchError> {
        let next = turn.next(state.agent_count());
        let mut best = f64::NEG_INFINITY;

        for action in actions {
            let child = state.successor(turn.agent, action);
            best = best.max(self.value_at(&child, next, bounds)?);

            if self.strategy.prunes() {
                if bounds.cuts_max(best) {
                    self.stats.cutoffs += 1;
                    return Ok(best);
                }
                bounds.raise_alpha(best);
            }
        }

        Ok(best)
    }

    fn min_value(
        &mut self,
        state: &S,
        turn: Turn,
        actions: &ActionList<S::Action>,
        mut bounds: Bounds,
        prune: bool,
    ) -> Result<f64, SearchError> {
        let next = turn.next(state.agent_count());
        let mut worst = f64::INFINITY;

        for action in actions {
            let child = state.successor(turn.agent, action);
            worst = worst.min(self.value_at(&child, next, bounds)?);

            if prune {
                if bounds.cuts_min(worst) {
                    self.stats.cutoffs += 1;
                    return Ok(worst);
                }
                bounds.lower_beta(worst);
            }
        }

        Ok(worst)
    }

    /// Opponent picks uniformly at random: mean of the children.
    fn chance_value(
        &mut self,
        state: &S,
        turn: Turn,
        actions: &ActionList<S::Action>,
    ) -> Result<f64, SearchError> {
        let next = turn.next(state.agent_count());
        let mut total = 0.0;

        for action in actions {
            let child = state.successor(turn.agent, action);
            total += self.value_at(&child, next, Bounds::unbounded())?;
        }

        Ok(total / actions.len() as f64)
    }

    /// Validate the agent count and the frame limit for a search to `depth`.
    fn check_frames(&self, state: &S, depth: u32) -> Result<usize, SearchError> {
        let agent_count = state.agent_count();
        if agent_count < 2 {
            return Err(SearchError::TooFewAgents(agent_count));
        }
        if agent_count > MAX_AGENTS {
            return Err(SearchError::TooManyAgents(agent_count));
        }

        if u64::from(depth) * agent_count as u64 > u64::from(self.config.max_frames) {
            return Err(SearchError::FrameLimit {
                depth,
                agents: agent_count,
                limit: self.config.max_frames,
            });
        }

        Ok(agent_count)
    }

    fn no_legal_actions(&self, turn: Turn) -> SearchError {
        warn!(
            agent = turn.agent.0,
            depth = turn.depth,
            ply = turn.ply,
            "agent to move has no legal actions in a live state"
        );
        SearchError::NoLegalActions {
            agent: turn.agent,
            depth: turn.depth,
            ply: turn.ply,
        }
    }

    /// Get search statistics for the last call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigError, EvaluationError};

    /// Counting game: every agent may add 1 or 2 to a shared total.
    /// Score is the total, so the maximizer wants it high and opponents low.
    #[derive(Clone, Debug)]
    struct Counter {
        agents: usize,
        total: i32,
        stuck: Option<AgentId>,
    }

    impl Counter {
        fn new(agents: usize) -> Self {
            Self { agents, total: 0, stuck: None }
        }
    }

    impl GameState for Counter {
        type Action = i32;

        fn agent_count(&self) -> usize {
            self.agents
        }

        fn legal_actions(&self, agent: AgentId) -> ActionList<i32> {
            if self.stuck == Some(agent) {
                return ActionList::new();
            }
            ActionList::from_slice(&[1, 2])
        }

        fn successor(&self, _agent: AgentId, action: &i32) -> Self {
            Self {
                total: self.total + action,
                ..self.clone()
            }
        }

        fn is_win(&self) -> bool {
            false
        }

        fn is_lose(&self) -> bool {
            false
        }

        fn score(&self) -> f64 {
            f64::from(self.total)
        }
    }

    fn score(state: &Counter) -> f64 {
        state.score()
    }

    #[test]
    fn test_minimax_value() {
        let mut search = AgentSearch::minimax(1, score).unwrap();
        // max adds 2, min adds 1
        assert_eq!(search.value(&Counter::new(2), 1, AgentId::MAXIMIZER), Ok(3.0));
    }

    #[test]
    fn test_expectimax_value() {
        let mut search = AgentSearch::expectimax(1, score).unwrap();
        // max adds 2, opponent averages 1 and 2
        assert_eq!(search.value(&Counter::new(2), 1, AgentId::MAXIMIZER), Ok(3.5));
    }

    #[test]
    fn test_decide_prefers_larger_step() {
        let mut search = AgentSearch::alpha_beta(2, score).unwrap();
        let decision = search.decide(&Counter::new(3)).unwrap();

        assert_eq!(decision.action, 2);
        assert_eq!(decision.index, 1);
        assert_eq!(decision.value, 8.0);
    }

    #[test]
    fn test_frame_limit() {
        let config = SearchConfig::default().with_depth(10).with_max_frames(20);
        let mut search = AgentSearch::new(Strategy::Minimax, config, score).unwrap();

        let err = search.decide(&Counter::new(3)).unwrap_err();
        assert_eq!(err, SearchError::FrameLimit { depth: 10, agents: 3, limit: 20 });
    }

    #[test]
    fn test_too_few_agents() {
        let mut search = AgentSearch::minimax(1, score).unwrap();
        assert_eq!(search.decide(&Counter::new(1)).unwrap_err(), SearchError::TooFewAgents(1));
    }

    #[test]
    fn test_too_many_agents() {
        for strategy in Strategy::ALL {
            let mut search = AgentSearch::new(strategy, SearchConfig::default().with_depth(1), score).unwrap();
            let err = search.decide(&Counter::new(300)).unwrap_err();
            assert_eq!(err, SearchError::TooManyAgents(300));
        }

        let mut search = AgentSearch::minimax(1, score).unwrap();
        let err = search.value(&Counter::new(300), 1, AgentId::MAXIMIZER).unwrap_err();
        assert_eq!(err, SearchError::TooManyAgents(300));
    }

    #[test]
    fn test_last_addressable_agent_wraps_to_maximizer() {
        // Agent 255 of 256 ends the round and hands over to agent 0 at depth 0
        let mut search = AgentSearch::minimax(1, score).unwrap();
        let value = search.value(&Counter::new(MAX_AGENTS), 1, AgentId::new(255)).unwrap();
        assert_eq!(value, 1.0);
        assert_eq!(search.stats().max_ply, 1);
    }

    #[test]
    fn test_invalid_agent() {
        let mut search = AgentSearch::minimax(1, score).unwrap();
        let err = search.value(&Counter::new(2), 1, AgentId::new(2)).unwrap_err();
        assert_eq!(err, SearchError::InvalidAgent { agent: AgentId::new(2), agents: 2 });
    }

    #[test]
    fn test_zero_depth_rejected() {
        let result = AgentSearch::<Counter>::minimax(0, score);
        assert!(matches!(result, Err(SearchError::Config(ConfigError::InvalidDepth(0)))));
    }

    #[test]
    fn test_stuck_opponent_is_an_error() {
        let mut state = Counter::new(2);
        state.stuck = Some(AgentId::new(1));

        for strategy in Strategy::ALL {
            let mut search = AgentSearch::new(strategy, SearchConfig::default(), score).unwrap();
            let err = search.decide(&state).unwrap_err();
            assert_eq!(
                err,
                SearchError::NoLegalActions { agent: AgentId::new(1), depth: 2, ply: 1 }
            );
        }
    }

    #[test]
    fn test_stuck_root_is_an_error() {
        let mut state = Counter::new(2);
        state.stuck = Some(AgentId::MAXIMIZER);

        let mut search = AgentSearch::minimax(2, score).unwrap();
        let err = search.choose_action(&state).unwrap_err();
        assert_eq!(err, SearchError::NoLegalActions { agent: AgentId::MAXIMIZER, depth: 2, ply: 0 });
    }

    struct Broken;

    impl Evaluator<Counter> for Broken {
        fn evaluate(&self, _state: &Counter) -> Result<f64, EvaluationError> {
            Err(EvaluationError::new("heuristic unavailable"))
        }
    }

    #[test]
    fn test_evaluation_failure_propagates() {
        let mut search = AgentSearch::expectimax(1, Broken).unwrap();
        let err = search.decide(&Counter::new(2)).unwrap_err();
        assert_eq!(err, SearchError::Evaluation(EvaluationError::new("heuristic unavailable")));
    }

    #[test]
    fn test_stats_recorded() {
        let mut search = AgentSearch::minimax(1, score).unwrap();
        search.decide(&Counter::new(2)).unwrap();

        let stats = search.stats();
        // 2 opponent frames + 4 leaves
        assert_eq!(stats.nodes_visited, 6);
        assert_eq!(stats.evaluations, 4);
        assert_eq!(stats.max_ply, 2);
        assert_eq!(stats.cutoffs, 0);
    }
}
