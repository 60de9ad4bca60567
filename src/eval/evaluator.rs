//! The evaluation trait and the evaluators shipped with the crate.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::{EvaluationError, GameState};

/// Maps a state to a desirability score for the maximizer.
///
/// Called on every cutoff state: won, lost, or out of depth.
/// Must be side-effect free as far as the search can tell; calling it twice
/// on the same state must give the same value.
pub trait Evaluator<S>: Send + Sync {
    /// Score `state`. Higher is better for agent 0.
    fn evaluate(&self, state: &S) -> Result<f64, EvaluationError>;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> f64 + Send + Sync,
{
    fn evaluate(&self, state: &S) -> Result<f64, EvaluationError> {
        Ok(self(state))
    }
}

/// Default evaluation: the game's own score.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluation;

impl<S: GameState> Evaluator<S> for ScoreEvaluation {
    fn evaluate(&self, state: &S) -> Result<f64, EvaluationError> {
        Ok(state.score())
    }
}

/// Shared handle onto a `CountingEvaluator`'s call count.
#[derive(Clone, Debug, Default)]
pub struct EvaluationCounter(Arc<AtomicU64>);

impl EvaluationCounter {
    /// Number of evaluations recorded so far.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }

    fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

/// Wraps an evaluator and counts how often it is invoked.
///
/// ```
/// use multiagent_search::eval::{CountingEvaluator, Evaluator, ScoreEvaluation};
/// use multiagent_search::games::tree::{leaf, GameTree};
///
/// let tree = GameTree::from_spec(2, &leaf(3.0));
/// let counting = CountingEvaluator::new(ScoreEvaluation);
/// let counter = counting.counter();
///
/// counting.evaluate(&tree.root_state()).unwrap();
/// assert_eq!(counter.get(), 1);
/// ```
#[derive(Debug)]
pub struct CountingEvaluator<E> {
    inner: E,
    calls: EvaluationCounter,
}

impl<E> CountingEvaluator<E> {
    /// Wrap `inner` with a fresh counter.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            calls: EvaluationCounter::default(),
        }
    }

    /// A handle that stays valid after the evaluator is moved into a search.
    #[must_use]
    pub fn counter(&self) -> EvaluationCounter {
        self.calls.clone()
    }
}

impl<S, E: Evaluator<S>> Evaluator<S> for CountingEvaluator<E> {
    fn evaluate(&self, state: &S) -> Result<f64, EvaluationError> {
        self.calls.increment();
        self.inner.evaluate(state)
    }
}
