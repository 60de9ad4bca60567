//! Name-based evaluator registry.
//!
//! Evaluators are looked up by name once, when a search is built from a
//! `SearchConfig`. The search then holds the resolved evaluator directly.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::{ConfigError, GameState, DEFAULT_EVALUATION};

use super::evaluator::{Evaluator, ScoreEvaluation};

/// Registry of named evaluators for one state type.
pub struct EvaluatorRegistry<S> {
    entries: FxHashMap<String, Arc<dyn Evaluator<S>>>,
}

impl<S: GameState + 'static> EvaluatorRegistry<S> {
    /// Create a registry holding the default `"score"` evaluation.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: FxHashMap::default(),
        };
        registry.register(DEFAULT_EVALUATION, ScoreEvaluation);
        registry
    }
}

impl<S: GameState + 'static> Default for EvaluatorRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> EvaluatorRegistry<S> {
    /// Register an evaluator under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, evaluator: impl Evaluator<S> + 'static) {
        self.entries.insert(name.into(), Arc::new(evaluator));
    }

    /// Resolve `name` to its evaluator.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Evaluator<S>>, ConfigError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownEvaluation(name.to_string()))
    }

    /// Check if an evaluator is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
