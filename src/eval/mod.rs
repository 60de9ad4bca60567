//! State evaluation for the search engine.
//!
//! An `Evaluator` turns a cutoff state into a number. The search only ever
//! compares, takes extremes of, and averages these numbers, so any evaluator
//! gives a correct search; a better heuristic only gives better decisions.
//!
//! - `ScoreEvaluation`: the game's raw score (the default, named `"score"`)
//! - `CountingEvaluator`: instrumentation wrapper counting invocations
//! - `EvaluatorRegistry`: name to evaluator, resolved at configuration time
//!
//! Any `Fn(&S) -> f64` closure is also an evaluator.

pub mod evaluator;
pub mod registry;

pub use evaluator::{CountingEvaluator, EvaluationCounter, Evaluator, ScoreEvaluation};
pub use registry::EvaluatorRegistry;
