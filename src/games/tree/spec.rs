//! Nested description of a game tree.
//!
//! `TreeSpec` is the readable, serde-friendly form used to write trees by
//! hand (or as JSON). `GameTree::from_spec` flattens it into the arena.

use serde::{Deserialize, Serialize};

/// Whether a node ends the game, and how.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Game continues.
    #[default]
    Open,
    /// The maximizer has won.
    Win,
    /// The maximizer has lost.
    Lose,
}

/// One node of a hand-written tree, with its subtree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeSpec {
    /// Raw score reported by the node.
    #[serde(default)]
    pub score: f64,

    /// Terminal marker.
    #[serde(default)]
    pub outcome: Outcome,

    /// Children in legal action order.
    #[serde(default)]
    pub children: Vec<TreeSpec>,
}

impl TreeSpec {
    /// Replace the node's score.
    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Replace the node's terminal marker.
    #[must_use]
    pub fn marked(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Number of nodes in this subtree, itself included.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeSpec::size).sum::<usize>()
    }
}

/// A childless node with `score`.
#[must_use]
pub fn leaf(score: f64) -> TreeSpec {
    TreeSpec {
        score,
        outcome: Outcome::Open,
        children: Vec::new(),
    }
}

/// A node with the given children and score 0.
#[must_use]
pub fn branch(children: impl IntoIterator<Item = TreeSpec>) -> TreeSpec {
    TreeSpec {
        score: 0.0,
        outcome: Outcome::Open,
        children: children.into_iter().collect(),
    }
}

/// A won leaf with `score`.
#[must_use]
pub fn win(score: f64) -> TreeSpec {
    leaf(score).marked(Outcome::Win)
}

/// A lost leaf with `score`.
#[must_use]
pub fn lose(score: f64) -> TreeSpec {
    leaf(score).marked(Outcome::Lose)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers() {
        let spec = branch([leaf(1.0), win(9.0), lose(-9.0)]).with_score(4.0);

        assert_eq!(spec.score, 4.0);
        assert_eq!(spec.children[1].outcome, Outcome::Win);
        assert_eq!(spec.children[2].outcome, Outcome::Lose);
        assert_eq!(spec.size(), 4);
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{"children": [{"score": 3}, {"score": 5, "outcome": "win"}]}"#;
        let spec: TreeSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec, branch([leaf(3.0), win(5.0)]));
    }
}
