//! Search strategies and how each one treats opponents.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Which search algorithm drives the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Exhaustive worst-case search.
    Minimax,
    /// Minimax with alpha-beta pruning. Same decisions, fewer evaluations.
    AlphaBeta,
    /// Opponents pick uniformly at random; values are averaged.
    Expectimax,
}

/// How opponent nodes aggregate their children's values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpponentModel {
    /// Take the minimum over all children.
    Minimize,
    /// Take the minimum, stopping early once below alpha.
    MinimizeWithBounds,
    /// Take the arithmetic mean over all children.
    Average,
}

impl Strategy {
    /// All strategies, in a fixed order.
    pub const ALL: [Strategy; 3] = [Strategy::Minimax, Strategy::AlphaBeta, Strategy::Expectimax];

    /// The aggregation used at opponent nodes.
    #[must_use]
    pub const fn opponent_model(self) -> OpponentModel {
        match self {
            Strategy::Minimax => OpponentModel::Minimize,
            Strategy::AlphaBeta => OpponentModel::MinimizeWithBounds,
            Strategy::Expectimax => OpponentModel::Average,
        }
    }

    /// Whether this strategy carries and acts on pruning bounds.
    #[must_use]
    pub const fn prunes(self) -> bool {
        matches!(self.opponent_model(), OpponentModel::MinimizeWithBounds)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
            Strategy::Expectimax => "expectimax",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Strategy::AlphaBeta),
            "expectimax" => Ok(Strategy::Expectimax),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}
