//! Arena-based explicit game tree.

use std::sync::{Arc, Mutex};

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{ActionList, AgentId, GameState, SeededRng};

use super::spec::{Outcome, TreeSpec};

/// Chance that a random non-root inner node is generated as decided.
const RANDOM_TERMINAL_PROBABILITY: f64 = 0.05;

/// Index into the GameTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Errors raised when loading a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Failed to decode tree: {0}")]
    Decode(#[from] bincode::Error),

    #[error("Tree has no nodes")]
    Empty,

    #[error("Tree must have at least 2 agents, got {0}")]
    TooFewAgents(usize),

    #[error("{parent} points at missing child {child}")]
    DanglingChild { parent: NodeId, child: NodeId },
}

/// One node in the arena.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Raw score.
    pub score: f64,

    /// Terminal marker.
    pub outcome: Outcome,

    /// Children in legal action order.
    pub children: SmallVec<[NodeId; 4]>,
}

/// A fixed game tree for a set number of agents.
///
/// Turn order is not stored: the search decides who moves at each level,
/// and the tree only answers which children a node has. Node storage is a
/// persistent vector, so handing out states is O(1).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameTree {
    agents: usize,
    nodes: Vector<TreeNode>,
}

impl GameTree {
    /// Flatten a nested `TreeSpec` into a tree. Its root becomes `NodeId::ROOT`.
    pub fn from_spec(agents: usize, spec: &TreeSpec) -> Self {
        assert!(agents >= 2, "Game tree needs at least 2 agents");

        let mut nodes = Vector::new();
        Self::push_spec(&mut nodes, spec);
        Self { agents, nodes }
    }

    fn push_spec(nodes: &mut Vector<TreeNode>, spec: &TreeSpec) -> NodeId {
        let id = NodeId(nodes.len() as u32);
        nodes.push_back(TreeNode {
            score: spec.score,
            outcome: spec.outcome,
            children: SmallVec::new(),
        });

        let children: SmallVec<[NodeId; 4]> = spec
            .children
            .iter()
            .map(|child| Self::push_spec(nodes, child))
            .collect();
        if let Some(node) = nodes.get_mut(id.index()) {
            node.children = children;
        }
        id
    }

    /// Generate a random tree deep enough for a search of `rounds` rounds.
    ///
    /// Every root-to-leaf path has `rounds * agents` moves unless it stops
    /// early at a decided node. Each inner node has 1..=`branching` children
    /// and leaves carry whole-number scores in [-100, 100).
    pub fn random(seed: u64, agents: usize, rounds: u32, branching: usize) -> Self {
        assert!(agents >= 2, "Game tree needs at least 2 agents");
        assert!(branching >= 1, "Branching factor must be at least 1");

        let mut rng = SeededRng::new(seed);
        let height = rounds as usize * agents;
        let spec = Self::random_spec(&mut rng, height, branching, true);
        Self::from_spec(agents, &spec)
    }

    fn random_spec(rng: &mut SeededRng, height: usize, branching: usize, is_root: bool) -> TreeSpec {
        let score = rng.gen_score(-100..100);
        if height == 0 {
            return TreeSpec {
                score,
                outcome: Outcome::Open,
                children: Vec::new(),
            };
        }

        if !is_root && rng.gen_bool(RANDOM_TERMINAL_PROBABILITY) {
            let outcome = if rng.gen_bool(0.5) { Outcome::Win } else { Outcome::Lose };
            return TreeSpec {
                score,
                outcome,
                children: Vec::new(),
            };
        }

        let width = 1 + rng.gen_range_usize(0..branching);
        TreeSpec {
            score,
            outcome: Outcome::Open,
            children: (0..width)
                .map(|_| Self::random_spec(rng, height - 1, branching, false))
                .collect(),
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TreeError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode with bincode and check the arena is well formed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TreeError> {
        let tree: GameTree = bincode::deserialize(bytes)?;
        tree.validate()?;
        Ok(tree)
    }

    /// Check agent count and child references.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.agents < 2 {
            return Err(TreeError::TooFewAgents(self.agents));
        }
        if self.nodes.is_empty() {
            return Err(TreeError::Empty);
        }
        for (index, node) in self.nodes.iter().enumerate() {
            if let Some(&child) = node.children.iter().find(|c| c.index() >= self.nodes.len()) {
                return Err(TreeError::DanglingChild {
                    parent: NodeId(index as u32),
                    child,
                });
            }
        }
        Ok(())
    }

    /// Number of agents.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.agents
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Number of childless nodes.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.children.is_empty()).count()
    }

    /// State handle at the root.
    #[must_use]
    pub fn root_state(&self) -> TreeState {
        self.state_at(NodeId::ROOT)
    }

    /// State handle at `node`.
    #[must_use]
    pub fn state_at(&self, node: NodeId) -> TreeState {
        TreeState {
            tree: self.clone(),
            node,
            log: None,
        }
    }

    /// Root state that records every successor it or its descendants generate.
    #[must_use]
    pub fn traced_root_state(&self) -> (TreeState, ExpansionLog) {
        let log = ExpansionLog::default();
        let state = TreeState {
            tree: self.clone(),
            node: NodeId::ROOT,
            log: Some(log.clone()),
        };
        (state, log)
    }
}

/// Shared record of generated successor nodes, in generation order.
#[derive(Clone, Debug, Default)]
pub struct ExpansionLog(Arc<Mutex<Vec<NodeId>>>);

impl ExpansionLog {
    fn record(&self, node: NodeId) {
        let mut generated = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generated.push(node);
    }

    /// Generated nodes so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<NodeId> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    /// Number of successors generated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    /// Check if nothing was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Position in a `GameTree`.
///
/// Actions are child positions: action `i` moves to the node's `i`-th child.
#[derive(Clone, Debug)]
pub struct TreeState {
    tree: GameTree,
    node: NodeId,
    log: Option<ExpansionLog>,
}

impl TreeState {
    /// The node this state points at.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }
}

impl GameState for TreeState {
    type Action = usize;

    fn agent_count(&self) -> usize {
        self.tree.agents
    }

    fn legal_actions(&self, _agent: AgentId) -> ActionList<usize> {
        (0..self.tree.get(self.node).children.len()).collect()
    }

    fn successor(&self, _agent: AgentId, action: &usize) -> Self {
        let child = self.tree.get(self.node).children[*action];
        if let Some(log) = &self.log {
            log.record(child);
        }
        Self {
            tree: self.tree.clone(),
            node: child,
            log: self.log.clone(),
        }
    }

    fn is_win(&self) -> bool {
        self.tree.get(self.node).outcome == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.tree.get(self.node).outcome == Outcome::Lose
    }

    fn score(&self) -> f64 {
        self.tree.get(self.node).score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tree::spec::{branch, leaf, lose, win};

    fn sample() -> GameTree {
        GameTree::from_spec(2, &branch([branch([leaf(3.0), win(12.0)]), lose(-5.0)]))
    }

    #[test]
    fn test_from_spec_is_preorder() {
        let tree = sample();

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.get(NodeId::ROOT).children.as_slice(), &[NodeId(1), NodeId(4)]);
        assert_eq!(tree.get(NodeId(1)).children.as_slice(), &[NodeId(2), NodeId(3)]);
        assert_eq!(tree.get(NodeId(3)).score, 12.0);
    }

    #[test]
    fn test_state_navigation() {
        let tree = sample();
        let root = tree.root_state();

        assert_eq!(root.legal_actions(AgentId::MAXIMIZER).as_slice(), &[0, 1]);

        let lost = root.successor(AgentId::MAXIMIZER, &1);
        assert!(lost.is_lose());
        assert!(!lost.is_win());
        assert_eq!(lost.score(), -5.0);

        let won = root
            .successor(AgentId::MAXIMIZER, &0)
            .successor(AgentId::new(1), &1);
        assert!(won.is_terminal());
        assert_eq!(won.node(), NodeId(3));
    }

    #[test]
    fn test_successor_leaves_parent_untouched() {
        let tree = sample();
        let root = tree.root_state();

        let _ = root.successor(AgentId::MAXIMIZER, &0);
        let _ = root.successor(AgentId::MAXIMIZER, &1);

        assert_eq!(root.node(), NodeId::ROOT);
        assert_eq!(root.legal_actions(AgentId::MAXIMIZER).len(), 2);
    }

    #[test]
    fn test_expansion_log() {
        let tree = sample();
        let (root, log) = tree.traced_root_state();

        let child = root.successor(AgentId::MAXIMIZER, &0);
        let _ = child.successor(AgentId::new(1), &0);

        assert_eq!(log.snapshot(), vec![NodeId(1), NodeId(2)]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_random_is_deterministic() {
        let a = GameTree::random(11, 3, 2, 3);
        let b = GameTree::random(11, 3, 2, 3);

        assert_eq!(a.len(), b.len());
        assert!(a.nodes.iter().zip(b.nodes.iter()).all(|(x, y)| x == y));
    }

    #[test]
    fn test_random_respects_height() {
        fn height(tree: &GameTree, id: NodeId) -> usize {
            tree.get(id)
                .children
                .iter()
                .map(|&c| 1 + height(tree, c))
                .max()
                .unwrap_or(0)
        }

        let tree = GameTree::random(5, 2, 3, 2);
        assert!(height(&tree, NodeId::ROOT) <= 6);
        assert!(!tree.get(NodeId::ROOT).children.is_empty());
    }

    #[test]
    fn test_bincode_round_trip() {
        let tree = sample();
        let bytes = tree.to_bytes().unwrap();
        let decoded = GameTree::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.agent_count(), 2);
        assert_eq!(decoded.len(), tree.len());
        assert_eq!(decoded.get(NodeId(4)), tree.get(NodeId(4)));
    }

    #[test]
    fn test_validate_rejects_dangling_child() {
        let mut tree = sample();
        if let Some(node) = tree.nodes.get_mut(4) {
            node.children.push(NodeId(99));
        }

        assert!(matches!(
            tree.validate(),
            Err(TreeError::DanglingChild { parent: NodeId(4), child: NodeId(99) })
        ));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(GameTree::from_bytes(&[1, 2, 3]).is_err());
    }
}
