//! Status rollup
//!
//! A parent's state is the worst effective state among its children
//! (`needs-work` > `stale` > `valid`). Leaves keep their authored state.
//! States recorded on internal nodes are treated as a cache that rollup
//! overwrites.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::SpecNode;
use crate::domain::value_objects::NodeState;

/// Effective state of `node`, computed bottom-up from its leaves
pub fn effective_state(node: &SpecNode) -> NodeState {
    node.children()
        .iter()
        .map(effective_state)
        .max()
        .unwrap_or_else(|| node.state())
}

/// Copy of the tree with every internal node's state replaced by its
/// effective state. All other fields are preserved.
pub fn rolled_up(root: &SpecNode) -> SpecNode {
    if root.is_leaf() {
        return root.clone();
    }

    let children: Vec<SpecNode> = root.children().iter().map(rolled_up).collect();
    let state = children
        .iter()
        .map(SpecNode::state)
        .max()
        .unwrap_or_else(|| root.state());

    root.clone().with_children(children).with_state(state)
}

/// An internal node whose recorded state disagrees with its rollup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupDrift {
    pub id: String,
    pub recorded: NodeState,
    pub effective: NodeState,
}

/// Internal nodes whose recorded state is out of date, in pre-order
pub fn rollup_drift(root: &SpecNode) -> Vec<RollupDrift> {
    root.iter()
        .filter(|node| !node.is_leaf())
        .filter_map(|node| {
            let effective = effective_state(node);
            (effective != node.state()).then(|| RollupDrift {
                id: node.id().to_string(),
                recorded: node.state(),
                effective,
            })
        })
        .collect()
}

/// Number of nodes in each state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StateCounts {
    pub valid: usize,
    pub stale: usize,
    pub needs_work: usize,
}

impl StateCounts {
    /// Count recorded states over the whole tree
    pub fn of_tree(root: &SpecNode) -> Self {
        root.iter().fold(Self::default(), |mut counts, node| {
            counts.add(node.state());
            counts
        })
    }

    pub fn add(&mut self, state: NodeState) {
        match state {
            NodeState::Valid => self.valid += 1,
            NodeState::Stale => self.stale += 1,
            NodeState::NeedsWork => self.needs_work += 1,
        }
    }

    pub fn get(&self, state: NodeState) -> usize {
        match state {
            NodeState::Valid => self.valid,
            NodeState::Stale => self.stale,
            NodeState::NeedsWork => self.needs_work,
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.stale + self.needs_work
    }

    /// Non-zero counts keyed by state, for compact reporting
    pub fn non_zero(&self) -> BTreeMap<NodeState, usize> {
        NodeState::ALL
            .into_iter()
            .map(|state| (state, self.get(state)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
