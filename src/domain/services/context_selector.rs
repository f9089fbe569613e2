//! Context selection
//!
//! The context for a node is its ancestor path plus the lower-index siblings
//! at every level of that path. No search, no scoring: the set is a pure
//! function of tree position and sibling indices.

use std::collections::BTreeSet;

use crate::domain::entities::SpecNode;

use super::tree_query::{ancestor_path, lower_index_siblings};

/// Context for one target node, kept as two groups for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSet<'a> {
    /// Root to target, inclusive
    pub on_path: Vec<&'a SpecNode>,
    /// Lower-index siblings, shallowest level first
    pub siblings: Vec<&'a SpecNode>,
}

impl<'a> ContextSet<'a> {
    /// The target node, when it was found
    pub fn target(&self) -> Option<&'a SpecNode> {
        self.on_path.last().copied()
    }

    /// Distinct node ids in the context
    pub fn ids(&self) -> BTreeSet<&'a str> {
        self.on_path
            .iter()
            .chain(self.siblings.iter())
            .map(|node| node.id())
            .collect()
    }

    /// Path nodes then siblings, skipping ids already yielded
    pub fn nodes(&self) -> Vec<&'a SpecNode> {
        let mut seen = BTreeSet::new();
        self.on_path
            .iter()
            .chain(self.siblings.iter())
            .copied()
            .filter(|node| seen.insert(node.id()))
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.on_path
            .iter()
            .chain(self.siblings.iter())
            .any(|node| node.id() == id)
    }

    /// Number of distinct nodes
    pub fn len(&self) -> usize {
        self.ids().len()
    }

    /// True when the target id was not found
    pub fn is_empty(&self) -> bool {
        self.on_path.is_empty()
    }
}

/// Context set for `target_id`; empty when the id is not in the tree
pub fn context_set<'a>(root: &'a SpecNode, target_id: &str) -> ContextSet<'a> {
    ContextSet {
        on_path: ancestor_path(root, target_id),
        siblings: lower_index_siblings(root, target_id),
    }
}
