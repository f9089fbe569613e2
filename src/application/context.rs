//! Context use case
//!
//! Resolves a target node and reports its deterministic context: the
//! ancestor path and the lower-index siblings along it.

use serde::Serialize;

use crate::domain::entities::SpecNode;
use crate::domain::ports::TreeSource;
use crate::domain::services::{context_set, find_by_id, find_by_label, rolled_up};
use crate::error::SpecTreeResult;

use super::NodeSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextOptions {
    /// Report rolled-up states for path nodes
    pub rollup: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self { rollup: true }
    }
}

/// Result of a context query
#[derive(Debug, Clone, Serialize)]
pub struct ContextResult {
    /// What the caller asked for (id or label)
    pub query: String,
    pub target: Option<NodeSummary>,
    /// Root to target, inclusive
    pub path: Vec<NodeSummary>,
    /// Lower-index siblings, shallowest level first
    pub siblings: Vec<NodeSummary>,
    pub warnings: Vec<String>,
    /// Where the tree came from
    pub source: String,
}

impl ContextResult {
    pub fn found(&self) -> bool {
        self.target.is_some()
    }

    /// Number of distinct nodes in the context
    pub fn len(&self) -> usize {
        let mut ids: Vec<&str> = self
            .path
            .iter()
            .chain(self.siblings.iter())
            .map(|node| node.id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// How a query string mapped onto the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetResolution<'a> {
    Found(&'a SpecNode),
    /// Several nodes share the label; ids listed in pre-order
    Ambiguous(Vec<&'a str>),
    NotFound,
}

/// Resolve by id first, then by label when exactly one node carries it
pub fn resolve_target<'a>(root: &'a SpecNode, query: &str) -> TargetResolution<'a> {
    if let Some(node) = find_by_id(root, query) {
        return TargetResolution::Found(node);
    }
    match find_by_label(root, query).as_slice() {
        [] => TargetResolution::NotFound,
        [node] => TargetResolution::Found(node),
        many => TargetResolution::Ambiguous(many.iter().map(|node| node.id()).collect()),
    }
}

pub struct ContextUseCase<S> {
    source: S,
}

impl<S: TreeSource> ContextUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn execute(
        &self,
        query: &str,
        options: &ContextOptions,
    ) -> SpecTreeResult<ContextResult> {
        let loaded = self.source.load()?;
        let tree = if options.rollup {
            rolled_up(&loaded)
        } else {
            loaded
        };
        Ok(ContextResult {
            source: self.source.describe(),
            ..build_result(&tree, query)
        })
    }
}

fn build_result(tree: &SpecNode, query: &str) -> ContextResult {
    let mut result = ContextResult {
        query: query.to_string(),
        target: None,
        path: Vec::new(),
        siblings: Vec::new(),
        warnings: Vec::new(),
        source: String::new(),
    };

    let target = match resolve_target(tree, query) {
        TargetResolution::Found(node) => node,
        TargetResolution::Ambiguous(ids) => {
            result.warnings.push(format!(
                "label '{}' matches {} nodes: {}",
                query,
                ids.len(),
                ids.join(", ")
            ));
            return result;
        }
        TargetResolution::NotFound => return result,
    };

    let context = context_set(tree, target.id());
    result.target = Some(NodeSummary::from(target));
    result.path = context.on_path.iter().copied().map(NodeSummary::from).collect();
    result.siblings = context.siblings.iter().copied().map(NodeSummary::from).collect();
    result
}
