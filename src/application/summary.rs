//! Node summaries
//!
//! Flat, owned views of nodes for reporting; children are not included.

use serde::Serialize;

use crate::domain::entities::SpecNode;
use crate::domain::value_objects::{NodeState, NodeType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub id: String,
    pub slug: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub state: NodeState,
    pub index: u32,
    pub depth: usize,
}

impl From<&SpecNode> for NodeSummary {
    fn from(node: &SpecNode) -> Self {
        Self {
            id: node.id().to_string(),
            slug: node.slug().to_string(),
            label: node.label().to_string(),
            node_type: node.node_type(),
            state: node.state(),
            index: node.index(),
            depth: node.depth(),
        }
    }
}
