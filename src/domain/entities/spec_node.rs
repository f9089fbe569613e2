//! SpecNode entity - one node of the Spec Tree
//!
//! Nodes are built once and never mutated afterwards. A changed spec is
//! represented by building a new tree. Parents own their children outright;
//! there are no back-references, every query takes the root explicitly.
//!
//! Construction does not validate tree invariants (unique ids, consistent
//! depth). See [`crate::domain::services::validate`] for optional checks.

use serde::Serialize;

use crate::domain::services::PreOrder;
use crate::domain::value_objects::{NodeState, NodeType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecNode {
    id: String,
    slug: String,
    label: String,
    #[serde(rename = "type")]
    node_type: NodeType,
    state: NodeState,
    index: u32,
    depth: usize,
    has_lock_file: bool,
    has_tests: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    purpose: Option<String>,
    children: Vec<SpecNode>,
}

impl SpecNode {
    /// Create a childless node.
    ///
    /// `has_lock_file` defaults to `state == Valid` and `has_tests` to
    /// whether the type supports tests; override with `with_lock_file` /
    /// `with_tests`.
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        label: impl Into<String>,
        node_type: NodeType,
        state: NodeState,
        index: u32,
        depth: usize,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            label: label.into(),
            node_type,
            state,
            index,
            depth,
            has_lock_file: state == NodeState::Valid,
            has_tests: node_type.supports_tests(),
            purpose: None,
            children: Vec::new(),
        }
    }

    pub fn with_lock_file(mut self, has_lock_file: bool) -> Self {
        self.has_lock_file = has_lock_file;
        self
    }

    pub fn with_tests(mut self, has_tests: bool) -> Self {
        self.has_tests = has_tests;
        self
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Replace the children. Order is kept as given.
    pub fn with_children(mut self, children: Vec<SpecNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: SpecNode) -> Self {
        self.children.push(child);
        self
    }

    /// Copy with a different recorded state; used when rolling states up
    pub(crate) fn with_state(mut self, state: NodeState) -> Self {
        self.state = state;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Recorded state. For internal nodes this is a cached value; use
    /// [`crate::domain::services::effective_state`] for the rolled-up one.
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Ordering key among siblings only
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn has_lock_file(&self) -> bool {
        self.has_lock_file
    }

    pub fn has_tests(&self) -> bool {
        self.has_tests
    }

    pub fn purpose(&self) -> Option<&str> {
        self.purpose.as_deref()
    }

    pub fn children(&self) -> &[SpecNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order traversal starting at this node
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }
}
