//! Tree queries
//!
//! Read-only traversals over a Spec Tree. All functions borrow the tree and
//! return references into it; nothing is cloned or mutated.
//!
//! "Not found" is signalled by an empty result (or `None` for
//! [`find_by_id`]), never by an error. A tree whose root matches yields a
//! one-element path, so callers check emptiness, not length one.

use crate::domain::entities::SpecNode;

/// Pre-order iterator: a node, then each child's subtree in child order
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a SpecNode>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a SpecNode) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a SpecNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Every node of the tree in pre-order, root first
pub fn flatten(root: &SpecNode) -> Vec<&SpecNode> {
    root.iter().collect()
}

/// First node in pre-order whose id matches
pub fn find_by_id<'a>(root: &'a SpecNode, id: &str) -> Option<&'a SpecNode> {
    root.iter().find(|node| node.id() == id)
}

/// All nodes with the given label, in pre-order
pub fn find_by_label<'a>(root: &'a SpecNode, label: &str) -> Vec<&'a SpecNode> {
    root.iter().filter(|node| node.label() == label).collect()
}

/// Nodes from `root` to the target, both inclusive.
///
/// Empty when no node has `target_id`.
pub fn ancestor_path<'a>(root: &'a SpecNode, target_id: &str) -> Vec<&'a SpecNode> {
    let mut path = Vec::new();
    if collect_path(root, target_id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn collect_path<'a>(node: &'a SpecNode, target_id: &str, path: &mut Vec<&'a SpecNode>) -> bool {
    path.push(node);
    if node.id() == target_id {
        return true;
    }
    for child in node.children() {
        if collect_path(child, target_id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Siblings with a lower index than the path node, at every level of the
/// ancestor path.
///
/// Ordered shallowest level first, then by position among the parent's
/// children. Indices are compared explicitly; child order is not assumed to
/// be sorted. No deduplication is performed.
pub fn lower_index_siblings<'a>(root: &'a SpecNode, target_id: &str) -> Vec<&'a SpecNode> {
    let path = ancestor_path(root, target_id);
    path.windows(2)
        .flat_map(|pair| {
            let (parent, on_path) = (pair[0], pair[1]);
            parent
                .children()
                .iter()
                .filter(move |s| s.id() != on_path.id() && s.index() < on_path.index())
        })
        .collect()
}
