//! Tree validation
//!
//! The queries assume a well-formed tree but never check it. These checks
//! report violations of the structural invariants so loaders can surface
//! them as warnings; they do not change query results.

use std::collections::HashSet;
use std::fmt;

use crate::domain::entities::SpecNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeViolation {
    /// Two nodes share an id
    DuplicateId { id: String },
    /// Depth does not equal parent depth + 1 (or 0 at the root)
    InconsistentDepth {
        id: String,
        expected: usize,
        found: usize,
    },
    /// Children not supplied in non-decreasing index order
    UnorderedChildren {
        parent: String,
        id: String,
        index: u32,
        previous: u32,
    },
}

impl fmt::Display for TreeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeViolation::DuplicateId { id } => write!(f, "duplicate node id '{}'", id),
            TreeViolation::InconsistentDepth {
                id,
                expected,
                found,
            } => write!(
                f,
                "node '{}' has depth {} but sits at depth {}",
                id, found, expected
            ),
            TreeViolation::UnorderedChildren {
                parent,
                id,
                index,
                previous,
            } => write!(
                f,
                "child '{}' of '{}' has index {} after a sibling with index {}",
                id, parent, index, previous
            ),
        }
    }
}

/// All invariant violations, in pre-order
pub fn validate(root: &SpecNode) -> Vec<TreeViolation> {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();
    check(root, 0, &mut seen, &mut violations);
    violations
}

fn check<'a>(
    node: &'a SpecNode,
    expected_depth: usize,
    seen: &mut HashSet<&'a str>,
    violations: &mut Vec<TreeViolation>,
) {
    if !seen.insert(node.id()) {
        violations.push(TreeViolation::DuplicateId {
            id: node.id().to_string(),
        });
    }

    if node.depth() != expected_depth {
        violations.push(TreeViolation::InconsistentDepth {
            id: node.id().to_string(),
            expected: expected_depth,
            found: node.depth(),
        });
    }

    for pair in node.children().windows(2) {
        if pair[1].index() < pair[0].index() {
            violations.push(TreeViolation::UnorderedChildren {
                parent: node.id().to_string(),
                id: pair[1].id().to_string(),
                index: pair[1].index(),
                previous: pair[0].index(),
            });
        }
    }

    for child in node.children() {
        check(child, expected_depth + 1, seen, violations);
    }
}
