//! Sample Spec Trees
//!
//! The `spx-cli` product tree in two sizes. Each call builds a fresh value;
//! there is no shared global tree.
//!
//! Internal node states are recorded as authored, not rolled up: the root
//! is recorded `valid` although its rolled-up state is `needs-work`.

use crate::domain::entities::SpecNode;
use crate::domain::value_objects::NodeState::{self, NeedsWork, Stale, Valid};
use crate::domain::value_objects::NodeType::{self, Decision, Enabler, Outcome, Product};

fn node(
    id: &str,
    slug: &str,
    label: &str,
    node_type: NodeType,
    state: NodeState,
    index: u32,
    depth: usize,
) -> SpecNode {
    SpecNode::new(id, slug, label, node_type, state, index, depth)
}

fn root() -> SpecNode {
    node("root", "spx-cli.product.md", "spx-cli", Product, Valid, 0, 0)
        .with_lock_file(false)
        .with_tests(false)
        .with_purpose("CLI tool for managing the Spec Tree")
}

fn test_harness() -> SpecNode {
    node("test-harness", "21-test-harness.enabler/", "test-harness", Enabler, Valid, 21, 1)
        .with_purpose("Shared test utilities and fixtures")
}

fn spx_lock_state() -> SpecNode {
    node("spx-lock-state", "21-spx-lock-state.enabler/", "spx-lock-state", Enabler, Valid, 21, 2)
        .with_purpose("Reads and validates spx-lock.yaml")
}

fn parse_directory_tree() -> SpecNode {
    node(
        "parse-directory-tree",
        "32-parse-directory-tree.enabler/",
        "parse-directory-tree",
        Enabler,
        Valid,
        32,
        1,
    )
    .with_purpose("Walks filesystem to build the tree structure")
}

fn tree_interpretation() -> SpecNode {
    node(
        "tree-interpretation",
        "54-tree-interpretation.outcome/",
        "tree-interpretation",
        Outcome,
        NeedsWork,
        54,
        1,
    )
    .with_lock_file(false)
    .with_purpose("Users can interpret the full tree status at a glance")
}

fn status_rollup() -> SpecNode {
    node("status-rollup", "43-status-rollup.outcome/", "status-rollup", Outcome, Stale, 43, 2)
        .with_lock_file(true)
        .with_purpose("Parent status reflects worst child state")
}

fn spx_tree_status() -> SpecNode {
    node("spx-tree-status", "54-tree-status.outcome/", "spx-tree-status", Outcome, NeedsWork, 54, 2)
        .with_lock_file(false)
        .with_purpose("Full tree status display in terminal")
}

fn e2e_workflow() -> SpecNode {
    node("e2e-workflow", "87-e2e-workflow.outcome/", "e2e-workflow", Outcome, Valid, 87, 1)
        .with_purpose("Complete workflow validates from init to verify")
}

/// The full `spx-cli` tree (18 nodes)
pub fn full() -> SpecNode {
    root().with_children(vec![
        node(
            "pdr-tree-structure",
            "15-tree-structure-contract.pdr.md",
            "tree-structure-contract",
            Decision,
            Valid,
            15,
            1,
        ),
        node("adr-cli-framework", "15-cli-framework.adr.md", "cli-framework", Decision, Valid, 15, 1),
        node(
            "adr-randomized-test",
            "15-randomized-test-generation.adr.md",
            "randomized-test-generation",
            Decision,
            Valid,
            15,
            1,
        ),
        test_harness(),
        node("e2e-harness", "22-e2e-harness.enabler/", "e2e-harness", Enabler, Valid, 22, 1)
            .with_purpose("End-to-end test infrastructure"),
        parse_directory_tree().with_children(vec![
            spx_lock_state(),
            node("test-link-state", "21-test-link-state.enabler/", "test-link-state", Enabler, Valid, 21, 2)
                .with_purpose("Resolves test file associations"),
        ]),
        node("node-status", "43-node-status.enabler/", "node-status", Enabler, Valid, 43, 1)
            .with_purpose("Computes validation state for each node")
            .with_child(
                node(
                    "node-state-machine",
                    "32-node-state-machine.enabler/",
                    "node-state-machine",
                    Enabler,
                    Valid,
                    32,
                    2,
                )
                .with_purpose("State transition logic: valid/stale/needs-work"),
            ),
        tree_interpretation().with_children(vec![
            node(
                "parent-child-links",
                "21-parent-child-links.enabler/",
                "parent-child-links",
                Enabler,
                Valid,
                21,
                2,
            )
            .with_purpose("Resolves parent-child relationships"),
            status_rollup(),
            spx_tree_status(),
        ]),
        node("cli-integration", "76-cli-integration.outcome/", "cli-integration", Outcome, Valid, 76, 1)
            .with_purpose("spx CLI commands work end-to-end"),
        e2e_workflow().with_child(
            node("e2e-validation", "43-e2e-validation.outcome/", "e2e-validation", Outcome, Valid, 43, 2)
                .with_purpose("End-to-end validation passes"),
        ),
    ])
}

/// The simplified tree (9 nodes): every node type and state appears
pub fn simplified() -> SpecNode {
    root().with_children(vec![
        node("adr-cli-framework", "15-cli-framework.adr.md", "cli-framework", Decision, Valid, 15, 1)
            .with_lock_file(false)
            .with_tests(false),
        test_harness(),
        parse_directory_tree().with_child(spx_lock_state()),
        tree_interpretation().with_children(vec![status_rollup(), spx_tree_status()]),
        e2e_workflow(),
    ])
}
