//! Random Spec Tree generation.

use proptest::prelude::*;

use spec_tree::{NodeState, NodeType, SpecNode};

/// One non-root node: which earlier node is its parent, its sibling index,
/// and its authored state
type NodeSpec = (usize, u32, NodeState);

pub fn node_state() -> impl Strategy<Value = NodeState> {
    prop::sample::select(NodeState::ALL.to_vec())
}

/// Trees of 1..=40 nodes with ids `n0` (root) to `nN`.
///
/// Sibling indices are random and may repeat or arrive out of order, so
/// nothing may rely on child position.
pub fn arb_tree() -> impl Strategy<Value = SpecNode> {
    (
        node_state(),
        prop::collection::vec((any::<usize>(), 0u32..100, node_state()), 0..40),
    )
        .prop_map(|(root_state, nodes)| build_tree(root_state, &nodes))
}

fn build_tree(root_state: NodeState, nodes: &[NodeSpec]) -> SpecNode {
    let count = nodes.len() + 1;
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut depth = vec![0usize; count];

    for (i, (parent_pick, _, _)) in nodes.iter().enumerate() {
        let id = i + 1;
        let parent = parent_pick % id;
        depth[id] = depth[parent] + 1;
        children[parent].push(id);
    }

    build_node(0, root_state, nodes, &children, &depth)
}

fn build_node(
    id: usize,
    state: NodeState,
    nodes: &[NodeSpec],
    children: &[Vec<usize>],
    depth: &[usize],
) -> SpecNode {
    let (node_type, index) = if id == 0 {
        (NodeType::Product, 0)
    } else {
        (NodeType::Outcome, nodes[id - 1].1)
    };
    let name = format!("n{}", id);

    SpecNode::new(name.as_str(), name.as_str(), name.as_str(), node_type, state, index, depth[id])
        .with_children(
            children[id]
                .iter()
                .map(|&child| build_node(child, nodes[child - 1].2, nodes, children, depth))
                .collect(),
        )
}
