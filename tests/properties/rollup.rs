//! Property tests for status rollup.

use proptest::prelude::*;

use spec_tree::{effective_state, flatten, rolled_up, NodeState, StateCounts};

use crate::arbitrary_tree::arb_tree;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a parent is needs-work if any child is, else stale if any
    /// child is, else valid.
    #[test]
    fn property_rollup_worst_wins(tree in arb_tree()) {
        for node in flatten(&tree).into_iter().filter(|n| !n.is_leaf()) {
            let child_states: Vec<NodeState> =
                node.children().iter().map(effective_state).collect();

            let expected = if child_states.contains(&NodeState::NeedsWork) {
                NodeState::NeedsWork
            } else if child_states.contains(&NodeState::Stale) {
                NodeState::Stale
            } else {
                NodeState::Valid
            };
            prop_assert_eq!(effective_state(node), expected, "node {}", node.id());
        }
    }

    /// PROPERTY: a childless node keeps its authored state.
    #[test]
    fn property_leaf_stability(tree in arb_tree()) {
        for node in flatten(&tree).into_iter().filter(|n| n.is_leaf()) {
            prop_assert_eq!(effective_state(node), node.state());
        }
    }

    /// PROPERTY: rolled_up only rewrites states, matching effective_state
    /// node for node, and leaves the input untouched.
    #[test]
    fn property_rolled_up_matches_effective_state(tree in arb_tree()) {
        let snapshot = tree.clone();
        let rolled = rolled_up(&tree);

        prop_assert_eq!(&tree, &snapshot);

        let before = flatten(&tree);
        let after = flatten(&rolled);
        prop_assert_eq!(before.len(), after.len());
        for (original, updated) in before.iter().zip(after.iter()) {
            prop_assert_eq!(original.id(), updated.id());
            prop_assert_eq!(original.index(), updated.index());
            prop_assert_eq!(original.depth(), updated.depth());
            prop_assert_eq!(updated.state(), effective_state(original));
        }

        prop_assert_eq!(rolled_up(&rolled), rolled);
    }

    /// PROPERTY: state counts cover every node exactly once.
    #[test]
    fn property_state_counts_total(tree in arb_tree()) {
        let counts = StateCounts::of_tree(&tree);
        prop_assert_eq!(counts.total(), flatten(&tree).len());
    }
}
