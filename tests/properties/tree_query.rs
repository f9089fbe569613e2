//! Property tests for ancestor paths, sibling selection and context sets.

use proptest::prelude::*;

use spec_tree::{ancestor_path, context_set, find_by_id, flatten, lower_index_siblings};

use crate::arbitrary_tree::arb_tree;

fn ids<'a>(nodes: &[&'a spec_tree::SpecNode]) -> Vec<&'a str> {
    nodes.iter().map(|n| n.id()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the path runs root to target along parent->child edges and
    /// has depth + 1 nodes.
    #[test]
    fn property_ancestor_path_correct(tree in arb_tree()) {
        for node in flatten(&tree) {
            let path = ancestor_path(&tree, node.id());

            prop_assert_eq!(path.len(), node.depth() + 1);
            prop_assert_eq!(path[0].id(), tree.id());
            prop_assert_eq!(path[path.len() - 1].id(), node.id());
            for pair in path.windows(2) {
                prop_assert!(pair[0].children().iter().any(|c| c.id() == pair[1].id()));
            }
        }
    }

    /// PROPERTY: unknown ids give empty results everywhere.
    #[test]
    fn property_not_found_is_empty(tree in arb_tree()) {
        prop_assert!(find_by_id(&tree, "nonexistent-id").is_none());
        prop_assert!(ancestor_path(&tree, "nonexistent-id").is_empty());
        prop_assert!(lower_index_siblings(&tree, "nonexistent-id").is_empty());
        prop_assert!(context_set(&tree, "nonexistent-id").is_empty());
        prop_assert_eq!(context_set(&tree, "nonexistent-id").len(), 0);
    }

    /// PROPERTY: every selected sibling hangs off the path, is not on it,
    /// and has a lower index than the path node at its level.
    #[test]
    fn property_sibling_filter_correct(tree in arb_tree()) {
        for target in flatten(&tree) {
            let path = ancestor_path(&tree, target.id());
            let path_ids = ids(&path);

            for sibling in lower_index_siblings(&tree, target.id()) {
                prop_assert!(!path_ids.contains(&sibling.id()));
                let anchored = path.windows(2).any(|pair| {
                    pair[0].children().iter().any(|c| c.id() == sibling.id())
                        && sibling.index() < pair[1].index()
                });
                prop_assert!(anchored, "sibling {} of {}", sibling.id(), target.id());
            }
        }
    }

    /// PROPERTY: nothing that qualifies is left out.
    #[test]
    fn property_sibling_filter_complete(tree in arb_tree()) {
        for target in flatten(&tree) {
            let path = ancestor_path(&tree, target.id());
            let expected: usize = path
                .windows(2)
                .map(|pair| {
                    pair[0]
                        .children()
                        .iter()
                        .filter(|c| c.id() != pair[1].id() && c.index() < pair[1].index())
                        .count()
                })
                .sum();
            prop_assert_eq!(lower_index_siblings(&tree, target.id()).len(), expected);
        }
    }

    /// PROPERTY: the context set is exactly path plus siblings.
    #[test]
    fn property_context_set_is_union(tree in arb_tree()) {
        for target in flatten(&tree) {
            let context = context_set(&tree, target.id());
            let mut expected: Vec<&str> = ids(&ancestor_path(&tree, target.id()));
            expected.extend(ids(&lower_index_siblings(&tree, target.id())));
            expected.sort_unstable();
            expected.dedup();

            prop_assert_eq!(context.ids().into_iter().collect::<Vec<_>>(), expected);
            prop_assert_eq!(context.target().map(|n| n.id()), Some(target.id()));
        }
    }

    /// PROPERTY: queries on an unchanged tree are repeatable.
    #[test]
    fn property_queries_idempotent(tree in arb_tree()) {
        prop_assert_eq!(flatten(&tree), flatten(&tree));
        for node in flatten(&tree) {
            prop_assert_eq!(ancestor_path(&tree, node.id()), ancestor_path(&tree, node.id()));
            prop_assert_eq!(
                lower_index_siblings(&tree, node.id()),
                lower_index_siblings(&tree, node.id())
            );
            prop_assert_eq!(
                context_set(&tree, node.id()).ids(),
                context_set(&tree, node.id()).ids()
            );
        }
    }
}
