//! Property-based tests for the search core
//!
//! These tests use proptest to verify:
//! 1. Named-criterion walks visit every node exactly once
//! 2. A secondary filter never adds matches
//! 3. The primary predicate is plain attribute equality
//! 4. Both walk shapes agree when started from the root

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::prelude::*;
use uidump::search::{matches, matches_primary, traverse, PreOrder, SiblingRuns};
use uidump::{AttributeFilter, Element, SearchCriterion};

const NAMES: [&str; 4] = ["resource-id", "class", "text", "enabled"];
const VALUES: [&str; 3] = ["a", "b", ""];

fn arb_attributes() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NAMES.len(), 0..VALUES.len()), 0..4)
}

fn build_element(attributes: &[(usize, usize)]) -> Element {
    attributes
        .iter()
        .fold(Element::new("node"), |element, &(name, value)| {
            element.with_attribute(NAMES[name], VALUES[value])
        })
}

/// Strategy for generating arbitrary element trees
fn arb_tree() -> impl Strategy<Value = Element> {
    let leaf = arb_attributes().prop_map(|attrs| build_element(&attrs));
    leaf.prop_recursive(5, 48, 4, |inner| {
        (arb_attributes(), prop::collection::vec(inner, 0..4)).prop_map(|(attrs, children)| {
            children
                .into_iter()
                .fold(build_element(&attrs), Element::with_child)
        })
    })
}

fn arb_criterion() -> impl Strategy<Value = SearchCriterion> {
    let value = prop::sample::select(VALUES.to_vec()).prop_map(str::to_string);
    prop_oneof![
        value.clone().prop_map(SearchCriterion::ResourceId),
        value.clone().prop_map(SearchCriterion::ClassName),
        value.clone().prop_map(SearchCriterion::TextValue),
        value.prop_map(|v| SearchCriterion::Attribute(AttributeFilter::new("enabled", v))),
    ]
}

fn arb_filter() -> impl Strategy<Value = AttributeFilter> {
    (0..NAMES.len(), 0..VALUES.len())
        .prop_map(|(name, value)| AttributeFilter::new(NAMES[name], VALUES[value]))
}

proptest! {
    #[test]
    fn named_walk_visits_each_node_once(tree in arb_tree(), criterion in arb_criterion()) {
        let summary = traverse(&tree, &criterion, None, |_| {});
        prop_assert_eq!(summary.visited, tree.subtree_len());
    }

    #[test]
    fn secondary_filter_only_restricts(
        tree in arb_tree(),
        criterion in arb_criterion(),
        filter in arb_filter(),
    ) {
        let mut narrowed = Vec::new();
        traverse(&tree, &criterion, Some(&filter), |e| narrowed.push(e));
        for element in &narrowed {
            prop_assert!(matches(element, &criterion, None));
        }

        let unfiltered = traverse(&tree, &criterion, None, |_| {});
        prop_assert!(narrowed.len() <= unfiltered.matched);
    }

    #[test]
    fn primary_is_attribute_equality(attrs in arb_attributes(), criterion in arb_criterion()) {
        let element = build_element(&attrs);
        let expected = element.attribute(criterion.attribute_name()) == Some(criterion.target());
        prop_assert_eq!(matches_primary(&element, &criterion), expected);
    }

    #[test]
    fn walk_shapes_agree_from_root(tree in arb_tree()) {
        let pre: Vec<&Element> = PreOrder::new(&tree).collect();
        let runs: Vec<&Element> = SiblingRuns::from_root(&tree).collect();
        prop_assert_eq!(pre, runs);
    }
}
