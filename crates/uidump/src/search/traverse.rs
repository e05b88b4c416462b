//! Depth-first walks over an element tree
//!
//! Both walks keep their state on an explicit stack, so deeply nested dumps
//! cannot overflow the call stack.

use std::convert::Infallible;
use std::slice;

use crate::search::criterion::{AttributeFilter, SearchCriterion};
use crate::search::predicate;
use crate::xml::Element;

/// Node counts from one traversal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub visited: usize,
    pub matched: usize,
}

/// Pre-order walk: a node, then each of its children's subtrees in order.
#[derive(Clone, Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Element>,
    visited: usize,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a Element) -> Self {
        Self {
            stack: vec![root],
            visited: 0,
        }
    }

    pub const fn visited(&self) -> usize {
        self.visited
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children().iter().rev());
        self.visited += 1;
        Some(element)
    }
}

/// Walk over a run of siblings.
///
/// Each sibling is yielded, then its children are walked as a run of their
/// own, then the walk moves on to the next sibling. Started from a
/// single-element run this yields the same order as [`PreOrder`].
#[derive(Clone, Debug)]
pub struct SiblingRuns<'a> {
    runs: Vec<slice::Iter<'a, Element>>,
    visited: usize,
}

impl<'a> SiblingRuns<'a> {
    /// Start at the first element of `run` and chase the rest as its siblings
    pub fn new(run: &'a [Element]) -> Self {
        Self {
            runs: vec![run.iter()],
            visited: 0,
        }
    }

    /// A document root has no siblings, so its run is the root alone
    pub fn from_root(root: &'a Element) -> Self {
        Self::new(slice::from_ref(root))
    }

    pub const fn visited(&self) -> usize {
        self.visited
    }
}

impl<'a> Iterator for SiblingRuns<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let run = self.runs.last_mut()?;
            match run.next() {
                Some(element) => {
                    self.visited += 1;
                    self.runs.push(element.children().iter());
                    return Some(element);
                }
                None => {
                    self.runs.pop();
                }
            }
        }
    }
}

/// Walk shape used for a criterion.
///
/// Attribute-filter searches chase sibling runs; the named criteria use a
/// plain pre-order walk.
#[derive(Clone, Debug)]
pub enum Walk<'a> {
    PreOrder(PreOrder<'a>),
    SiblingRuns(SiblingRuns<'a>),
}

impl<'a> Walk<'a> {
    pub fn for_criterion(root: &'a Element, criterion: &SearchCriterion) -> Self {
        match criterion {
            SearchCriterion::Attribute(_) => Self::SiblingRuns(SiblingRuns::from_root(root)),
            SearchCriterion::ResourceId(_)
            | SearchCriterion::ClassName(_)
            | SearchCriterion::TextValue(_) => Self::PreOrder(PreOrder::new(root)),
        }
    }

    pub const fn visited(&self) -> usize {
        match self {
            Self::PreOrder(walk) => walk.visited(),
            Self::SiblingRuns(walk) => walk.visited(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::PreOrder(walk) => walk.next(),
            Self::SiblingRuns(walk) => walk.next(),
        }
    }
}

/// Visit every node under `root`, passing each match to `emit`.
///
/// The walk never skips a subtree. It only stops early when `emit` fails.
pub fn try_traverse<'a, F, E>(
    root: &'a Element,
    criterion: &SearchCriterion,
    secondary: Option<&AttributeFilter>,
    mut emit: F,
) -> Result<Summary, E>
where
    F: FnMut(&'a Element) -> Result<(), E>,
{
    let mut walk = Walk::for_criterion(root, criterion);
    let mut matched = 0;

    for element in walk.by_ref() {
        if predicate::matches(element, criterion, secondary) {
            matched += 1;
            emit(element)?;
        }
    }

    Ok(Summary {
        visited: walk.visited(),
        matched,
    })
}

/// Infallible form of [`try_traverse`]
pub fn traverse<'a, F>(
    root: &'a Element,
    criterion: &SearchCriterion,
    secondary: Option<&AttributeFilter>,
    mut emit: F,
) -> Summary
where
    F: FnMut(&'a Element),
{
    let result: Result<Summary, Infallible> = try_traverse(root, criterion, secondary, |element| {
        emit(element);
        Ok(())
    });
    match result {
        Ok(summary) => summary,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(index: &str) -> Element {
        Element::new("node").with_attribute("index", index)
    }

    fn sample() -> Element {
        Element::new("hierarchy")
            .with_child(
                node("0")
                    .with_child(node("0.0").with_child(node("0.0.0")))
                    .with_child(node("0.1")),
            )
            .with_child(node("1"))
    }

    fn indexes<'a>(walk: impl Iterator<Item = &'a Element>) -> Vec<&'a str> {
        walk.map(|e| e.attribute("index").unwrap_or("root")).collect()
    }

    #[test]
    fn test_pre_order_visits_document_order() {
        let tree = sample();
        let mut walk = PreOrder::new(&tree);
        let order = indexes(walk.by_ref());
        assert_eq!(order, vec!["root", "0", "0.0", "0.0.0", "0.1", "1"]);
        assert_eq!(walk.visited(), 6);
    }

    #[test]
    fn test_sibling_runs_match_pre_order_from_root() {
        let tree = sample();
        let pre: Vec<_> = PreOrder::new(&tree).collect();
        let runs: Vec<_> = SiblingRuns::from_root(&tree).collect();
        assert_eq!(pre, runs);
    }

    #[test]
    fn test_sibling_runs_chase_following_siblings() {
        let tree = sample();
        let children = tree.children();
        let order = indexes(SiblingRuns::new(children));
        assert_eq!(order, vec!["0", "0.0", "0.0.0", "0.1", "1"]);

        let tail = children.get(1..).unwrap_or_default();
        assert_eq!(indexes(SiblingRuns::new(tail)), vec!["1"]);
    }

    #[test]
    fn test_sibling_runs_empty_run() {
        let mut walk = SiblingRuns::new(&[]);
        assert_eq!(walk.next(), None);
        assert_eq!(walk.visited(), 0);
    }

    #[test]
    fn test_traverse_emits_matches_and_counts_all_nodes() {
        let tree = Element::new("hierarchy")
            .with_child(Element::new("node").with_attribute("text", "hi"))
            .with_child(
                Element::new("node")
                    .with_attribute("text", "lo")
                    .with_child(Element::new("node").with_attribute("text", "hi")),
            );
        let criterion = SearchCriterion::TextValue("hi".into());

        let mut seen = 0;
        let summary = traverse(&tree, &criterion, None, |_| seen += 1);

        assert_eq!(seen, 2);
        assert_eq!(summary, Summary { visited: 4, matched: 2 });
    }

    #[test]
    fn test_traverse_root_can_match() {
        let tree = Element::new("node").with_attribute("class", "android.widget.FrameLayout");
        let criterion = SearchCriterion::ClassName("android.widget.FrameLayout".into());
        let summary = traverse(&tree, &criterion, None, |_| {});
        assert_eq!(summary.matched, 1);
    }

    #[test]
    fn test_try_traverse_propagates_emit_error() {
        let tree = sample();
        let criterion = SearchCriterion::Attribute(AttributeFilter::new("index", "0.1"));
        let result: Result<Summary, &str> = try_traverse(&tree, &criterion, None, |_| Err("closed"));
        assert_eq!(result, Err("closed"));
    }
}
