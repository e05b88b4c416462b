//! Per-element match tests

use crate::search::criterion::{AttributeFilter, SearchCriterion};
use crate::xml::Element;

/// The element carries the criterion's attribute with exactly the target value.
///
/// Comparison is byte-for-byte: no case folding, trimming or partial matches.
pub fn matches_primary(element: &Element, criterion: &SearchCriterion) -> bool {
    element.attribute(criterion.attribute_name()) == Some(criterion.target())
}

/// Always true without a secondary filter
pub fn matches_secondary(element: &Element, secondary: Option<&AttributeFilter>) -> bool {
    secondary.is_none_or(|filter| filter.matches(element))
}

pub fn matches(
    element: &Element,
    criterion: &SearchCriterion,
    secondary: Option<&AttributeFilter>,
) -> bool {
    matches_primary(element, criterion) && matches_secondary(element, secondary)
}
