//! Search criteria and attribute filters

use std::fmt;

use crate::xml::Element;

pub const RESOURCE_ID: &str = "resource-id";
pub const CLASS: &str = "class";
pub const TEXT: &str = "text";
pub const BOUNDS: &str = "bounds";

/// Attribute equality test written as `attr=value` on the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeFilter {
    name: String,
    value: String,
}

impl AttributeFilter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Split `attr=value` on the first `=`.
    ///
    /// Returns `None` when the input has no `=` at all. Everything after the
    /// first `=` belongs to the value, so `text=a=b` filters on `a=b`.
    pub fn parse(input: &str) -> Option<Self> {
        let (name, value) = input.split_once('=')?;
        Some(Self::new(name, value))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Both the name and the value are non-empty.
    ///
    /// Incomplete filters never take part in a search.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.value.is_empty()
    }

    pub fn matches(&self, element: &Element) -> bool {
        element.attribute(&self.name) == Some(self.value.as_str())
    }
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Primary search key. Exactly one is active per search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchCriterion {
    ResourceId(String),
    ClassName(String),
    TextValue(String),
    Attribute(AttributeFilter),
}

impl SearchCriterion {
    /// Name of the attribute this criterion probes
    pub fn attribute_name(&self) -> &str {
        match self {
            Self::ResourceId(_) => RESOURCE_ID,
            Self::ClassName(_) => CLASS,
            Self::TextValue(_) => TEXT,
            Self::Attribute(filter) => filter.name(),
        }
    }

    /// Value the probed attribute must equal
    pub fn target(&self) -> &str {
        match self {
            Self::ResourceId(target) | Self::ClassName(target) | Self::TextValue(target) => target,
            Self::Attribute(filter) => filter.value(),
        }
    }
}

impl fmt::Display for SearchCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.attribute_name(), self.target())
    }
}
