//! UI dump data model

use indexmap::IndexMap;

/// Parsed UI dump document
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub const fn new(root: Element) -> Self {
        Self { root }
    }

    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// Total number of elements in the document, root included
    pub fn len(&self) -> usize {
        self.root.subtree_len()
    }

    /// A document always has a root, so it is never empty
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Element in a UI dump tree.
///
/// Attributes keep document order so they print the way the dump lists them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute, replacing any earlier value under the same name
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn from_parts(
        name: String,
        attributes: IndexMap<String, String>,
        children: Vec<Self>,
    ) -> Self {
        Self {
            name,
            attributes,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by exact name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Number of elements in this subtree, counting `self`
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(element) = stack.pop() {
            count += 1;
            stack.extend(element.children.iter());
        }
        count
    }
}
