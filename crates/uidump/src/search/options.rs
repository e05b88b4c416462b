//! Search configuration and its resolution into a plan

use crate::search::criterion::{AttributeFilter, SearchCriterion};
use crate::search::project::PrintDirective;

/// Raw search settings, as collected from the command line.
///
/// Empty strings count as "not given".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub resource_id: Option<String>,
    pub class_name: Option<String>,
    pub text: Option<String>,
    pub filter: Option<AttributeFilter>,
    pub print_only: Option<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: AttributeFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn print_only(mut self, attribute: impl Into<String>) -> Self {
        self.print_only = Some(attribute.into());
        self
    }

    /// Resolve the primary criterion.
    ///
    /// Priority is resource-id, class, text, then the attribute filter. The
    /// filter only becomes primary when none of the others is set; otherwise
    /// it narrows the primary match. `None` means there is nothing to search
    /// for.
    pub fn plan(&self) -> Option<SearchPlan> {
        let filter = self.filter.as_ref().filter(|f| f.is_complete()).cloned();

        let named = given(self.resource_id.as_ref())
            .map(SearchCriterion::ResourceId)
            .or_else(|| given(self.class_name.as_ref()).map(SearchCriterion::ClassName))
            .or_else(|| given(self.text.as_ref()).map(SearchCriterion::TextValue));

        let (criterion, secondary) = match named {
            Some(criterion) => (criterion, filter),
            None => (SearchCriterion::Attribute(filter?), None),
        };

        Some(SearchPlan {
            criterion,
            secondary,
            directive: PrintDirective::from_attribute(self.print_only.as_deref()),
        })
    }
}

fn given(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Resolved search: one primary criterion, an optional narrowing filter and
/// the output rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPlan {
    criterion: SearchCriterion,
    secondary: Option<AttributeFilter>,
    directive: PrintDirective,
}

impl SearchPlan {
    pub fn new(
        criterion: SearchCriterion,
        secondary: Option<AttributeFilter>,
        directive: PrintDirective,
    ) -> Self {
        Self {
            criterion,
            secondary,
            directive,
        }
    }

    pub fn criterion(&self) -> &SearchCriterion {
        &self.criterion
    }

    pub fn secondary(&self) -> Option<&AttributeFilter> {
        self.secondary.as_ref()
    }

    pub fn directive(&self) -> &PrintDirective {
        &self.directive
    }
}
