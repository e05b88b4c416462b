//! Attribute search over a UI dump tree

pub mod criterion;
pub mod dispatch;
pub mod options;
pub mod predicate;
pub mod project;
pub mod traverse;

pub use criterion::{AttributeFilter, SearchCriterion};
pub use dispatch::{execute, run, Outcome};
pub use options::{SearchOptions, SearchPlan};
pub use predicate::{matches, matches_primary, matches_secondary};
pub use project::{project, PrintDirective};
pub use traverse::{traverse, try_traverse, PreOrder, SiblingRuns, Summary, Walk};
