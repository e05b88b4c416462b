//! Entry point that ties criteria, traversal and output together

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::search::options::{SearchOptions, SearchPlan};
use crate::search::project::project;
use crate::search::traverse::{try_traverse, Summary};
use crate::xml::Element;

pub const NO_CRITERIA_NOTICE: &str =
    "No search criteria specified. Use --resource-id, --class, --text, or --filter-attribute <attr=value>.";

pub const NO_MATCHES_NOTICE: &str = "No matching nodes found.";

/// How a run ended. Neither case is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to search for; the usage notice was written
    NoCriteria,
    Searched(Summary),
}

/// Search `root` as `options` ask, writing matches to `out` and notices to `err`.
///
/// Without any usable criterion this writes the usage notice and returns
/// [`Outcome::NoCriteria`] without walking the tree.
#[instrument(level = "debug", skip_all)]
pub fn run<W, E>(
    root: &Element,
    options: &SearchOptions,
    out: &mut W,
    err: &mut E,
) -> io::Result<Outcome>
where
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let Some(plan) = options.plan() else {
        writeln!(err, "{NO_CRITERIA_NOTICE}")?;
        return Ok(Outcome::NoCriteria);
    };

    let summary = execute(root, &plan, out)?;
    if summary.matched == 0 {
        writeln!(err, "{NO_MATCHES_NOTICE}")?;
    }

    Ok(Outcome::Searched(summary))
}

/// Walk the tree for an already resolved plan, projecting every match
pub fn execute<W: Write + ?Sized>(
    root: &Element,
    plan: &SearchPlan,
    out: &mut W,
) -> io::Result<Summary> {
    debug!(
        criterion = %plan.criterion(),
        secondary = ?plan.secondary().map(ToString::to_string),
        "searching"
    );

    let summary = try_traverse(root, plan.criterion(), plan.secondary(), |element| {
        project(element, plan.directive(), &mut *out)
    })?;

    debug!(
        visited = summary.visited,
        matched = summary.matched,
        "search finished"
    );
    Ok(summary)
}
