//! uidump - search Android UI dump XML by attribute
//!
//! A UI dump (as written by `uiautomator dump`) is loaded into an immutable
//! element tree, then searched by `resource-id`, `class`, `text` or any
//! `attr=value` pair. Matches are printed either in full or as a single
//! attribute.
//!
//! # Quick Start
//!
//! ```
//! use uidump::{from_str, run, SearchOptions};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = from_str(r#"<hierarchy><node resource-id="a" text="hi"/></hierarchy>"#)?;
//! let options = SearchOptions::new().resource_id("a").print_only("text");
//!
//! let mut out = Vec::new();
//! run(doc.root(), &options, &mut out, &mut std::io::sink())?;
//! assert_eq!(out, b"text: hi\n");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use std::path::Path;

use tracing::{debug, instrument};

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod xml;
pub use xml::{Document, Element, TreeBuilder};

pub mod search;
pub use search::{
    AttributeFilter, Outcome, PrintDirective, SearchCriterion, SearchOptions, SearchPlan, Summary,
    run,
};

/// Parse a UI dump from a string
pub fn from_str(s: &str) -> Result<Document> {
    let s = s.strip_prefix('\u{feff}').unwrap_or(s);
    TreeBuilder::new(s).build()
}

/// Parse a UI dump from bytes, which must be UTF-8
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(bytes).map_err(|_| Error::new(ErrorKind::InvalidEncoding))?;
    from_str(s)
}

/// Read and parse a UI dump file.
///
/// The whole file is read into memory and the handle released before
/// parsing starts.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    debug!("Opening XML file: {}", path.display());

    let bytes = std::fs::read(path)?;
    let doc = from_bytes(&bytes)?;

    debug!(nodes = doc.len(), "Successfully loaded XML file");
    Ok(doc)
}
