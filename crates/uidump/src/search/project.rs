//! Rendering of matched elements

use std::io::{self, Write};

use tracing::debug;

use crate::xml::Element;

/// What to print for each matched element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PrintDirective {
    /// Tag name followed by every attribute
    #[default]
    All,
    /// A single named attribute
    Only(String),
}

impl PrintDirective {
    /// An absent or empty attribute name means "print everything"
    pub fn from_attribute(name: Option<&str>) -> Self {
        match name {
            Some(name) if !name.is_empty() => Self::Only(name.to_string()),
            _ => Self::All,
        }
    }
}

/// Write `element` to `out` as `directive` asks.
///
/// A missing attribute produces a notice line instead of an error; the only
/// failure is the writer's.
pub fn project<W: Write + ?Sized>(
    element: &Element,
    directive: &PrintDirective,
    out: &mut W,
) -> io::Result<()> {
    debug!("Processing node: {}", element.name());

    match directive {
        PrintDirective::Only(name) => match element.attribute(name) {
            Some(value) => writeln!(out, "{name}: {value}"),
            None => writeln!(
                out,
                "Attribute '{name}' not found on node {}",
                element.name()
            ),
        },
        PrintDirective::All => {
            writeln!(out, "Node: {}", element.name())?;
            for (name, value) in element.attributes() {
                writeln!(out, "  {name}: {value}")?;
            }
            if !element.has_attributes() {
                writeln!(out, "  No attributes found for node: {}", element.name())?;
            }
            writeln!(out)
        }
    }
}
