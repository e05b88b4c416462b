//! Error types for uidump

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document could not be read from disk
    Io(String),
    /// The document is not valid UTF-8
    InvalidEncoding,
    /// Malformed markup reported by the XML reader
    Syntax(String),
    MismatchedEndTag { expected: String, found: String },
    UnexpectedEndTag { name: String },
    UnclosedElement { name: String },
    EmptyDocument,
    MultipleRoots,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(message) => write!(f, "failed to read document: {message}"),
            Self::InvalidEncoding => write!(f, "document is not valid utf-8"),
            Self::Syntax(message) => write!(f, "malformed xml: {message}"),
            Self::MismatchedEndTag { expected, found } => {
                write!(f, "mismatched end tag: expected </{expected}>, found </{found}>")
            }
            Self::UnexpectedEndTag { name } => write!(f, "unexpected end tag </{name}>"),
            Self::UnclosedElement { name } => write!(f, "element <{name}> is never closed"),
            Self::EmptyDocument => write!(f, "no root element found"),
            Self::MultipleRoots => write!(f, "multiple root elements"),
        }
    }
}

/// Main error type for uidump
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    position: Option<u64>,
}

impl Error {
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }

    /// Create error at a byte offset in the document
    pub const fn at(kind: ErrorKind, position: u64) -> Self {
        Self {
            kind,
            position: Some(position),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn position(&self) -> Option<u64> {
        self.position
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "error at byte {pos}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::new(ErrorKind::Syntax(format!("attribute error: {err}")))
    }
}

/// Result type alias for uidump
pub type Result<T> = std::result::Result<T, Error>;
