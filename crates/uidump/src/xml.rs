//! UI dump document model and loader

pub mod model;
pub mod reader;

pub use model::{Document, Element};
pub use reader::TreeBuilder;
