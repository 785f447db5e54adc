//! Document building and serialization.
//!
//! The models describe their output as an [`XmlNode`] instruction tree;
//! this module owns that tree shape and the pretty-printed serialization
//! with the doctype header mkvmerge expects.

mod builder;
mod types;
mod writer;

pub use builder::{Doctype, XmlDocument, XmlNode};
pub use types::{XmlError, XmlResult};
pub use writer::{to_pretty_xml, write_document};
