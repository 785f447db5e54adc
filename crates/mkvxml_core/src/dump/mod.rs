//! mkvinfo dump parsing.
//!
//! The dump is a flat, line-oriented rendering of the container tree. This
//! module rebuilds the tree (`tree`), extracts chapter data from it
//! (`chapters`), and drives the external tool that produces it (`mkvinfo`).

mod chapters;
mod mkvinfo;
mod tree;
mod types;

pub use chapters::chapters_from_dump;
pub use mkvinfo::{read_chapters, read_dump, DEFAULT_TOOL};
pub use tree::parse_dump;
pub use types::{ChapterField, DumpError, DumpNode, DumpResult};
