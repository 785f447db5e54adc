//! mkvxml core - chapter and tag XML for mkvmerge.
//!
//! Builds the two XML documents mkvmerge consumes when muxing, chapter
//! markers and metadata tags, and parses chapter data back out of the two
//! text forms it meets in the wild: the indentation-coded dump printed by
//! mkvinfo, and previously written chapter XML files.
//!
//! All domain logic lives here with zero CLI dependencies:
//!
//! - [`models`]: the chapter and tag lists and their document shapes
//! - [`dump`]: the mkvinfo dump parser and chapter extraction
//! - [`timecode`]: seconds to display string conversion and back
//! - [`xml`]: document instruction tree and pretty serialization

pub mod dump;
pub mod models;
pub mod timecode;
pub mod xml;

pub use dump::{chapters_from_dump, parse_dump, read_chapters, DumpError, DumpNode};
pub use models::{Chapter, ChapterList, Tag, TagList};
pub use timecode::{format_timecode, parse_timecode, TimecodeError};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
