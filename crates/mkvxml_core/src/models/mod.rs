//! In-memory chapter and tag models.

mod chapters;
mod tags;

pub use chapters::{Chapter, ChapterList, CHAPTER_LANGUAGE};
pub use tags::{Tag, TagList, TAG_LANGUAGE};
