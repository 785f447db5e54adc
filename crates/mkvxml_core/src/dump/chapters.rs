//! Chapter extraction from a parsed dump tree.
//!
//! Locates the Segment, then its Chapters section, then the single edition
//! grouping, and pulls the track number, start time, and title out of each
//! chapter atom.

use crate::models::{Chapter, ChapterList};

use super::types::{ChapterField, DumpError, DumpNode, DumpResult};

/// Label prefix of the root node that carries the segment contents.
const SEGMENT_PREFIX: &str = "Segment";
/// Label of the chapters section inside the segment.
const CHAPTERS_LABEL: &str = "Chapters";
/// Label prefix of one chapter entry inside the edition grouping.
const ATOM_PREFIX: &str = "Chapter atom";

/// Extract the chapter list from a parsed dump forest.
///
/// Only the first chapters section is read. Every atom must carry all three
/// of track number, start time, and title; a missing field fails the whole
/// extraction.
pub fn chapters_from_dump(roots: &[DumpNode]) -> DumpResult<ChapterList> {
    let edition = find_edition(roots).ok_or(DumpError::ChaptersNotFound)?;

    let mut list = ChapterList::new();
    let atoms = edition
        .children
        .iter()
        .filter(|n| n.label.starts_with(ATOM_PREFIX));
    for (idx, atom) in atoms.enumerate() {
        list.push(read_atom(atom, idx + 1)?);
    }

    tracing::debug!("extracted {} chapters from dump", list.len());
    Ok(list)
}

/// Walk Segment, Chapters, first grouping.
fn find_edition(roots: &[DumpNode]) -> Option<&DumpNode> {
    let segment = roots.iter().find(|n| n.label.starts_with(SEGMENT_PREFIX))?;
    let chapters = segment
        .children
        .iter()
        .find(|n| n.label == CHAPTERS_LABEL)?;
    chapters.children.first()
}

/// Read the (number, start time, title) triple out of one chapter atom.
///
/// The start time is a direct child; the track number and title sit one
/// level down, under the "Chapter track" and "Chapter display" sub-sections.
/// The first match per field wins.
fn read_atom(atom: &DumpNode, entry: usize) -> DumpResult<Chapter> {
    let mut number: Option<u32> = None;
    let mut start_time: Option<&str> = None;
    let mut title: Option<&str> = None;

    for node in atom.children.iter().flat_map(with_children) {
        if start_time.is_none() {
            start_time = node.value_of("Chapter time start");
        }
        if number.is_none() {
            number = node
                .value_of("Chapter track number")
                .and_then(|v| v.parse().ok());
        }
        if title.is_none() {
            title = node.value_of("Chapter string");
        }
    }

    let missing = |field| DumpError::MissingField { entry, field };
    Ok(Chapter {
        number: number.ok_or_else(|| missing(ChapterField::Number))?,
        start_time: start_time
            .ok_or_else(|| missing(ChapterField::StartTime))?
            .to_string(),
        title: title.ok_or_else(|| missing(ChapterField::Title))?.to_string(),
    })
}

/// A child together with its own children: field values may be nested one
/// level below a named sub-section.
fn with_children(node: &DumpNode) -> impl Iterator<Item = &DumpNode> {
    std::iter::once(node).chain(node.children.iter())
}
