//! Chapter model and its XML forms.
//!
//! [`ChapterList`] is the ordered set of (number, start time, title) records
//! behind the mkvmerge chapter file: built up by callers or by the dump
//! extractor, serialized to the `matroskachapters.dtd` document shape, and
//! parseable back from a previously written file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::timecode::{format_timecode, TimecodeResult};
use crate::xml::{
    to_pretty_xml, write_document, Doctype, XmlDocument, XmlError, XmlNode, XmlResult,
};

/// Display language written alongside every chapter title.
pub const CHAPTER_LANGUAGE: &str = "eng";

/// One chapter: a navigable point on the media timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Track number, 1-based.
    pub number: u32,
    /// Start time display string, carried verbatim.
    pub start_time: String,
    /// Display title.
    pub title: String,
}

/// Ordered list of chapters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChapterList {
    chapters: Vec<Chapter>,
}

impl ChapterList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chapter, numbering it by its 1-based insertion position.
    pub fn add_chapter(&mut self, start_time: impl Into<String>, title: impl Into<String>) {
        let number = self.chapters.len() as u32 + 1;
        self.chapters.push(Chapter {
            number,
            start_time: start_time.into(),
            title: title.into(),
        });
    }

    /// Append a chapter at a start time given in seconds.
    pub fn add_chapter_at(
        &mut self,
        seconds: f64,
        title: impl Into<String>,
    ) -> TimecodeResult<()> {
        let start_time = format_timecode(seconds)?;
        self.add_chapter(start_time, title);
        Ok(())
    }

    /// Append a chapter that carries its own number.
    pub fn push(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    /// Number of chapters.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Check if there are no chapters.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Chapter at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// Iterate over chapters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    /// Build the chapter document instruction tree.
    ///
    /// Shape: `Chapters`, one `EditionEntry`, one `ChapterAtom` per chapter
    /// in model order, each carrying the track number, the verbatim start
    /// time, and the title with its display language.
    pub fn to_document(&self) -> XmlDocument {
        let mut edition = XmlNode::element("EditionEntry");

        for chapter in &self.chapters {
            let mut atom = XmlNode::element("ChapterAtom");

            let mut track = XmlNode::element("ChapterTrack");
            track.push(XmlNode::text(
                "ChapterTrackNumber",
                chapter.number.to_string(),
            ));
            atom.push(track);

            atom.push(XmlNode::text(
                "ChapterTimeStart",
                chapter.start_time.clone(),
            ));

            let mut display = XmlNode::element("ChapterDisplay");
            display.push(XmlNode::text("ChapterString", chapter.title.clone()));
            display.push(XmlNode::text("ChapterLanguage", CHAPTER_LANGUAGE));
            atom.push(display);

            edition.push(atom);
        }

        let mut root = XmlNode::element("Chapters");
        root.push(edition);
        XmlDocument::new(Doctype::system("Chapters", "matroskachapters.dtd"), root)
    }

    /// Serialize to pretty-printed XML text.
    pub fn to_xml(&self) -> XmlResult<String> {
        to_pretty_xml(&self.to_document())
    }

    /// Serialize and write to a path.
    pub fn save(&self, path: &Path) -> XmlResult<()> {
        write_document(&self.to_document(), path)
    }

    /// Parse a previously written chapter document back into a list.
    pub fn from_xml(xml: &str) -> XmlResult<ChapterList> {
        let doc = roxmltree::Document::parse_with_options(
            xml,
            roxmltree::ParsingOptions {
                allow_dtd: true,
                ..Default::default()
            },
        )
        .map_err(|e| XmlError::Malformed(e.to_string()))?;

        let root = doc.root_element();
        if root.tag_name().name() != "Chapters" {
            return Err(XmlError::Malformed(
                "root element must be <Chapters>".to_string(),
            ));
        }

        let mut list = ChapterList::new();

        if let Some(edition) = root
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == "EditionEntry")
        {
            let atoms = edition
                .children()
                .filter(|n| n.is_element() && n.tag_name().name() == "ChapterAtom");
            for (idx, atom) in atoms.enumerate() {
                list.push(parse_atom(&atom, idx + 1)?);
            }
        }

        Ok(list)
    }

    /// Parse a chapter document from a file.
    pub fn from_xml_file(path: &Path) -> XmlResult<ChapterList> {
        if !path.exists() {
            return Err(XmlError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_xml(&content)
    }
}

/// Read one `ChapterAtom` element.
fn parse_atom(atom: &roxmltree::Node, entry: usize) -> XmlResult<Chapter> {
    let mut number: Option<u32> = None;
    let mut start_time: Option<String> = None;
    let mut title: Option<String> = None;

    for child in atom.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "ChapterTrack" => {
                number = element_text(&child, "ChapterTrackNumber")
                    .and_then(|t| t.trim().parse().ok());
            }
            "ChapterTimeStart" => {
                start_time = child.text().map(|t| t.trim().to_string());
            }
            "ChapterDisplay" => {
                // The first display wins; titles are not trimmed.
                if title.is_none() {
                    title = element_text(&child, "ChapterString");
                }
            }
            _ => {}
        }
    }

    let missing = |element| XmlError::MissingElement { entry, element };
    Ok(Chapter {
        number: number.ok_or_else(|| missing("ChapterTrackNumber"))?,
        start_time: start_time.ok_or_else(|| missing("ChapterTimeStart"))?,
        title: title.ok_or_else(|| missing("ChapterString"))?,
    })
}

/// Text of the first child element with the given name.
fn element_text(node: &roxmltree::Node, name: &str) -> Option<String> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .and_then(|n| n.text())
        .map(|t| t.to_string())
}
