//! Tag model and its XML form.
//!
//! Tags attach metadata name/value pairs ("simples") to targets identified
//! by UID: attachments, chapters, editions, or tracks. Serialization follows
//! the `matroskatags.dtd` document shape. Simples are emitted in sorted name
//! order, which is part of the observable format; UID lists keep insertion
//! order.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::xml::{to_pretty_xml, write_document, Doctype, XmlDocument, XmlNode, XmlResult};

/// Language written alongside every simple value.
pub const TAG_LANGUAGE: &str = "eng";

/// One tag: a target plus its metadata pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Free-form target type name (e.g. "MOVIE", "EPISODE").
    pub target_type: Option<String>,
    /// Target type level value (e.g. "50").
    pub target_type_value: Option<String>,
    /// Attachment UIDs, insertion order.
    pub attachment_uids: Vec<u64>,
    /// Chapter UIDs, insertion order.
    pub chapter_uids: Vec<u64>,
    /// Edition UIDs, insertion order.
    pub edition_uids: Vec<u64>,
    /// Track UIDs, insertion order.
    pub track_uids: Vec<u64>,
    /// Name to value pairs, kept (and serialized) in name order.
    simples: BTreeMap<String, String>,
}

impl Tag {
    /// Create an empty tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a simple name/value pair, replacing any previous value.
    pub fn set_simple(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.simples.insert(name.into(), value.into());
    }

    /// Value of a simple pair by name.
    pub fn simple(&self, name: &str) -> Option<&str> {
        self.simples.get(name).map(String::as_str)
    }

    /// Name/value pairs in name order.
    pub fn simples(&self) -> impl Iterator<Item = (&str, &str)> {
        self.simples.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Add an attachment UID target.
    pub fn add_attachment_uid(&mut self, uid: u64) {
        self.attachment_uids.push(uid);
    }

    /// Add a chapter UID target.
    pub fn add_chapter_uid(&mut self, uid: u64) {
        self.chapter_uids.push(uid);
    }

    /// Add an edition UID target.
    pub fn add_edition_uid(&mut self, uid: u64) {
        self.edition_uids.push(uid);
    }

    /// Add a track UID target.
    pub fn add_track_uid(&mut self, uid: u64) {
        self.track_uids.push(uid);
    }
}

/// Ordered list of tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag.
    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.tags.get(index)
    }

    /// Iterate over tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Build the tag document instruction tree.
    ///
    /// Each tag's `Targets` element lists UIDs in the fixed kind order
    /// attachment, chapter, edition, track, then the optional target type
    /// fields; `Simple` elements follow in sorted name order.
    pub fn to_document(&self) -> XmlDocument {
        let mut root = XmlNode::element("Tags");

        for tag in &self.tags {
            let mut entry = XmlNode::element("Tag");

            let mut targets = XmlNode::element("Targets");
            for (name, uids) in [
                ("AttachmentUID", &tag.attachment_uids),
                ("ChapterUID", &tag.chapter_uids),
                ("EditionUID", &tag.edition_uids),
                ("TrackUID", &tag.track_uids),
            ] {
                for uid in uids {
                    targets.push(XmlNode::text(name, uid.to_string()));
                }
            }
            if let Some(target_type) = non_empty(&tag.target_type) {
                targets.push(XmlNode::text("TargetType", target_type));
            }
            if let Some(value) = non_empty(&tag.target_type_value) {
                targets.push(XmlNode::text("TargetTypeValue", value));
            }
            entry.push(targets);

            for (name, value) in tag.simples() {
                let mut simple = XmlNode::element("Simple");
                simple.push(XmlNode::text("Name", name));
                simple.push(XmlNode::text("String", value));
                simple.push(XmlNode::text("TagLanguage", TAG_LANGUAGE));
                entry.push(simple);
            }

            root.push(entry);
        }

        XmlDocument::new(Doctype::system("Tags", "matroskatags.dtd"), root)
    }

    /// Serialize to pretty-printed XML text.
    pub fn to_xml(&self) -> XmlResult<String> {
        to_pretty_xml(&self.to_document())
    }

    /// Serialize and write to a path.
    pub fn save(&self, path: &Path) -> XmlResult<()> {
        write_document(&self.to_document(), path)
    }
}

/// Present and non-empty. The string `"0"` is a real value; only absence
/// and the empty string mean "omit".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simples_are_sorted_by_name() {
        let mut tag = Tag::new();
        tag.set_simple("ZEBRA", "last");
        tag.set_simple("ARTIST", "first");
        tag.set_simple("MOOD", "middle");

        let names: Vec<_> = tag.simples().map(|(k, _)| k).collect();
        assert_eq!(names, ["ARTIST", "MOOD", "ZEBRA"]);
    }

    #[test]
    fn set_simple_replaces_value() {
        let mut tag = Tag::new();
        tag.set_simple("TITLE", "Old");
        tag.set_simple("TITLE", "New");
        assert_eq!(tag.simple("TITLE"), Some("New"));
        assert_eq!(tag.simples().count(), 1);
    }

    #[test]
    fn document_emits_simples_in_name_order() {
        let mut tag = Tag::new();
        tag.set_simple("Z", "26");
        tag.set_simple("A", "1");

        let mut list = TagList::new();
        list.add_tag(tag);
        let doc = list.to_document();

        let entry = doc.root.child("Tag").unwrap();
        let names: Vec<_> = entry
            .children_named("Simple")
            .map(|s| s.child_text("Name").unwrap())
            .collect();
        assert_eq!(names, ["A", "Z"]);

        let first = entry.child("Simple").unwrap();
        assert_eq!(first.child_text("String"), Some("1"));
        assert_eq!(first.child_text("TagLanguage"), Some("eng"));
    }

    #[test]
    fn targets_keep_kind_then_insertion_order() {
        let mut tag = Tag::new();
        tag.add_track_uid(300);
        tag.add_chapter_uid(200);
        tag.add_chapter_uid(201);
        tag.add_attachment_uid(100);

        let mut list = TagList::new();
        list.add_tag(tag);
        let doc = list.to_document();

        let targets = doc.root.child("Tag").unwrap().child("Targets").unwrap();
        let emitted: Vec<_> = targets
            .children
            .iter()
            .map(|c| (c.name.as_str(), c.value.as_deref().unwrap()))
            .collect();
        assert_eq!(
            emitted,
            [
                ("AttachmentUID", "100"),
                ("ChapterUID", "200"),
                ("ChapterUID", "201"),
                ("TrackUID", "300"),
            ]
        );
    }

    #[test]
    fn duplicate_uids_are_kept() {
        let mut tag = Tag::new();
        tag.add_edition_uid(5);
        tag.add_edition_uid(5);

        let mut list = TagList::new();
        list.add_tag(tag);
        let doc = list.to_document();

        let targets = doc.root.child("Tag").unwrap().child("Targets").unwrap();
        assert_eq!(targets.children_named("EditionUID").count(), 2);
    }

    #[test]
    fn target_type_omitted_when_absent_or_empty() {
        let mut absent = Tag::new();
        absent.set_simple("TITLE", "x");

        let mut empty = Tag::new();
        empty.target_type = Some(String::new());
        empty.target_type_value = Some(String::new());

        let mut list = TagList::new();
        list.add_tag(absent);
        list.add_tag(empty);
        let doc = list.to_document();

        for entry in doc.root.children_named("Tag") {
            let targets = entry.child("Targets").unwrap();
            assert!(targets.child("TargetType").is_none());
            assert!(targets.child("TargetTypeValue").is_none());
        }
    }

    #[test]
    fn target_type_value_zero_is_emitted() {
        let mut tag = Tag::new();
        tag.target_type = Some("MOVIE".to_string());
        tag.target_type_value = Some("0".to_string());

        let mut list = TagList::new();
        list.add_tag(tag);
        let doc = list.to_document();

        let targets = doc.root.child("Tag").unwrap().child("Targets").unwrap();
        assert_eq!(targets.child_text("TargetType"), Some("MOVIE"));
        assert_eq!(targets.child_text("TargetTypeValue"), Some("0"));
    }

    #[test]
    fn targets_precede_simples() {
        let mut tag = Tag::new();
        tag.add_track_uid(1);
        tag.set_simple("TITLE", "x");

        let mut list = TagList::new();
        list.add_tag(tag);
        let doc = list.to_document();

        let entry = doc.root.child("Tag").unwrap();
        assert_eq!(entry.children[0].name, "Targets");
        assert_eq!(entry.children[1].name, "Simple");
    }

    #[test]
    fn document_doctype() {
        let doc = TagList::new().to_document();
        assert_eq!(doc.doctype.root_name, "Tags");
        assert_eq!(doc.doctype.system_id, "matroskatags.dtd");
        assert_eq!(doc.root.name, "Tags");
        assert!(doc.root.children.is_empty());
    }
}
