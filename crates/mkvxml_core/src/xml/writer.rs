//! Pretty-printed serialization of document trees.
//!
//! Thin wrapper over quick-xml's event writer: XML declaration, DOCTYPE
//! header, then the element tree with two-space indentation.

use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::builder::{XmlDocument, XmlNode};
use super::types::{XmlError, XmlResult};

/// Serialize a document to pretty-printed XML text.
pub fn to_pretty_xml(doc: &XmlDocument) -> XmlResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let doctype = format!(
        "{} SYSTEM \"{}\"",
        doc.doctype.root_name, doc.doctype.system_id
    );
    writer.write_event(Event::DocType(BytesText::from_escaped(doctype)))?;
    write_node(&mut writer, &doc.root)?;

    let mut text =
        String::from_utf8(writer.into_inner()).map_err(|e| XmlError::Malformed(e.to_string()))?;
    text.push('\n');
    Ok(text)
}

/// Serialize a document and write it to a path.
pub fn write_document(doc: &XmlDocument, path: &Path) -> XmlResult<()> {
    let xml = to_pretty_xml(doc)?;
    std::fs::write(path, xml)?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

/// Write one node: start tag, text content, children, end tag.
fn write_node<W: std::io::Write>(writer: &mut Writer<W>, node: &XmlNode) -> XmlResult<()> {
    writer.write_event(Event::Start(BytesStart::new(node.name.as_str())))?;
    if let Some(value) = &node.value {
        writer.write_event(Event::Text(BytesText::new(value)))?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(node.name.as_str())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::builder::Doctype;

    fn sample_doc() -> XmlDocument {
        let mut root = XmlNode::element("Chapters");
        let mut edition = XmlNode::element("EditionEntry");
        let mut atom = XmlNode::element("ChapterAtom");
        atom.push(XmlNode::text("ChapterTimeStart", "0:00.000"));
        edition.push(atom);
        root.push(edition);
        XmlDocument::new(Doctype::system("Chapters", "matroskachapters.dtd"), root)
    }

    #[test]
    fn emits_declaration_and_doctype_headers() {
        let xml = to_pretty_xml(&sample_doc()).unwrap();
        let mut lines = xml.lines();
        assert_eq!(
            lines.next(),
            Some(r#"<?xml version="1.0" encoding="UTF-8"?>"#)
        );
        assert_eq!(
            lines.next(),
            Some(r#"<!DOCTYPE Chapters SYSTEM "matroskachapters.dtd">"#)
        );
        assert_eq!(lines.next(), Some("<Chapters>"));
    }

    #[test]
    fn text_leaves_stay_on_one_line() {
        let xml = to_pretty_xml(&sample_doc()).unwrap();
        assert!(xml.contains("<ChapterTimeStart>0:00.000</ChapterTimeStart>"));
    }

    #[test]
    fn nested_elements_are_indented() {
        let xml = to_pretty_xml(&sample_doc()).unwrap();
        assert!(xml.contains("\n  <EditionEntry>"));
        assert!(xml.contains("\n    <ChapterAtom>"));
        assert!(xml.ends_with("</Chapters>\n"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut root = XmlNode::element("Chapters");
        root.push(XmlNode::text("ChapterString", "Cats & <Dogs>"));
        let doc = XmlDocument::new(Doctype::system("Chapters", "matroskachapters.dtd"), root);

        let xml = to_pretty_xml(&doc).unwrap();
        assert!(xml.contains("Cats &amp; &lt;Dogs&gt;"));
    }

    #[test]
    fn empty_element_round_trips() {
        let root = XmlNode::element("Tags");
        let doc = XmlDocument::new(Doctype::system("Tags", "matroskatags.dtd"), root);
        let xml = to_pretty_xml(&doc).unwrap();
        assert!(xml.contains("<Tags>"));
        assert!(xml.trim_end().ends_with("</Tags>"));
    }

    #[test]
    fn writes_file_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapters.xml");
        write_document(&sample_doc(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_pretty_xml(&sample_doc()).unwrap());
    }
}
