//! Document instruction tree.
//!
//! The models describe their output as a small tree of named elements and
//! text leaves plus a doctype header; turning that tree into text is the
//! writer's concern. This covers exactly what the mkvmerge XML formats
//! need and nothing more.

/// A named document node.
///
/// A node either carries text content (a leaf) or ordered child elements;
/// the chapter and tag documents never need both on one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    /// Element name.
    pub name: String,
    /// Text content, for leaf nodes.
    pub value: Option<String>,
    /// Ordered child elements.
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Create an empty element.
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Create a text leaf.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Append a child element.
    pub fn push(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given name, in order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text content of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.value.as_deref())
    }
}

/// Doctype header: `<!DOCTYPE {root_name} SYSTEM "{system_id}">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctype {
    /// Root element name.
    pub root_name: String,
    /// System identifier, the DTD file name.
    pub system_id: String,
}

impl Doctype {
    /// Create a SYSTEM doctype.
    pub fn system(root_name: impl Into<String>, system_id: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            system_id: system_id.into(),
        }
    }
}

/// A complete document: doctype header plus the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    /// Doctype header.
    pub doctype: Doctype,
    /// Root element.
    pub root: XmlNode,
}

impl XmlDocument {
    /// Create a document.
    pub fn new(doctype: Doctype, root: XmlNode) -> Self {
        Self { doctype, root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_inspect() {
        let mut root = XmlNode::element("Tags");
        let mut tag = XmlNode::element("Tag");
        tag.push(XmlNode::text("Name", "TITLE"));
        tag.push(XmlNode::text("Name", "ARTIST"));
        root.push(tag);

        let tag = root.child("Tag").unwrap();
        assert_eq!(tag.child_text("Name"), Some("TITLE"));
        assert_eq!(tag.children_named("Name").count(), 2);
        assert!(tag.child("Targets").is_none());
    }

    #[test]
    fn doctype_fields() {
        let doctype = Doctype::system("Chapters", "matroskachapters.dtd");
        assert_eq!(doctype.root_name, "Chapters");
        assert_eq!(doctype.system_id, "matroskachapters.dtd");
    }
}
