//! Types for dump parsing and chapter extraction.

use std::path::PathBuf;

use thiserror::Error;

/// One node of the reconstructed dump tree.
///
/// `depth` is the column of the `+` marker in the source line, `label` the
/// trimmed text after it. Children appear in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpNode {
    /// Nesting depth, 0 for root-level nodes.
    pub depth: usize,
    /// Line text after the marker.
    pub label: String,
    /// Nested nodes, in source order.
    pub children: Vec<DumpNode>,
}

impl DumpNode {
    /// Create a leaf node.
    pub fn new(depth: usize, label: impl Into<String>) -> Self {
        Self {
            depth,
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Value carried by a `"name: value"` label, if the name matches.
    pub fn value_of(&self, field: &str) -> Option<&str> {
        self.label
            .strip_prefix(field)
            .and_then(|rest| rest.strip_prefix(':'))
            .map(str::trim)
    }
}

/// Which required chapter field was absent from an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterField {
    /// The track number.
    Number,
    /// The start time.
    StartTime,
    /// The display title.
    Title,
}

impl std::fmt::Display for ChapterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChapterField::Number => "track number",
            ChapterField::StartTime => "start time",
            ChapterField::Title => "title",
        };
        f.write_str(name)
    }
}

/// Error type for dump operations.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// A non-blank line has no `+` marker.
    #[error("line {line}: no depth marker in {content:?}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// A line is nested more than one level below its predecessor.
    #[error("line {line}: depth jumps to {depth}, at most {expected_max} is valid here")]
    IndentJump {
        /// 1-based line number.
        line: usize,
        /// Depth found on the line.
        depth: usize,
        /// Deepest level that would have been a valid child.
        expected_max: usize,
    },

    /// The Segment/Chapters section path is absent from the dump.
    #[error("no chapters section found in dump")]
    ChaptersNotFound,

    /// A chapter atom lacks one of its required fields.
    #[error("chapter entry {entry} has no {field}")]
    MissingField {
        /// 1-based atom position within the edition.
        entry: usize,
        /// Which field was absent.
        field: ChapterField,
    },

    /// External tool exited non-zero.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        /// Tool name.
        tool: String,
        /// Process exit code, -1 when killed by signal.
        exit_code: i32,
        /// Captured stderr.
        message: String,
    },

    /// IO error while reading input or running the tool.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for dump operation results.
pub type DumpResult<T> = Result<T, DumpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_of_requires_name_and_separator() {
        let node = DumpNode::new(4, "Chapter time start: 00:00:05.000000000");
        assert_eq!(
            node.value_of("Chapter time start"),
            Some("00:00:05.000000000")
        );
        assert_eq!(node.value_of("Chapter time end"), None);
        // Longer field names must not match on their prefix.
        assert_eq!(node.value_of("Chapter time"), None);
    }

    #[test]
    fn value_of_on_bare_section_label() {
        let node = DumpNode::new(3, "Chapter display");
        assert_eq!(node.value_of("Chapter display"), None);
    }

    #[test]
    fn field_names_display() {
        assert_eq!(ChapterField::Number.to_string(), "track number");
        assert_eq!(ChapterField::StartTime.to_string(), "start time");
        assert_eq!(ChapterField::Title.to_string(), "title");
    }
}
