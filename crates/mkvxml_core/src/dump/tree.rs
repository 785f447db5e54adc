//! Indent-tree reconstruction for mkvinfo dumps.
//!
//! mkvinfo prints one container element per line, with nesting depth encoded
//! by the column of a `+` marker:
//!
//! ```text
//! + EBML head
//! + Segment: size 293471104
//! |+ Segment information
//! | + Timestamp scale: 1000000
//! ```
//!
//! [`parse_dump`] rebuilds the element forest from that flat stream in one
//! linear pass with an explicit stack of open nodes.

use super::types::{DumpError, DumpNode, DumpResult};

/// Parse a dump into the forest of its root-level nodes.
///
/// Blank lines are skipped. A non-blank line without a `+` marker fails with
/// [`DumpError::MalformedLine`]; a line nested more than one level below its
/// predecessor fails with [`DumpError::IndentJump`].
pub fn parse_dump(text: &str) -> DumpResult<Vec<DumpNode>> {
    let mut roots: Vec<DumpNode> = Vec::new();
    let mut open: Vec<DumpNode> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let depth = raw.find('+').ok_or_else(|| DumpError::MalformedLine {
            line,
            content: raw.to_string(),
        })?;
        let label = raw[depth + 1..].trim().to_string();

        // A line may open at most one level below the current top. The same
        // check rejects a first line that is not at depth 0.
        if depth > open.len() {
            return Err(DumpError::IndentJump {
                line,
                depth,
                expected_max: open.len(),
            });
        }

        while open.len() > depth {
            close_top(&mut open, &mut roots);
        }
        open.push(DumpNode::new(depth, label));
    }

    while !open.is_empty() {
        close_top(&mut open, &mut roots);
    }

    tracing::debug!("parsed dump into {} root nodes", roots.len());
    Ok(roots)
}

/// Pop the deepest open node and attach it to its parent, or to the root
/// list once no parent remains.
fn close_top(open: &mut Vec<DumpNode>, roots: &mut Vec<DumpNode>) {
    if let Some(node) = open.pop() {
        match open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}
