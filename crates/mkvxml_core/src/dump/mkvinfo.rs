//! mkvinfo invocation.
//!
//! The dump parser's input comes from the external inspection executable,
//! invoked with a single file-path argument: call, wait, decode stdout as
//! UTF-8. No timeout, no retry; callers wanting either wrap this themselves.

use std::path::Path;
use std::process::Command;

use crate::models::ChapterList;

use super::chapters::chapters_from_dump;
use super::tree::parse_dump;
use super::types::{DumpError, DumpResult};

/// Default name of the inspection executable.
pub const DEFAULT_TOOL: &str = "mkvinfo";

/// Run the inspection tool on a media file and return its text dump.
pub fn read_dump(path: &Path, tool: &str) -> DumpResult<String> {
    if !path.exists() {
        return Err(DumpError::FileNotFound(path.to_path_buf()));
    }

    tracing::debug!("running: {} {}", tool, path.display());

    let output = Command::new(tool).arg(path).output()?;

    if !output.status.success() {
        return Err(DumpError::CommandFailed {
            tool: tool.to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            message: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Read the chapters of a media file via the inspection tool.
pub fn read_chapters(path: &Path, tool: &str) -> DumpResult<ChapterList> {
    let dump = read_dump(path, tool)?;
    let roots = parse_dump(&dump)?;
    chapters_from_dump(&roots)
}
