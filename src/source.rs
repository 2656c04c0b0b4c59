//! Raw source line loading with original line terminators preserved.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a file into its raw lines.
///
/// Each returned element keeps its original terminator (`\n` or `\r\n`), so
/// emitted bodies can be reproduced byte-for-byte. A final line without a
/// trailing newline is returned as-is.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to read '{}': {}", path.display(), e),
    })?;
    Ok(split_lines(&content))
}

/// Split text into terminator-preserving lines.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}
