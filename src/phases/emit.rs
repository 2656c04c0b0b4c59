//! Phase 3: Artifact Emission
//!
//! This is the final phase of the `consolidate` execution pipeline. Its
//! responsibility is to serialize the consolidated output:
//!
//! 1.  **System-Include Block**: One `#include <NAME>` line per distinct
//!     system header, in sorted order, followed by a blank separator line.
//!
//! 2.  **File Bodies**: For each node the consolidator yields, a three-line
//!     banner naming the source file, then the node's non-directive lines
//!     verbatim, content and line endings exactly as read.
//!
//! 3.  **Trailing Blank Line**: Written only when the whole graph drained.
//!
//! Emission streams from the consolidator: every body is flushed before the
//! next step runs, so a mid-run cycle failure leaves the partial
//! system-includes-plus-some-bodies artifact on disk rather than rolling
//! back. Callers seeing `CycleDetected` must treat the artifact as
//! incomplete.

use std::io::Write;

use super::ordering::Consolidator;
use super::SystemIncludes;
use crate::error::{Error, Result};

/// Counters reported back to the caller after emission.
#[derive(Debug, Clone, Default)]
pub struct EmitReport {
    /// Local file bodies written
    pub local_files: usize,
    /// System-include lines written
    pub system_headers: usize,
    /// Total bytes written
    pub bytes: usize,
}

/// Execute Phase 3: write the consolidated artifact.
pub fn execute<W: Write>(
    out: &mut W,
    system_includes: &SystemIncludes,
    consolidator: Consolidator,
) -> Result<EmitReport> {
    let mut writer = CountingWriter::new(out);
    let mut report = EmitReport::default();

    for name in system_includes {
        writer.write_line(&format!("#include <{}>\n", name))?;
        report.system_headers += 1;
    }
    writer.write_line("\n")?;

    for step in consolidator {
        let node = match step {
            Ok(node) => node,
            Err(e) => {
                // Keep the partial artifact: flush what was written before
                // surfacing the failure.
                writer.flush()?;
                report.bytes = writer.bytes;
                return Err(e);
            }
        };

        writer.write_line("//\n")?;
        writer.write_line(&format!("// Contents of {}\n", node.filename))?;
        writer.write_line("//\n")?;
        for line in node.filtered_lines() {
            writer.write_line(line)?;
        }
        report.local_files += 1;
    }

    writer.write_line("\n")?;
    writer.flush()?;
    report.bytes = writer.bytes;
    Ok(report)
}

/// Thin wrapper tracking bytes written and wrapping write failures in the
/// artifact error variant.
struct CountingWriter<'a, W: Write> {
    inner: &'a mut W,
    bytes: usize,
}

impl<'a, W: Write> CountingWriter<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.inner
            .write_all(text.as_bytes())
            .map_err(|e| Error::Emit {
                message: format!("Failed to write artifact: {}", e),
            })?;
        self.bytes += text.len();
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(|e| Error::Emit {
            message: format!("Failed to flush artifact: {}", e),
        })
    }
}
