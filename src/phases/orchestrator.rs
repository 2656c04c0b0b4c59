//! Orchestrator for the complete merge operation
//!
//! This module coordinates all phases to provide a clean API for the
//! complete merge operation: scan, consolidate, emit.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::ordering::Consolidator;
use super::{phase1, phase3, MergeReport};
use crate::error::{Error, Result};
use crate::locator::FileLocator;

/// Execute the complete merge operation (Phases 1-3)
///
/// This orchestrates the complete consolidation pipeline:
/// 1. Scan roots and their transitive local includes into a graph
/// 2. Drain the graph in dependency-respecting order
/// 3. Emit the system-include block and ordered bodies
///
/// If `output_path` is `None`, the pipeline runs in full (including cycle
/// detection) against an in-memory sink and nothing touches disk (dry
/// run). If `output_path` is `Some(path)`, the artifact is written there;
/// on a `CycleDetected` failure the partially written artifact remains.
pub fn execute_merge(
    roots: &[String],
    include_dirs: &[std::path::PathBuf],
    output_path: Option<&Path>,
) -> Result<MergeReport> {
    let locator = FileLocator::new(include_dirs);

    // Phase 1: Scan
    let scan = phase1::execute(roots, &locator)?;
    let missing_files = scan.missing_files();
    let consolidator = Consolidator::new(scan.graph);

    // Phases 2+3: Consolidate while emitting
    let emit_report = match output_path {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::Emit {
                message: format!("Failed to create '{}': {}", path.display(), e),
            })?;
            let mut writer = BufWriter::new(file);
            phase3::execute(&mut writer, &scan.system_includes, consolidator)?
        }
        None => {
            let mut sink = Vec::new();
            phase3::execute(&mut sink, &scan.system_includes, consolidator)?
        }
    };

    Ok(MergeReport {
        local_files: emit_report.local_files,
        system_headers: emit_report.system_headers,
        missing_files,
        output_bytes: emit_report.bytes,
    })
}
