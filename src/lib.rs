//! # Consolidate Library
//!
//! This library provides the core functionality for the `consolidate`
//! command-line tool, which merges a set of root source files and all of
//! their locally-included dependency files into one consolidated text
//! artifact: a single translation unit assembled from many
//! textually-included fragments.
//!
//! ## Quick Example
//!
//! ```no_run
//! use consolidate::locator::FileLocator;
//! use consolidate::phases::{ordering, scan};
//!
//! let locator = FileLocator::new(&["inc"]);
//! let roots = vec!["main.c".to_string()];
//!
//! // Scan the roots and their transitive local includes.
//! let result = scan::execute(&roots, &locator).unwrap();
//! println!("{} system headers", result.system_includes.len());
//!
//! // Drain the graph into a dependency-respecting order.
//! let order = ordering::execute(result.graph).unwrap();
//! for filename in &order.order {
//!     println!("{}", filename);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! - **Include Graph (`phases`)**: Each local file is a node keyed by its
//!   include name; every `#include "name"` occurrence is a dependency edge.
//!   Angle-bracket includes are collected as opaque names, never loaded.
//! - **File Location (`locator`)**: Bare include names resolve by probing
//!   the current directory and then the configured include directories.
//! - **Directive Grammar (`directive`)**: Literal detection of the
//!   `#include` token on a trimmed line; no macro expansion, no
//!   conditional-compilation evaluation, no comment awareness.
//! - **Manifest (`config`)**: An optional `.consolidate.yaml` naming
//!   roots, include directories, and the output path.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator::execute_merge`, which
//! runs three phases:
//!
//! 1.  **Scan**: Depth-first discovery of every reachable local file,
//!     building the graph and the deduplicated system-header set.
//! 2.  **Ordering**: Topological consolidation through a deterministic
//!     ready queue; a cycle among local includes is the single fatal
//!     failure.
//! 3.  **Emit**: The sorted system-include block, then each file's
//!     non-directive lines behind a banner, streamed to the artifact.
//!
//! Scan-phase anomalies (missing files, malformed directives) degrade
//! gracefully with `log` diagnostics and never abort the run.

pub mod config;
pub mod directive;
pub mod error;
pub mod locator;
pub mod output;
pub mod phases;
pub mod source;

#[cfg(test)]
mod ordering_proptest;
