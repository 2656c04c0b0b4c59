//! # Manifest Schema and Parsing
//!
//! This module defines the data structures that represent the
//! `.consolidate.yaml` manifest file, as well as the logic for parsing it.
//! The manifest is deliberately small: it names the root source files, the
//! include search directories, and the output artifact, so that a build can
//! be reproduced without retyping command-line arguments.
//!
//! ## Key Components
//!
//! - **`Manifest`**: the whole file: `roots`, `include-dirs`, `output`.
//!   Every field is optional; command-line arguments override whatever the
//!   manifest provides.
//!
//! Parsing goes through `parse` (string) or `from_file` (path); both wrap
//! YAML problems in `Error::ConfigParse` with a remediation hint where one
//! is known. Unknown keys are rejected rather than silently ignored, since
//! a typoed `include-dirs` would otherwise change the search path without
//! any visible symptom.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default manifest filename, looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = ".consolidate.yaml";

/// The `.consolidate.yaml` manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Manifest {
    /// Root source files, consolidated in the given order.
    #[serde(default)]
    pub roots: Vec<String>,

    /// Include search directories, probed after the current directory in
    /// the given order.
    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,

    /// Output artifact path.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Parse a manifest from YAML text.
///
/// A comment-only or empty manifest parses as YAML null and yields the
/// all-default manifest.
pub fn parse(yaml: &str) -> Result<Manifest> {
    if let Ok(value) = serde_yaml::from_str::<serde_yaml::Value>(yaml) {
        if value.is_null() {
            return Ok(Manifest::default());
        }
    }
    serde_yaml::from_str(yaml).map_err(|e| {
        let message = e.to_string();
        let hint = if message.contains("unknown field") {
            Some("Known manifest keys are 'roots', 'include-dirs', and 'output'".to_string())
        } else if message.contains("invalid type") {
            Some(
                "'roots' and 'include-dirs' are YAML lists; 'output' is a single path".to_string(),
            )
        } else {
            None
        };
        Error::ConfigParse { message, hint }
    })
}

/// Load and parse a manifest file.
pub fn from_file(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| Error::ConfigParse {
        message: format!("Failed to read '{}': {}", path.display(), e),
        hint: Some("Run `consolidate init` to create a starter manifest".to_string()),
    })?;
    parse(&content)
}
