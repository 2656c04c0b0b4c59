//! # Error Handling
//!
//! Centralized error type for the `consolidate` library, built on
//! `thiserror`. Only genuinely fatal conditions are represented here:
//! build-phase anomalies (an include file that cannot be located, a
//! malformed include line) degrade gracefully inside the scan phase and are
//! surfaced as `log` diagnostics instead of errors.
//!
//! ## Key Components
//!
//! - **`Error`**: all failure modes that abort a run: manifest parsing
//!   problems, the cycle-detected consolidation failure, artifact write
//!   failures, and wrapped I/O and YAML errors.
//!
//! - **`Result<T>`**: a type alias for `std::result::Result<T, Error>`,
//!   used throughout the library.
//!
//! A `CycleDetected` error terminates the whole operation immediately;
//! whatever was already flushed to the output artifact remains on disk, so
//! callers must treat the artifact as incomplete when they see this error.

use thiserror::Error;

/// Main error type for consolidate operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the `.consolidate.yaml` manifest.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Manifest parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the manifest issue
        hint: Option<String>,
    },

    /// The consolidation loop found no free node while the graph was still
    /// non-empty: the local-include relation contains a cycle.
    #[error("Cycle detected in local includes: {cycle}")]
    CycleDetected { cycle: String },

    /// An error occurred while reading a located source file.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An error occurred while writing the output artifact.
    #[error("Artifact write error: {message}")]
    Emit { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
