//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `consolidate` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! The `merge`, `tree`, and `validate` commands share their input surface:
//! roots and include directories can come from positional arguments and
//! `-I` flags, from an optional `.consolidate.yaml` manifest, or from a mix
//! of the two; command-line values override manifest values. That shared
//! resolution lives here.

use std::path::{Path, PathBuf};

use anyhow::Result;

use consolidate::config::{self, Manifest, DEFAULT_MANIFEST};

pub mod completions;
pub mod init;
pub mod merge;
pub mod tree;
pub mod validate;

/// Fully resolved pipeline inputs.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub roots: Vec<String>,
    pub include_dirs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Resolve effective inputs from command-line values and the manifest.
///
/// An explicitly given manifest path must exist; the default manifest is
/// loaded only when present. Command-line roots and include directories
/// take precedence over manifest values when both are given.
pub fn resolve_inputs(
    config_path: Option<&Path>,
    cli_roots: &[String],
    cli_include_dirs: &[PathBuf],
) -> Result<Inputs> {
    let manifest = load_manifest(config_path)?;

    let roots = if cli_roots.is_empty() {
        manifest.roots.clone()
    } else {
        cli_roots.to_vec()
    };
    let include_dirs = if cli_include_dirs.is_empty() {
        manifest.include_dirs.clone()
    } else {
        cli_include_dirs.to_vec()
    };

    Ok(Inputs {
        roots,
        include_dirs,
        output: manifest.output,
    })
}

fn load_manifest(config_path: Option<&Path>) -> Result<Manifest> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Manifest file not found: {}", path.display());
            }
            Ok(config::from_file(path)?)
        }
        None => {
            let default = Path::new(DEFAULT_MANIFEST);
            if default.exists() {
                Ok(config::from_file(default)?)
            } else {
                Ok(Manifest::default())
            }
        }
    }
}
