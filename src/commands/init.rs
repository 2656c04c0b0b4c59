//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which creates a new
//! `.consolidate.yaml` manifest file.
//!
//! ## Functionality
//!
//! - **Minimal Manifest**: Creates a commented starter manifest (default)
//! - **Empty Manifest**: Creates a manifest with comments only
//! - **Force Mode**: Overwrites an existing manifest when specified

use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::Path;

use consolidate::config::DEFAULT_MANIFEST;

/// Initialize a new .consolidate.yaml manifest file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Create an empty manifest file
    #[arg(long)]
    pub empty: bool,

    /// Overwrite an existing manifest file
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the `init` command.
pub fn execute(args: InitArgs) -> Result<()> {
    let manifest_path = Path::new(DEFAULT_MANIFEST);

    if manifest_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Manifest file '{}' already exists. Use --force to overwrite.",
            DEFAULT_MANIFEST
        ));
    }

    println!("🎯 Initializing consolidate manifest...");

    let content = if args.empty {
        generate_empty_manifest()
    } else {
        generate_minimal_manifest()
    };

    fs::write(manifest_path, content)?;
    println!("✅ Created {}", DEFAULT_MANIFEST);
    println!("💡 Run `consolidate merge` to build the artifact");

    Ok(())
}

/// Generate an empty manifest file.
fn generate_empty_manifest() -> String {
    r#"# consolidate manifest
# This file names the roots, search directories, and output artifact
# for a source consolidation.

"#
    .to_string()
}

/// Generate a minimal manifest with commented examples.
fn generate_minimal_manifest() -> String {
    r#"# consolidate manifest
#
# Root source files, consolidated in order:
roots:
  - main.c

# Directories probed (after the current directory) for quoted includes:
include-dirs:
  - inc

# Output artifact:
output: consolidated.c
"#
    .to_string()
}
