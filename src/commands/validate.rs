//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks a
//! consolidation's inputs without writing the artifact.
//!
//! ## Functionality
//!
//! - **Manifest Validation**: Parses the manifest file (when one is in
//!   play) and reports schema problems with hints.
//! - **Root Validation**: Verifies that every root can be located on the
//!   search path.
//! - **Graph Statistics**: Reports local files, system headers, missing
//!   includes, and dependency edges discovered by a scan.
//! - **Cycle Detection**: Runs the full consolidation ordering and fails
//!   if the include graph cannot drain.
//!
//! This command is a safe, read-only operation that does not modify any
//! files.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use consolidate::locator::FileLocator;
use consolidate::output::{emoji, OutputConfig};
use consolidate::phases::{ordering, scan};

use super::resolve_inputs;

/// Validate consolidation inputs and the include graph
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Root source files to check, in order
    #[arg(value_name = "ROOT")]
    pub roots: Vec<String>,

    /// Additional include search directory (repeatable)
    #[arg(short = 'I', long = "include-dir", value_name = "DIR")]
    pub include_dirs: Vec<PathBuf>,

    /// Path to the manifest file
    #[arg(short, long, value_name = "FILE", env = "CONSOLIDATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use strict validation (fail on warnings)
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `validate` command.
///
/// Performs a full dry scan and consolidation of the resolved inputs and
/// reports any issues. Warnings (missing includes, unlocatable roots) only
/// fail the run under `--strict`; a cycle always does.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    let inputs = resolve_inputs(args.config.as_deref(), &args.roots, &args.include_dirs)?;
    if inputs.roots.is_empty() {
        anyhow::bail!(
            "No root files given. Pass them as arguments or list them under 'roots' in {}",
            consolidate::config::DEFAULT_MANIFEST
        );
    }

    println!(
        "{} Validating consolidation of: {}",
        emoji(&out, "🔍", "[SCAN]"),
        inputs.roots.join(", ")
    );

    let mut has_warnings = false;
    let locator = FileLocator::new(&inputs.include_dirs);

    // Root files must be locatable; a missing root consolidates to nothing.
    for root in &inputs.roots {
        match locator.locate(root)? {
            Some(_) => {}
            None => {
                println!(
                    "{} Root not found on search path: {}",
                    emoji(&out, "⚠️", "[WARN]"),
                    root
                );
                has_warnings = true;
            }
        }
    }

    // Scan statistics
    let result = scan::execute(&inputs.roots, &locator)?;
    let edge_count: usize = result
        .graph
        .nodes()
        .map(|node| node.dependencies.len())
        .sum();

    println!("\n{} Include Graph Summary:", emoji(&out, "📊", "[INFO]"));
    println!("   Local files: {}", result.graph.len());
    println!("   Dependency edges: {}", edge_count);
    println!("   System headers: {}", result.system_includes.len());

    let missing = result.missing_files();
    if missing > 0 {
        println!(
            "{} {} include(s) could not be located:",
            emoji(&out, "⚠️", "[WARN]"),
            missing
        );
        for node in result.graph.nodes().filter(|n| !n.located) {
            println!("   - {}", node.filename);
        }
        has_warnings = true;
    }

    // Cycle detection via a full consolidation dry-check
    println!(
        "\n{} Checking consolidation order...",
        emoji(&out, "🔄", "[CHECK]")
    );
    match ordering::execute(result.graph) {
        Ok(order) => {
            println!(
                "{} Graph drains cleanly; {} file(s) in emission order",
                emoji(&out, "✅", "[OK]"),
                order.len()
            );
        }
        Err(e) => {
            println!("{} {}", emoji(&out, "❌", "[ERR]"), e);
            return Err(e.into());
        }
    }

    if has_warnings && args.strict {
        anyhow::bail!("Validation reported warnings (strict mode)");
    }

    println!("\n{} Validation passed", emoji(&out, "✅", "[OK]"));
    Ok(())
}
