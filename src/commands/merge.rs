//! Merge command implementation
//!
//! The merge command executes the full 3-phase pipeline:
//! 1. Scan roots and their transitive local includes into a graph
//! 2. Drain the graph in dependency-respecting order
//! 3. Emit the system-include block and ordered bodies to the artifact

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use consolidate::output::{emoji, OutputConfig};
use consolidate::phases::orchestrator;

use super::resolve_inputs;

/// Default artifact path when neither the CLI nor the manifest names one.
const DEFAULT_OUTPUT: &str = "consolidated.c";

/// Arguments for the merge command
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Root source files to consolidate, in order
    #[arg(value_name = "ROOT")]
    pub roots: Vec<String>,

    /// Additional include search directory (repeatable, probed in order
    /// after the current directory)
    #[arg(short = 'I', long = "include-dir", value_name = "DIR")]
    pub include_dirs: Vec<PathBuf>,

    /// Output artifact path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to the manifest file
    #[arg(short, long, value_name = "FILE", env = "CONSOLIDATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run every phase, including cycle detection, without writing the
    /// artifact
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the merge command
pub fn execute(args: MergeArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let start_time = Instant::now();

    let inputs = resolve_inputs(args.config.as_deref(), &args.roots, &args.include_dirs)?;
    if inputs.roots.is_empty() {
        anyhow::bail!(
            "No root files given. Pass them as arguments or list them under 'roots' in {}",
            consolidate::config::DEFAULT_MANIFEST
        );
    }

    let output_path = args
        .output
        .or(inputs.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if !args.quiet {
        println!("{} Consolidate Merge", emoji(&out, "🔗", "[MERGE]"));
        println!();

        if args.dry_run {
            println!(
                "{} DRY RUN MODE - No artifact will be written",
                emoji(&out, "🔎", "[DRY-RUN]")
            );
            println!();
        }
    }

    if !args.quiet && args.verbose {
        println!("   Roots: {}", inputs.roots.join(", "));
        for dir in &inputs.include_dirs {
            println!("   Include dir: {}", dir.display());
        }
        println!("   Output: {}", output_path.display());
        println!();
    }

    let result = orchestrator::execute_merge(
        &inputs.roots,
        &inputs.include_dirs,
        if args.dry_run {
            None
        } else {
            Some(output_path.as_path())
        },
    );

    match result {
        Ok(report) => {
            let duration = start_time.elapsed();

            if !args.quiet {
                println!(
                    "{} Merged successfully in {:.2}s",
                    emoji(&out, "✅", "[OK]"),
                    duration.as_secs_f64()
                );
                println!(
                    "   {} local files, {} system headers",
                    report.local_files, report.system_headers
                );
                if report.missing_files > 0 {
                    println!(
                        "{} {} include(s) were never located (emitted as empty)",
                        emoji(&out, "⚠️", "[WARN]"),
                        report.missing_files
                    );
                }
                if !args.dry_run {
                    println!(
                        "   {} bytes written to: {}",
                        report.output_bytes,
                        output_path.display()
                    );
                }
            }

            Ok(())
        }
        Err(e) => {
            if !args.quiet {
                println!("{} Merge failed", emoji(&out, "❌", "[ERR]"));
                if !args.dry_run {
                    println!(
                        "   The partial artifact at {} is incomplete",
                        output_path.display()
                    );
                }
                println!();
            }
            Err(e.into())
        }
    }
}
