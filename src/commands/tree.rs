//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays the include
//! graph discovered from the given roots in a hierarchical format.
//!
//! ## Functionality
//!
//! - **Include Tree Visualization**: Each root expands into the local files
//!   it includes, recursively; files that were never located are marked.
//! - **Cycle Safety**: A file already on the current include path is shown
//!   as a `(cycle)` leaf instead of being expanded again.
//! - **Depth Control**: Supports `--depth` flag to limit tree depth.
//! - **JSON Output**: `--format json` dumps the graph (nodes, edges,
//!   system headers) for tooling.
//!
//! This command is a safe, read-only operation that does not modify any
//! files.

use anyhow::Result;
use clap::{Args, ValueEnum};
use ptree::{print_tree, TreeItem};
use serde::Serialize;
use std::path::PathBuf;

use consolidate::locator::FileLocator;
use consolidate::output::{emoji, OutputConfig};
use consolidate::phases::scan::{self, ScanResult};
use consolidate::phases::IncludeGraph;

use super::resolve_inputs;

/// Output format for the tree command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    /// Hierarchical tree rendering
    Text,
    /// Machine-readable graph dump
    Json,
}

/// Display the include graph as a tree
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Root source files to scan, in order
    #[arg(value_name = "ROOT")]
    pub roots: Vec<String>,

    /// Additional include search directory (repeatable)
    #[arg(short = 'I', long = "include-dir", value_name = "DIR")]
    pub include_dirs: Vec<PathBuf>,

    /// Path to the manifest file
    #[arg(short, long, value_name = "FILE", env = "CONSOLIDATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum depth to display in the tree.
    ///
    /// If not specified, displays the full tree. Use 0 to show only the
    /// roots, 1 to show one level of includes, etc.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = TreeFormat::Text)]
    pub format: TreeFormat,
}

/// Execute the `tree` command.
///
/// Scans the include graph from the resolved roots and renders it either
/// as a hierarchy or as JSON. Nothing is consolidated and nothing is
/// written.
pub fn execute(args: TreeArgs, color_flag: &str) -> Result<()> {
    let inputs = resolve_inputs(args.config.as_deref(), &args.roots, &args.include_dirs)?;
    if inputs.roots.is_empty() {
        anyhow::bail!(
            "No root files given. Pass them as arguments or list them under 'roots' in {}",
            consolidate::config::DEFAULT_MANIFEST
        );
    }

    let locator = FileLocator::new(&inputs.include_dirs);
    let result = scan::execute(&inputs.roots, &locator)?;

    match args.format {
        TreeFormat::Text => print_text_tree(&args, color_flag, &inputs.roots, &result)?,
        TreeFormat::Json => print_json_graph(&inputs.roots, &result)?,
    }

    Ok(())
}

fn print_text_tree(
    args: &TreeArgs,
    color_flag: &str,
    roots: &[String],
    result: &ScanResult,
) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!(
        "{} Include tree for: {}",
        emoji(&out, "🌳", "[TREE]"),
        roots.join(", ")
    );

    let max_depth = args.depth.unwrap_or(usize::MAX);
    for root in roots {
        let node = build_tree_node(&result.graph, root, max_depth, 0, &mut Vec::new());
        print_tree(&node).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
    }

    if !result.system_includes.is_empty() {
        println!();
        println!(
            "{} System headers: {}",
            emoji(&out, "📦", "[SYS]"),
            result
                .system_includes
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}

/// Build a display node for one file, cutting repeats on the current path.
fn build_tree_node(
    graph: &IncludeGraph,
    filename: &str,
    max_depth: usize,
    current_depth: usize,
    path: &mut Vec<String>,
) -> TreeNode {
    if path.iter().any(|seen| seen == filename) {
        return TreeNode {
            label: format!("{} (cycle)", filename),
            children: vec![],
        };
    }

    let node = match graph.get(filename) {
        Some(node) => node,
        None => {
            return TreeNode {
                label: filename.to_string(),
                children: vec![],
            }
        }
    };

    let label = if node.located {
        node.filename.clone()
    } else {
        format!("{} (not found)", node.filename)
    };

    if current_depth >= max_depth || node.dependencies.is_empty() {
        return TreeNode {
            label,
            children: vec![],
        };
    }

    path.push(filename.to_string());
    let children = node
        .dependencies
        .iter()
        .map(|dep| build_tree_node(graph, dep, max_depth, current_depth + 1, path))
        .collect();
    path.pop();

    TreeNode { label, children }
}

/// Machine-readable dump of one scan.
#[derive(Serialize)]
struct GraphDump<'a> {
    roots: &'a [String],
    files: Vec<&'a consolidate::phases::SourceNode>,
    system_includes: &'a consolidate::phases::SystemIncludes,
}

fn print_json_graph(roots: &[String], result: &ScanResult) -> Result<()> {
    let dump = GraphDump {
        roots,
        files: result.graph.nodes().collect(),
        system_includes: &result.system_includes,
    };
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> std::borrow::Cow<'_, [Self::Child]> {
        std::borrow::Cow::Borrowed(&self.children)
    }
}
