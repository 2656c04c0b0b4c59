//! Implementation of the 3 phases of the consolidate merge operation.
//!
//! ## Overview
//!
//! The merge operation follows 3 phases:
//! 1. Scan - Recursively discover local includes into a dependency graph,
//!    collecting system-header names along the way
//! 2. Ordering - Drain the graph into a deterministic, dependency-respecting
//!    emission order (or fail on a cycle)
//! 3. Emit - Serialize the system-include block and the ordered file bodies
//!    to the output artifact
//!
//! Each phase depends only on the previous phases and the leaf collaborators
//! (locator, source reading, directive parsing).

use std::collections::btree_set;
use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

// Phase modules
pub mod emit;
pub mod orchestrator;
pub mod ordering;
pub mod scan;

// Numbered aliases matching the pipeline order
pub use emit as phase3;
pub use ordering as phase2;
pub use scan as phase1;

/// One local file discovered during the scan, keyed in the graph by the
/// include name exactly as written.
#[derive(Debug, Clone, Serialize)]
pub struct SourceNode {
    /// Include name used as the graph key
    pub filename: String,
    /// Raw lines as loaded, original terminators preserved; empty when the
    /// file was never located
    #[serde(skip)]
    pub lines: Vec<String>,
    /// Local-include names in encounter order. One entry per occurrence:
    /// including the same name twice records two distinct edges.
    pub dependencies: Vec<String>,
    /// Whether the file was found on the search path. Placeholder nodes for
    /// missing files carry `false`; this only affects reporting.
    pub located: bool,
}

impl SourceNode {
    pub fn new(filename: String, lines: Vec<String>, located: bool) -> Self {
        Self {
            filename,
            lines,
            dependencies: Vec::new(),
            located,
        }
    }

    pub fn add_dependency(&mut self, name: String) {
        self.dependencies.push(name);
    }

    /// Body lines that survive emission: everything whose trimmed form does
    /// not begin with `#`. This drops include directives and, deliberately,
    /// any other directive-like line.
    pub fn filtered_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| !line.trim().starts_with('#'))
    }
}

/// Dependency graph of local files, shrinking one node per consolidation
/// step.
///
/// Alongside the name-to-node map, the graph records registration order
/// (root order, then depth-first discovery order). That order is the stable
/// enumeration behind every deterministic choice downstream: free-node
/// selection, tree display, reporting.
#[derive(Debug, Clone, Default)]
pub struct IncludeGraph {
    nodes: HashMap<String, SourceNode>,
    order: Vec<String>,
}

impl IncludeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. First registration wins; scanning never re-registers
    /// a known name, so a duplicate insert is a caller bug.
    pub fn insert(&mut self, node: SourceNode) {
        debug_assert!(!self.nodes.contains_key(&node.filename));
        self.order.push(node.filename.clone());
        self.nodes.insert(node.filename.clone(), node);
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.nodes.contains_key(filename)
    }

    pub fn get(&self, filename: &str) -> Option<&SourceNode> {
        self.nodes.get(filename)
    }

    pub fn get_mut(&mut self, filename: &str) -> Option<&mut SourceNode> {
        self.nodes.get_mut(filename)
    }

    /// Remove a node, preserving the relative registration order of the
    /// remaining nodes.
    pub fn remove(&mut self, filename: &str) -> Option<SourceNode> {
        let node = self.nodes.remove(filename)?;
        self.order.retain(|name| name != filename);
        Some(node)
    }

    /// Node names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &SourceNode> {
        self.order.iter().filter_map(|name| self.nodes.get(name))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Deduplicated set of opaque system-header names.
///
/// Append-only during the scan phase, read-only thereafter. Iteration is
/// sorted, which is what makes the emitted system-include block
/// deterministic run-to-run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SystemIncludes(BTreeSet<String>);

impl SystemIncludes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String) {
        self.0.insert(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Header names in sorted order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SystemIncludes {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Emission order produced by a completed consolidation.
#[derive(Debug, Clone)]
pub struct EmissionOrder {
    /// Filenames in the order their bodies are emitted.
    pub order: Vec<String>,
}

impl EmissionOrder {
    pub fn new(order: Vec<String>) -> Self {
        Self { order }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}

/// Summary of a completed merge, for CLI reporting.
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Local files emitted (graph nodes drained)
    pub local_files: usize,
    /// Distinct system headers in the include block
    pub system_headers: usize,
    /// Reachable local includes that were never located
    pub missing_files: usize,
    /// Total bytes written to the artifact
    pub output_bytes: usize,
}
