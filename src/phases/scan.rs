//! Phase 1: Include Scanning
//!
//! This is the first phase of the `consolidate` execution pipeline. Its
//! responsibility is to discover every local file reachable from the roots
//! through quoted include directives, building the dependency graph and the
//! deduplicated system-header set in a single pass.
//!
//! ## Process
//!
//! 1.  **Depth-First Traversal**: Each root is walked depth-first; a quoted
//!     include is fully walked before its includer's next line, so the
//!     graph's registration order matches the order a reader would first
//!     encounter each file. The traversal runs on an explicit frame stack,
//!     so arbitrarily deep include chains cannot exhaust the call stack.
//!
//! 2.  **Memoization**: A file already present in the graph is never
//!     reprocessed. Registration happens BEFORE a file's own includes are
//!     walked, which is what terminates both diamond patterns and files
//!     that transitively re-include themselves.
//!
//! 3.  **Graceful Degradation**: A quoted include that cannot be located
//!     registers an empty placeholder node and a `warn` diagnostic; a
//!     malformed directive line is diagnosed and skipped. Neither aborts
//!     the scan.
//!
//! This phase produces the `IncludeGraph` and `SystemIncludes` consumed by
//! Phase 2's consolidation and Phase 3's emission.

use log::warn;

use super::{IncludeGraph, SourceNode, SystemIncludes};
use crate::directive::{Directive, DirectiveParser};
use crate::error::Result;
use crate::locator::FileLocator;
use crate::source;

/// Everything the scan phase hands to the rest of the pipeline.
#[derive(Debug)]
pub struct ScanResult {
    pub graph: IncludeGraph,
    pub system_includes: SystemIncludes,
}

impl ScanResult {
    /// Reachable local includes that were never located.
    pub fn missing_files(&self) -> usize {
        self.graph.nodes().filter(|n| !n.located).count()
    }
}

/// Execute Phase 1: build the include graph for the given roots.
///
/// Roots are processed in the given order. After this returns, every name
/// reachable from a root (including names whose files were never located)
/// is present as a graph key, so the ordering phase can rely on every
/// dependency edge pointing at a real node.
pub fn execute(roots: &[String], locator: &FileLocator) -> Result<ScanResult> {
    let mut builder = GraphBuilder::new(locator);
    for root in roots {
        builder.ensure(root)?;
    }
    Ok(builder.finish())
}

/// Owns the graph and system-include set while the scan runs.
struct GraphBuilder<'a> {
    locator: &'a FileLocator,
    parser: DirectiveParser,
    graph: IncludeGraph,
    system_includes: SystemIncludes,
}

/// One file whose dependency list is still being walked.
struct ScanFrame {
    dependencies: Vec<String>,
    next: usize,
}

impl<'a> GraphBuilder<'a> {
    fn new(locator: &'a FileLocator) -> Self {
        Self {
            locator,
            parser: DirectiveParser::new(),
            graph: IncludeGraph::new(),
            system_includes: SystemIncludes::new(),
        }
    }

    /// Make sure `filename` and everything reachable from it is registered.
    ///
    /// Already-registered names return immediately. The walk itself is an
    /// explicit stack of scan frames rather than call recursion.
    fn ensure(&mut self, filename: &str) -> Result<()> {
        if self.graph.contains(filename) {
            return Ok(());
        }

        let mut frames = vec![ScanFrame {
            dependencies: self.load(filename)?,
            next: 0,
        }];

        while let Some(frame) = frames.last_mut() {
            if frame.next >= frame.dependencies.len() {
                frames.pop();
                continue;
            }
            let dep = frame.dependencies[frame.next].clone();
            frame.next += 1;

            if !self.graph.contains(&dep) {
                let dependencies = self.load(&dep)?;
                frames.push(ScanFrame {
                    dependencies,
                    next: 0,
                });
            }
        }

        Ok(())
    }

    /// Locate, read, and parse one file, register its node, and return its
    /// dependency list for the caller's frame stack.
    ///
    /// A file that cannot be located becomes an empty placeholder node so
    /// that every dependency edge in the graph keeps pointing at a key.
    fn load(&mut self, filename: &str) -> Result<Vec<String>> {
        let (lines, located) = match self.locator.locate(filename)? {
            Some(path) => (source::read_lines(&path)?, true),
            None => {
                warn!("include file not found: {}", filename);
                (Vec::new(), false)
            }
        };
        let mut node = SourceNode::new(filename.to_string(), lines, located);

        let mut dependencies = Vec::new();
        for line in &node.lines {
            match self.parser.parse(line) {
                Some(Directive::Local(name)) => dependencies.push(name),
                Some(Directive::System(name)) => self.system_includes.insert(name),
                Some(Directive::Malformed) => {
                    warn!("malformed include line: {}", line.trim());
                }
                None => {}
            }
        }

        node.dependencies = dependencies.clone();
        self.graph.insert(node);
        Ok(dependencies)
    }

    fn finish(self) -> ScanResult {
        ScanResult {
            graph: self.graph,
            system_includes: self.system_includes,
        }
    }
}
