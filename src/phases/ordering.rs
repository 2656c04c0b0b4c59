//! Phase 2: Topological Consolidation
//!
//! This is the second phase of the `consolidate` execution pipeline. Its
//! responsibility is to drain the include graph into an emission order in
//! which every file appears strictly after all files it locally depends on.
//!
//! ## Process
//!
//! 1.  **Pending Counters**: Each node's dependency list is turned into a
//!     per-name occurrence counter. Duplicate edges keep their multiplicity:
//!     a file that includes the same name twice holds two pending
//!     occurrences of it.
//!
//! 2.  **Ready Queue**: Nodes with no pending occurrences enter a FIFO
//!     queue, seeded and refilled in graph registration order. Free-node
//!     selection therefore never depends on any map's iteration order, and
//!     two runs over identical inputs produce identical output.
//!
//! 3.  **Emission Steps**: Each step pops the queue front, removes the node
//!     from the graph, and satisfies exactly ONE pending occurrence of its
//!     name in every remaining node. An emission satisfies one occurrence,
//!     so a duplicated edge is never fully satisfied and eventually
//!     surfaces as a cycle failure, matching the reference behavior.
//!
//! When the queue runs dry while the graph is non-empty, the local-include
//! relation contains a cycle (or an unsatisfiable duplicate edge) and the
//! run fails with `CycleDetected`. Nodes already emitted remain valid; the
//! run as a whole did not complete.

use std::collections::{HashMap, VecDeque};

use super::{EmissionOrder, IncludeGraph, SourceNode};
use crate::error::{Error, Result};

/// Execute Phase 2: compute the complete emission order for a graph.
///
/// Convenience over [`Consolidator`] for callers that only need the order
/// (validation, tests) rather than streaming node bodies.
pub fn execute(graph: IncludeGraph) -> Result<EmissionOrder> {
    let mut order = Vec::new();
    for step in Consolidator::new(graph) {
        order.push(step?.filename);
    }
    Ok(EmissionOrder::new(order))
}

/// Occurrence counters for one node's unsatisfied dependencies.
#[derive(Debug, Default)]
struct Pending {
    counts: HashMap<String, usize>,
    total: usize,
}

impl Pending {
    fn from_dependencies(dependencies: &[String]) -> Self {
        let mut pending = Self::default();
        for name in dependencies {
            *pending.counts.entry(name.clone()).or_insert(0) += 1;
            pending.total += 1;
        }
        pending
    }

    /// Satisfy one occurrence of `name`, if any is pending.
    fn satisfy_one(&mut self, name: &str) -> bool {
        match self.counts.get_mut(name) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    fn is_free(&self) -> bool {
        self.total == 0
    }
}

/// Streaming consolidator: an iterator yielding one free node per step.
///
/// Yields `Err(CycleDetected)` exactly once if the graph wedges, then
/// fuses. Streaming (rather than collecting the order up front) is what
/// lets the emit phase leave a partial artifact on disk when a cycle is
/// only discovered midway.
#[derive(Debug)]
pub struct Consolidator {
    graph: IncludeGraph,
    pending: HashMap<String, Pending>,
    ready: VecDeque<String>,
    failed: bool,
}

impl Consolidator {
    pub fn new(graph: IncludeGraph) -> Self {
        let mut pending = HashMap::new();
        let mut ready = VecDeque::new();

        for node in graph.nodes() {
            let p = Pending::from_dependencies(&node.dependencies);
            if p.is_free() {
                ready.push_back(node.filename.clone());
            }
            pending.insert(node.filename.clone(), p);
        }

        Self {
            graph,
            pending,
            ready,
            failed: false,
        }
    }

    /// Names still in the graph, in registration order.
    pub fn remaining(&self) -> Vec<String> {
        self.graph.names().map(str::to_string).collect()
    }

    /// Reconstruct a blocked dependency chain for the cycle diagnostic.
    ///
    /// Follows, from the first remaining node, the first still-pending
    /// dependency of each node until a name repeats (a true cycle) or the
    /// chain leaves the graph (an already-emitted name that is still
    /// pending, i.e. a duplicated edge).
    fn blocked_chain(&self) -> String {
        let mut path: Vec<String> = Vec::new();
        let mut current = match self.graph.names().next() {
            Some(name) => name.to_string(),
            None => return String::new(),
        };

        loop {
            if path.contains(&current) {
                path.push(current);
                break;
            }
            path.push(current.clone());

            let node = match self.graph.get(&current) {
                Some(node) => node,
                None => break,
            };
            let pending = &self.pending[&current];
            let next = node
                .dependencies
                .iter()
                .find(|dep| pending.counts.get(*dep).is_some_and(|c| *c > 0));
            match next {
                Some(dep) => current = dep.clone(),
                None => break,
            }
        }

        path.join(" -> ")
    }
}

impl Iterator for Consolidator {
    type Item = Result<SourceNode>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let name = match self.ready.pop_front() {
            Some(name) => name,
            None if self.graph.is_empty() => return None,
            None => {
                self.failed = true;
                return Some(Err(Error::CycleDetected {
                    cycle: self.blocked_chain(),
                }));
            }
        };

        let node = self
            .graph
            .remove(&name)
            .expect("ready queue entries are graph keys");
        self.pending.remove(&name);

        // Satisfy one occurrence of the emitted name in every remaining
        // node, enqueueing newly free nodes in registration order.
        for other in self.graph.names() {
            if let Some(pending) = self.pending.get_mut(other) {
                if pending.satisfy_one(&name) && pending.is_free() {
                    self.ready.push_back(other.to_string());
                }
            }
        }

        Some(Ok(node))
    }
}
