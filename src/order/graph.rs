//! Directed dependency graph and deterministic module ordering.
//!
//! Edges point provider -> dependent, so a topological sort lists every
//! provider strictly before the modules that import its symbols. Modules
//! that participate in no edge at all are appended after the sorted
//! prefix in lexicographic order, which keeps the full output stable from
//! run to run.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::OrderError;
use crate::order::resolve::DependencyMap;

/// Directed graph over module names, built fresh per invocation.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// provider -> set of dependents
    edges: BTreeMap<String, BTreeSet<String>>,
    /// every module that participates in at least one edge
    nodes: BTreeSet<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

struct Frame {
    node: String,
    dependents: Vec<String>,
    next: usize,
}

impl DependencyGraph {
    /// Build the graph from the Dependency Map: one `provider -> dependent`
    /// edge per pair. A module whose provider set is empty contributes no
    /// node and lands in the unordered remainder.
    pub fn from_dependency_map(dependencies: &DependencyMap) -> Self {
        let mut graph = Self::default();
        for (dependent, providers) in dependencies {
            for provider in providers {
                graph.nodes.insert(provider.clone());
                graph.nodes.insert(dependent.clone());
                graph
                    .edges
                    .entry(provider.clone())
                    .or_default()
                    .insert(dependent.clone());
            }
        }
        graph
    }

    fn dependents_of(&self, node: &str) -> Vec<String> {
        self.edges
            .get(node)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Topological sort via iterative depth-first search with three-color
    /// visit state. Roots and adjacency are iterated in lexicographic
    /// order, so the result is deterministic.
    pub fn toposort(&self) -> Result<Vec<String>, OrderError> {
        let mut color: BTreeMap<String, Color> = self
            .nodes
            .iter()
            .map(|n| (n.clone(), Color::White))
            .collect();
        let mut finished: Vec<String> = Vec::with_capacity(self.nodes.len());

        for root in &self.nodes {
            if color.get(root) != Some(&Color::White) {
                continue;
            }
            color.insert(root.clone(), Color::Gray);
            let mut stack = vec![Frame {
                node: root.clone(),
                dependents: self.dependents_of(root),
                next: 0,
            }];

            while let Some(frame) = stack.last_mut() {
                if frame.next < frame.dependents.len() {
                    let next = frame.dependents[frame.next].clone();
                    frame.next += 1;
                    match color.get(&next).copied().unwrap_or(Color::White) {
                        Color::White => {
                            color.insert(next.clone(), Color::Gray);
                            let dependents = self.dependents_of(&next);
                            stack.push(Frame {
                                node: next,
                                dependents,
                                next: 0,
                            });
                        }
                        Color::Gray => {
                            // Back edge: the gray frames from `next` to the
                            // top of the stack are the cycle.
                            return Err(OrderError::DependencyCycle {
                                modules: cycle_members(&stack, &next),
                            });
                        }
                        Color::Black => {}
                    }
                } else {
                    let done = frame.node.clone();
                    stack.pop();
                    color.insert(done.clone(), Color::Black);
                    finished.push(done);
                }
            }
        }

        // Reverse postorder puts providers before dependents
        finished.reverse();
        Ok(finished)
    }
}

fn cycle_members(stack: &[Frame], reentered: &str) -> Vec<String> {
    let start = stack
        .iter()
        .position(|frame| frame.node == reentered)
        .unwrap_or(0);
    stack[start..].iter().map(|frame| frame.node.clone()).collect()
}

/// Produce the final Ordered Module List: topologically sorted dependent
/// portion first, then every module that participated in no edge, in
/// lexicographic order. Every module appears exactly once.
pub fn order_modules(
    all_modules: &[String],
    dependencies: &DependencyMap,
) -> Result<Vec<String>, OrderError> {
    let graph = DependencyGraph::from_dependency_map(dependencies);
    let mut order = graph.toposort()?;

    let connected: BTreeSet<&str> = order.iter().map(String::as_str).collect();
    let mut remainder: Vec<String> = all_modules
        .iter()
        .filter(|name| !connected.contains(name.as_str()))
        .cloned()
        .collect();
    remainder.sort();
    order.extend(remainder);

    Ok(order)
}
