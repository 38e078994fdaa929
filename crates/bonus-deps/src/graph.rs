//! The bonus dependency graph.
//!
//! # Graph Representation
//!
//! The graph uses petgraph's `DiGraph` with edges directed from the
//! **problem holding the bonus to the problem it unlocks**. Nodes contain
//! `ProblemId` values, edges carry the bonus category.
//!
//! The graph is a multigraph: adding the same link twice yields two edges.
//! Nothing is ever removed, so petgraph's edge indices match insertion order.

use crate::domain::{ProblemId, ProblemRecord};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde_json::Value;
use std::collections::HashMap;
use tracing::trace;

/// A single link as stored in the graph, borrowed for iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'a> {
    /// The problem holding the bonus.
    pub from: &'a ProblemId,
    /// The problem the bonus unlocks.
    pub to: &'a ProblemId,
    /// The bonus category.
    pub bonus: &'a Value,
}

/// Directed multigraph of bonus unlock links.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    graph: DiGraph<ProblemId, Value>,

    /// Every node in `graph` has exactly one entry here.
    node_map: HashMap<ProblemId, NodeIndex>,
}

impl DependencyGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge `from -> to`, creating either node on first use.
    pub fn add_edge(&mut self, from: &ProblemId, to: &ProblemId, bonus: Value) {
        let from_node = self.node(from);
        let to_node = self.node(to);
        trace!(from = %from, to = %to, bonus = %bonus, "Adding bonus edge");
        self.graph.add_edge(from_node, to_node, bonus);
    }

    /// Add one edge per bonus entry of `record`, in entry order.
    pub fn add_record(&mut self, record: &ProblemRecord) {
        for entry in &record.bonuses {
            self.add_edge(&record.id, &entry.problem, entry.bonus.clone());
        }
    }

    fn node(&mut self, id: &ProblemId) -> NodeIndex {
        if let Some(&index) = self.node_map.get(id) {
            return index;
        }
        let index = self.graph.add_node(id.clone());
        self.node_map.insert(id.clone(), index);
        index
    }

    /// Number of distinct problems mentioned by any edge.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if no edge has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Iterate over edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.graph.edge_references().map(|edge| Edge {
            from: &self.graph[edge.source()],
            to: &self.graph[edge.target()],
            bonus: edge.weight(),
        })
    }
}
