//! Weighted undirected graph model.
//!
//! Adjacency-map representation over string location identifiers. Edges
//! are symmetric: inserting `a - b` stores both directions with the same
//! weight. The graph records the order in which nodes were first
//! mentioned; that insertion order is the stable tie-break key for every
//! deterministic ordering downstream (grouping, slot allocation).
//!
//! Neighbor iteration is ordered by neighbor name, so traversals over
//! the adjacency structure are reproducible across runs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::PlanError;

/// A weighted undirected graph keyed by location name.
///
/// The graph exclusively owns its adjacency structure; mutation happens
/// only through [`add_edge`](WeightedGraph::add_edge) and
/// [`add_node`](WeightedGraph::add_node).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightedGraph {
    /// node → (neighbor → weight), symmetric.
    adjacency: HashMap<String, BTreeMap<String, f64>>,
    /// Nodes in first-mention order.
    order: Vec<String>,
}

impl WeightedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a bidirectional edge between `from` and `to`.
    ///
    /// Both endpoints are registered on first mention. Repeating an
    /// identical call is idempotent; a later call for the same pair
    /// overwrites the stored weight symmetrically.
    ///
    /// # Errors
    /// [`PlanError::InvalidEdgeWeight`] when the weight is negative or
    /// non-finite. Shortest-path correctness depends on non-negativity.
    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: f64,
    ) -> Result<(), PlanError> {
        let from = from.into();
        let to = to.into();

        if !weight.is_finite() || weight < 0.0 {
            return Err(PlanError::InvalidEdgeWeight { from, to, weight });
        }

        self.touch(&from);
        self.touch(&to);

        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            neighbors.insert(to.clone(), weight);
        }
        if let Some(neighbors) = self.adjacency.get_mut(&to) {
            neighbors.insert(from, weight);
        }

        Ok(())
    }

    /// Registers a node without any edges (an isolated location).
    ///
    /// No-op if the node is already present.
    pub fn add_node(&mut self, node: impl Into<String>) {
        self.touch(&node.into());
    }

    fn touch(&mut self, node: &str) {
        if !self.adjacency.contains_key(node) {
            self.adjacency.insert(node.to_string(), BTreeMap::new());
            self.order.push(node.to_string());
        }
    }

    /// Whether the node is present in the graph.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All nodes in first-mention order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Neighbors of a node with edge weights, ordered by neighbor name.
    ///
    /// Empty for isolated or unknown nodes.
    pub fn neighbors(&self, node: &str) -> impl Iterator<Item = (&str, f64)> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .map(|(neighbor, weight)| (neighbor.as_str(), *weight))
    }

    /// Weight of the edge between two nodes, if one exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Number of direct neighbors of a node (0 for unknown nodes).
    pub fn degree(&self, node: &str) -> usize {
        self.adjacency.get(node).map_or(0, BTreeMap::len)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(BTreeMap::len).sum();
        directed / 2
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
