//! Shortest-route results: distances and the predecessor tree.
//!
//! A [`RouteTree`] is built once per query by [`crate::routing`] and is
//! immutable afterward. Unreachable nodes keep an infinite distance and
//! no predecessor; the start has distance zero.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Distances and predecessors from a single start location.
///
/// The predecessor links form a tree rooted at the start: a predecessor
/// always points toward a strictly smaller finalized distance, so chains
/// are acyclic and reach the start in fewer than `|V|` steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteTree {
    start: String,
    distances: HashMap<String, f64>,
    predecessors: HashMap<String, Option<String>>,
}

impl RouteTree {
    pub(crate) fn new(
        start: impl Into<String>,
        distances: HashMap<String, f64>,
        predecessors: HashMap<String, Option<String>>,
    ) -> Self {
        Self {
            start: start.into(),
            distances,
            predecessors,
        }
    }

    /// The start location this tree was computed from.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Shortest distance from the start, `f64::INFINITY` when the node
    /// is unreachable or unknown.
    pub fn distance_to(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Whether the node was reached from the start.
    pub fn is_reachable(&self, node: &str) -> bool {
        self.distance_to(node).is_finite()
    }

    /// The node preceding `node` on its shortest path, `None` for the
    /// start and for unreached nodes.
    pub fn predecessor(&self, node: &str) -> Option<&str> {
        self.predecessors.get(node)?.as_deref()
    }

    /// Extracts the full route from the start to `node`, inclusive of
    /// both endpoints.
    ///
    /// Returns `None` when the node is unknown or unreachable. The route
    /// to the start itself is the single-stop route with distance zero.
    pub fn route_to(&self, node: &str) -> Option<Route> {
        let distance = *self.distances.get(node)?;
        if !distance.is_finite() {
            return None;
        }

        let mut stops = vec![node.to_string()];
        let mut current = node;
        while let Some(previous) = self.predecessor(current) {
            stops.push(previous.to_string());
            current = previous;
        }
        stops.reverse();

        Some(Route { stops, distance })
    }

    /// Nodes covered by this tree (reachable or not).
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }
}

/// An extracted shortest path: ordered stops from the start to a
/// destination, plus its total distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Stops from the start to the destination, both inclusive.
    pub stops: Vec<String>,
    /// Total route distance.
    pub distance: f64,
}

impl Route {
    /// Final stop of the route.
    pub fn destination(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}
