//! Single-source shortest paths.
//!
//! Classic Dijkstra over non-negative edge weights: tentative distances
//! start at infinity (zero at the start), a binary-heap frontier yields
//! the minimum-distance unfinalized node, and each neighbor edge is
//! relaxed. Stale frontier entries — a node popped with a distance
//! greater than its finalized one — are skipped rather than reprocessed.
//!
//! # Complexity
//! O(E log V) with the binary-heap frontier.
//!
//! # References
//! - Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 24.3

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::PlanError;
use crate::models::{RouteTree, WeightedGraph};

/// Frontier entry, ordered as a min-heap by tentative distance.
#[derive(Debug, Clone, PartialEq)]
struct Frontier {
    distance: f64,
    node: String,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; node name settles equal distances
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes shortest distances and the predecessor tree from `start` to
/// every node of the graph.
///
/// Unreachable nodes keep the infinite sentinel and no predecessor.
///
/// # Errors
/// [`PlanError::UnknownStart`] when `start` is not a node of the graph.
pub fn shortest_paths(graph: &WeightedGraph, start: &str) -> Result<RouteTree, PlanError> {
    if !graph.contains(start) {
        return Err(PlanError::UnknownStart(start.to_string()));
    }

    let mut distances: HashMap<String, f64> = graph
        .nodes()
        .map(|node| (node.to_string(), f64::INFINITY))
        .collect();
    let mut predecessors: HashMap<String, Option<String>> = graph
        .nodes()
        .map(|node| (node.to_string(), None))
        .collect();

    distances.insert(start.to_string(), 0.0);

    let mut frontier = BinaryHeap::new();
    frontier.push(Frontier {
        distance: 0.0,
        node: start.to_string(),
    });

    while let Some(Frontier { distance, node }) = frontier.pop() {
        // Stale entry: this node was already finalized at a smaller distance
        if distance > distances.get(&node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(&node) {
            let candidate = distance + weight;
            if candidate < distances.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                distances.insert(neighbor.to_string(), candidate);
                predecessors.insert(neighbor.to_string(), Some(node.clone()));
                frontier.push(Frontier {
                    distance: candidate,
                    node: neighbor.to_string(),
                });
            }
        }
    }

    Ok(RouteTree::new(start, distances, predecessors))
}
