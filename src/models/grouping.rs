//! Group assignment model.
//!
//! A group is an integer cluster id stamped onto nodes by a grouping
//! policy. Ids are 0-based, contiguous, and allocated in creation order.
//! The assignment also records the order in which nodes *first* received
//! a group — re-assigning a node keeps its original position — because
//! slot allocation iterates nodes in exactly that order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Policy selecting how nodes are partitioned into groups.
///
/// Both policies deliberately assign the *same* group to directly
/// related nodes (chain ancestors, direct neighbors) — the inverse of a
/// conflict-avoiding coloring. Callers relying on "no two adjacent
/// nodes share a slot" must not use them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupingPolicy {
    /// Propagate a shared group backward along shortest-path predecessor
    /// chains, farthest node first. Requires route data.
    #[default]
    PathPropagation,
    /// Propagate a shared group across direct neighbors, most-connected
    /// node first. Needs only the adjacency structure.
    AdjacencyPropagation,
}

/// Node → group id assignment produced by a grouping policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupAssignment {
    groups: HashMap<String, usize>,
    /// Nodes in first-assignment order.
    order: Vec<String>,
    group_count: usize,
}

impl GroupAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next unused group id.
    pub fn allocate(&mut self) -> usize {
        let id = self.group_count;
        self.group_count += 1;
        id
    }

    /// Assigns a group to a node, overwriting any previous group.
    ///
    /// A node keeps its first-assignment position in the iteration
    /// order even when its group is later overwritten.
    pub fn assign(&mut self, node: impl Into<String>, group: usize) {
        let node = node.into();
        if !self.groups.contains_key(&node) {
            self.order.push(node.clone());
        }
        self.groups.insert(node, group);
        self.group_count = self.group_count.max(group + 1);
    }

    /// Group of a node, if assigned.
    pub fn group_of(&self, node: &str) -> Option<usize> {
        self.groups.get(node).copied()
    }

    /// Whether the node has a group.
    pub fn contains(&self, node: &str) -> bool {
        self.groups.contains_key(node)
    }

    /// Number of distinct group ids allocated.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Number of assigned nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no node has been assigned.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(node, group)` pairs in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .filter_map(|node| self.groups.get(node).map(|&g| (node.as_str(), g)))
    }
}
