//! Input descriptions supplied by the hosting layer.
//!
//! The core consumes a graph either as an ordered sequence of weighted
//! edge triples or as an entity→members roster from which a conflict
//! graph is derived. Parsing user input into these structures — and
//! rendering results back out — belongs to the caller.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::WeightedGraph;
use crate::error::PlanError;

/// A single bidirectional edge in a graph description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl EdgeSpec {
    /// Creates a new edge spec.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Ordered description of a weighted graph.
///
/// Nodes listed in `nodes` are registered first (this is how isolated
/// locations enter the graph, and how the caller pins node order);
/// edge endpoints register on first mention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Up-front node registrations, in order.
    pub nodes: Vec<String>,
    /// Bidirectional edges, in order.
    pub edges: Vec<EdgeSpec>,
}

impl GraphDescription {
    /// Creates an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node up front (isolated until an edge mentions it).
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Appends a bidirectional edge.
    pub fn with_edge(mut self, from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        self.edges.push(EdgeSpec::new(from, to, weight));
        self
    }

    /// Builds the graph: nodes first, then edges in listed order.
    ///
    /// # Errors
    /// [`PlanError::InvalidEdgeWeight`] on the first negative or
    /// non-finite weight. Run [`crate::validation`] first to collect
    /// every issue at once.
    pub fn build(&self) -> Result<WeightedGraph, PlanError> {
        let mut graph = WeightedGraph::new();
        for node in &self.nodes {
            graph.add_node(node);
        }
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }
}

/// One entity with its member list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Entity identifier (a class, an exam, a shift).
    pub entity: String,
    /// Members enrolled in the entity.
    pub members: Vec<String>,
}

/// Entity → members description for conflict-graph construction.
///
/// Two entities conflict when they share at least one member; the
/// derived edge is weighted by the number of shared members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entity with its members.
    pub fn with_entry(mut self, entity: impl Into<String>, members: Vec<String>) -> Self {
        self.entries.push(RosterEntry {
            entity: entity.into(),
            members,
        });
        self
    }

    /// Derives the conflict graph over the roster's entities.
    ///
    /// Entities are registered as nodes in listed order, so an entity
    /// without conflicts still appears (isolated) in the graph.
    pub fn conflict_graph(&self) -> Result<WeightedGraph, PlanError> {
        let mut graph = WeightedGraph::new();
        for entry in &self.entries {
            graph.add_node(&entry.entity);
        }

        let member_sets: Vec<HashSet<&str>> = self
            .entries
            .iter()
            .map(|e| e.members.iter().map(String::as_str).collect())
            .collect();

        for i in 0..self.entries.len() {
            for j in (i + 1)..self.entries.len() {
                let shared = member_sets[i].intersection(&member_sets[j]).count();
                if shared > 0 {
                    graph.add_edge(
                        &self.entries[i].entity,
                        &self.entries[j].entity,
                        shared as f64,
                    )?;
                }
            }
        }

        Ok(graph)
    }
}

/// Either input surface a plan request can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphSource {
    /// Explicit weighted edge triples.
    Description(GraphDescription),
    /// Entity→members roster; the conflict graph is derived.
    Roster(Roster),
}

impl GraphSource {
    /// Builds the graph from whichever surface was supplied.
    pub fn build(&self) -> Result<WeightedGraph, PlanError> {
        match self {
            GraphSource::Description(description) => description.build(),
            GraphSource::Roster(roster) => roster.conflict_graph(),
        }
    }
}
