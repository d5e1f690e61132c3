//! Route-aware scheduling library.
//!
//! Computes single-source shortest paths over a weighted undirected
//! graph of locations (or a conflict graph derived from an
//! entity→members roster), partitions the nodes into groups, and maps
//! the groups onto a bounded set of time slots — named days or clock
//! intervals with period rollover.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `WeightedGraph`, `RouteTree`, `Route`,
//!   `GroupAssignment`, `DayPlan`, `IntervalPlan`, `TimeWindow`, plus
//!   the `GraphDescription`/`Roster` input surfaces
//! - **`routing`**: Single-source shortest paths (Dijkstra)
//! - **`grouping`**: Path-propagation and adjacency-propagation
//!   partitioning policies
//! - **`allocation`**: Named-day and clock-interval slot allocation
//! - **`planner`**: Request objects and pipeline orchestration
//! - **`validation`**: Input integrity checks (weights, names, start)
//!
//! # Architecture
//!
//! The crate is a pure computation core: it consumes a graph
//! description and a slot specification from the hosting layer and
//! returns read-only snapshots (graph, routes, groups, schedule)
//! suitable for rendering or serialization. Input capture, plotting,
//! and persistence belong to the caller.
//!
//! Note that the grouping policies assign *shared* groups to directly
//! related nodes — path clustering, not conflict-free coloring.
//!
//! # References
//!
//! - Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"
//! - Welsh & Powell (1967), "An upper bound for the chromatic number
//!   of a graph and its application to timetabling problems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 24

pub mod allocation;
pub mod error;
pub mod grouping;
pub mod models;
pub mod planner;
pub mod routing;
pub mod validation;

pub use error::PlanError;
