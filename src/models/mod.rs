//! Scheduling domain models.
//!
//! Core data types for the routing-and-scheduling pipeline: the weighted
//! location graph, shortest-route results, group assignments, and the
//! two schedule forms (named days, clock intervals). All types are plain
//! serde-friendly records; the hosting layer serializes or renders them
//! as it sees fit.
//!
//! # Domain Mappings
//!
//! | route-schedule | Supply Chain | Timetabling |
//! |----------------|--------------|-------------|
//! | Node | Location | Class/Exam |
//! | WeightedGraph | Transport routes | Conflict graph |
//! | Group | Delivery tour | Exam block |
//! | Slot | Weekday | Clock interval |

mod description;
mod graph;
mod grouping;
mod route;
mod schedule;

pub use description::{EdgeSpec, GraphDescription, GraphSource, Roster, RosterEntry};
pub use graph::WeightedGraph;
pub use grouping::{GroupAssignment, GroupingPolicy};
pub use route::{Route, RouteTree};
pub use schedule::{format_clock, DayPlan, IntervalPlan, IntervalSlot, TimeWindow, Visit};
