//! Crate error types.
//!
//! Every failure the core can produce is a distinct, recoverable value.
//! Computations are deterministic, so none of these warrant a retry with
//! unchanged input; the hosting layer translates them into user-facing
//! messages.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by graph construction, routing, and allocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// An edge was given a negative or non-finite weight.
    ///
    /// Shortest-path correctness depends on non-negative weights, so the
    /// edge is rejected at insertion rather than poisoning later queries.
    #[error("invalid weight {weight} on edge {from} - {to}: weights must be finite and non-negative")]
    InvalidEdgeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// The requested shortest-path start location is not in the graph.
    #[error("start location '{0}' is not in the graph")]
    UnknownStart(String),

    /// More groups were produced than named slots are available.
    #[error("group {group} has no slot: only {slot_count} slot name(s) were provided")]
    SlotIndexOutOfRange { group: usize, slot_count: usize },

    /// The input description failed structural validation.
    #[error("input description is malformed: {} issue(s) detected", .0.len())]
    MalformedDescription(Vec<ValidationError>),

    /// Path-propagation grouping (or route reporting) needs a start
    /// location, but the request did not supply one.
    #[error("a start location is required for path-propagation grouping")]
    MissingStart,

    /// The interval slot length is non-positive or longer than the window.
    #[error("slot length of {slot_minutes} min does not fit a {window_minutes} min window")]
    InvalidSlotLength {
        slot_minutes: i64,
        window_minutes: i64,
    },
}
