//! Schedule outputs: day plans and interval plans.
//!
//! A schedule maps a slot — a named day or a clock interval — to the
//! entities assigned to it. Both forms are read-only snapshots built by
//! [`crate::allocation`] and handed back to the presentation layer for
//! rendering; the core does no formatting beyond clock labels.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Route;

/// A visit scheduled into a named slot.
///
/// Binds a location to its group id and, when routing data was
/// available, the shortest route from the start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Visited location.
    pub location: String,
    /// Group id that placed this visit in its slot.
    pub group: usize,
    /// Route from the start, `None` when no routing data was supplied.
    pub route: Option<Route>,
}

/// Slot-name keyed schedule.
///
/// Slot keys iterate in first-use order. Visits within a slot are
/// ordered last-discovered first (the reverse of encounter order during
/// allocation).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayPlan {
    slots: HashMap<String, Vec<Visit>>,
    slot_order: Vec<String>,
}

impl DayPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visit to a slot, registering the slot on first use.
    pub fn add_visit(&mut self, slot: impl Into<String>, visit: Visit) {
        let slot = slot.into();
        if !self.slots.contains_key(&slot) {
            self.slot_order.push(slot.clone());
        }
        self.slots.entry(slot).or_default().push(visit);
    }

    /// Reverses the visit list of every slot.
    pub(crate) fn reverse_each_slot(&mut self) {
        for visits in self.slots.values_mut() {
            visits.reverse();
        }
    }

    /// Slot names in first-use order.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.slot_order.iter().map(String::as_str)
    }

    /// Visits assigned to a slot (empty for unused slots).
    pub fn visits(&self, slot: &str) -> &[Visit] {
        self.slots.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Total number of visits across all slots.
    pub fn visit_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Whether the plan has no visits.
    pub fn is_empty(&self) -> bool {
        self.slot_order.is_empty()
    }
}

/// A clock slot assigned to one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalSlot {
    /// Group id this slot belongs to.
    pub group: usize,
    /// Start-of-slot clock label, `"HH:MM"`.
    pub label: String,
    /// 1-based period (window pass) this slot falls into.
    pub period: usize,
}

/// Clock-interval schedule: one slot per group, in group id order, plus
/// the number of periods the window had to be reused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntervalPlan {
    slots: Vec<IntervalSlot>,
    periods: usize,
}

impl IntervalPlan {
    pub(crate) fn new(slots: Vec<IntervalSlot>, periods: usize) -> Self {
        Self { slots, periods }
    }

    /// All slots, indexed by group id.
    pub fn slots(&self) -> &[IntervalSlot] {
        &self.slots
    }

    /// The slot assigned to a group.
    pub fn slot_for_group(&self, group: usize) -> Option<&IntervalSlot> {
        self.slots.get(group)
    }

    /// The clock label for a node, resolved through its group.
    pub fn label_for(&self, groups: &super::GroupAssignment, node: &str) -> Option<&str> {
        let group = groups.group_of(node)?;
        self.slot_for_group(group).map(|slot| slot.label.as_str())
    }

    /// Total number of periods used (0 when nothing was allocated).
    pub fn periods(&self) -> usize {
        self.periods
    }
}

/// A half-open clock interval `[start, end)` in minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start (minutes from midnight, inclusive).
    pub start_min: i64,
    /// Window end (minutes from midnight, exclusive).
    pub end_min: i64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_min: i64, end_min: i64) -> Self {
        Self { start_min, end_min }
    }

    /// Window length in minutes.
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether a minute-of-day falls within this window.
    #[inline]
    pub fn contains(&self, minute: i64) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// Formats minutes-from-midnight as a 24-hour clock label.
pub fn format_clock(minute: i64) -> String {
    format!(
        "{:02}:{:02}",
        minute.div_euclid(60) % 24,
        minute.rem_euclid(60)
    )
}
