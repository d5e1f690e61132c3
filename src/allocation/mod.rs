//! Slot allocation: mapping groups onto days or clock intervals.
//!
//! Two allocation modes:
//!
//! - **Named-day**: every node's group id indexes into a list of slot
//!   names. More groups than names is a real overflow condition and
//!   fails; it is not silently wrapped.
//! - **Interval**: each group receives a clock slot inside a daily time
//!   window; when the window runs out, allocation wraps back to the
//!   window start and opens another period. Bounded daily capacity with
//!   rollover instead of failure.

use crate::error::PlanError;
use crate::models::{
    format_clock, DayPlan, GroupAssignment, IntervalPlan, IntervalSlot, RouteTree, TimeWindow,
    Visit,
};

/// Maps every assigned node (except `exclude`) into the named slot its
/// group id selects.
///
/// Nodes are taken in first-assignment order; the visit list of each
/// slot is then reversed, so the last-discovered node appears first.
/// Visits carry the route and distance from the start when `routes` is
/// supplied.
///
/// # Errors
/// [`PlanError::SlotIndexOutOfRange`] when a group id has no slot name.
pub fn assign_to_days(
    groups: &GroupAssignment,
    routes: Option<&RouteTree>,
    slot_names: &[String],
    exclude: Option<&str>,
) -> Result<DayPlan, PlanError> {
    let mut plan = DayPlan::new();

    for (node, group) in groups.iter() {
        if exclude == Some(node) {
            continue;
        }
        let slot = slot_names
            .get(group)
            .ok_or(PlanError::SlotIndexOutOfRange {
                group,
                slot_count: slot_names.len(),
            })?;

        plan.add_visit(
            slot,
            Visit {
                location: node.to_string(),
                group,
                route: routes.and_then(|tree| tree.route_to(node)),
            },
        );
    }

    plan.reverse_each_slot();
    Ok(plan)
}

/// Allocates each group a clock slot of `slot_minutes` inside `window`.
///
/// Groups are taken in natural (creation) order. The running clock
/// starts at the window start and advances by `slot_minutes` per group;
/// whenever the next slot would run past the window end, the clock
/// wraps back to the window start and the period counter increments.
///
/// # Errors
/// [`PlanError::InvalidSlotLength`] when `slot_minutes` is non-positive
/// or longer than the window.
pub fn allocate_intervals(
    groups: &GroupAssignment,
    slot_minutes: i64,
    window: TimeWindow,
) -> Result<IntervalPlan, PlanError> {
    if slot_minutes <= 0 || slot_minutes > window.duration_min() {
        return Err(PlanError::InvalidSlotLength {
            slot_minutes,
            window_minutes: window.duration_min(),
        });
    }

    let mut slots = Vec::with_capacity(groups.group_count());
    let mut clock = window.start_min;
    let mut period = 1;

    for group in 0..groups.group_count() {
        if clock + slot_minutes > window.end_min {
            clock = window.start_min;
            period += 1;
        }
        slots.push(IntervalSlot {
            group,
            label: format_clock(clock),
            period,
        });
        clock += slot_minutes;
    }

    let periods = if slots.is_empty() { 0 } else { period };
    Ok(IntervalPlan::new(slots, periods))
}
