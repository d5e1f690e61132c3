//! Request object and pipeline orchestration.
//!
//! Ties the stages together: input description → weighted graph →
//! shortest routes → group assignment → slot allocation. Each request
//! carries everything the pipeline needs, so there is no process-wide
//! state; independent requests can run on separate graphs concurrently
//! without coordination.
//!
//! # Example
//!
//! ```
//! use route_schedule::models::{GraphDescription, GraphSource};
//! use route_schedule::planner::{PlanRequest, Planner, SlotSpec};
//!
//! let description = GraphDescription::new()
//!     .with_edge("A", "B", 1.0)
//!     .with_edge("A", "C", 3.0)
//!     .with_edge("B", "D", 1.0)
//!     .with_edge("C", "D", 7.0);
//!
//! let request = PlanRequest::new(
//!     GraphSource::Description(description),
//!     SlotSpec::Days(vec!["Monday".into(), "Tuesday".into()]),
//! )
//! .with_start("A");
//!
//! let plan = Planner::new().plan(&request).unwrap();
//! assert_eq!(plan.groups.group_count(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::{
    DayPlan, GraphSource, GroupAssignment, GroupingPolicy, IntervalPlan, RouteTree, TimeWindow,
    WeightedGraph,
};
use crate::{allocation, grouping, routing, validation};

/// How groups are mapped onto time slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotSpec {
    /// One named slot per group id, in order (e.g. weekday names).
    Days(Vec<String>),
    /// Clock slots of `slot_minutes` inside a daily window, with
    /// rollover to additional periods when the window fills up.
    Intervals {
        slot_minutes: i64,
        window: TimeWindow,
    },
}

/// Input container for planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Graph input surface (edge triples or a roster).
    pub source: GraphSource,
    /// Start location. Required by path-propagation grouping; also the
    /// node excluded from day schedules and the root for route reports.
    pub start: Option<String>,
    /// Group partitioning policy.
    pub policy: GroupingPolicy,
    /// Slot allocation mode.
    pub slots: SlotSpec,
}

impl PlanRequest {
    /// Creates a request with the default (path-propagation) policy.
    pub fn new(source: GraphSource, slots: SlotSpec) -> Self {
        Self {
            source,
            start: None,
            policy: GroupingPolicy::default(),
            slots,
        }
    }

    /// Sets the start location.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the grouping policy.
    pub fn with_policy(mut self, policy: GroupingPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// The schedule produced by a plan, in whichever mode was requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScheduleOutcome {
    Days(DayPlan),
    Intervals(IntervalPlan),
}

impl ScheduleOutcome {
    /// The day plan, when day mode was requested.
    pub fn as_days(&self) -> Option<&DayPlan> {
        match self {
            ScheduleOutcome::Days(plan) => Some(plan),
            ScheduleOutcome::Intervals(_) => None,
        }
    }

    /// The interval plan, when interval mode was requested.
    pub fn as_intervals(&self) -> Option<&IntervalPlan> {
        match self {
            ScheduleOutcome::Days(_) => None,
            ScheduleOutcome::Intervals(plan) => Some(plan),
        }
    }
}

/// A completed plan: read-only snapshots of every pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// The finalized graph the plan was computed over.
    pub graph: WeightedGraph,
    /// Shortest routes from the start, when a start was supplied.
    pub routes: Option<RouteTree>,
    /// Node → group assignment.
    pub groups: GroupAssignment,
    /// The allocated schedule.
    pub schedule: ScheduleOutcome,
}

/// Runs the planning pipeline for a request.
#[derive(Debug, Clone, Default)]
pub struct Planner;

impl Planner {
    /// Creates a planner.
    pub fn new() -> Self {
        Self
    }

    /// Plans a schedule from a request.
    ///
    /// # Pipeline
    /// 1. Validate the input description (all issues collected).
    /// 2. Build the weighted graph.
    /// 3. Compute shortest routes when a start is supplied.
    /// 4. Partition nodes into groups per the requested policy.
    /// 5. Allocate groups onto the requested slots.
    ///
    /// # Errors
    /// [`PlanError::MalformedDescription`] for invalid input;
    /// [`PlanError::MissingStart`] when path propagation has no start;
    /// allocation errors per mode ([`PlanError::SlotIndexOutOfRange`],
    /// [`PlanError::InvalidSlotLength`]).
    pub fn plan(&self, request: &PlanRequest) -> Result<Plan, PlanError> {
        validation::validate_source(&request.source, request.start.as_deref())
            .map_err(PlanError::MalformedDescription)?;

        let graph = request.source.build()?;

        let routes = match request.start.as_deref() {
            Some(start) => Some(routing::shortest_paths(&graph, start)?),
            None => None,
        };

        let groups = grouping::assign_groups(&graph, routes.as_ref(), request.policy)?;

        let schedule = match &request.slots {
            SlotSpec::Days(names) => ScheduleOutcome::Days(allocation::assign_to_days(
                &groups,
                routes.as_ref(),
                names,
                request.start.as_deref(),
            )?),
            SlotSpec::Intervals {
                slot_minutes,
                window,
            } => ScheduleOutcome::Intervals(allocation::allocate_intervals(
                &groups,
                *slot_minutes,
                *window,
            )?),
        };

        Ok(Plan {
            graph,
            routes,
            groups,
            schedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GraphDescription, Roster};

    fn weekdays() -> Vec<String> {
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
            .map(String::from)
            .to_vec()
    }

    fn supply_chain() -> GraphDescription {
        GraphDescription::new()
            .with_edge("FactoryA", "WarehouseX", 1.0)
            .with_edge("FactoryA", "WarehouseY", 3.0)
            .with_edge("FactoryA", "DistributionCenter1", 5.0)
            .with_edge("FactoryB", "DistributionCenter1", 2.0)
            .with_edge("FactoryB", "DistributionCenter2", 4.0)
            .with_edge("WarehouseX", "RetailStore1", 1.0)
            .with_edge("WarehouseY", "RetailStore2", 7.0)
            .with_edge("DistributionCenter1", "RetailStore1", 3.0)
            .with_edge("DistributionCenter2", "RetailStore2", 2.0)
    }

    #[test]
    fn test_supply_chain_day_plan() {
        let request = PlanRequest::new(
            GraphSource::Description(supply_chain()),
            SlotSpec::Days(weekdays()),
        )
        .with_start("FactoryA");

        let plan = Planner::new().plan(&request).unwrap();

        // Chains from the three farthest nodes claim three groups
        assert_eq!(plan.groups.group_count(), 3);
        assert_eq!(plan.groups.group_of("DistributionCenter2"), Some(0));
        assert_eq!(plan.groups.group_of("FactoryB"), Some(0));
        assert_eq!(plan.groups.group_of("RetailStore2"), Some(1));
        assert_eq!(plan.groups.group_of("WarehouseY"), Some(1));
        assert_eq!(plan.groups.group_of("RetailStore1"), Some(2));
        assert_eq!(plan.groups.group_of("WarehouseX"), Some(2));
        // The start ends up on the last chain processed
        assert_eq!(plan.groups.group_of("FactoryA"), Some(2));

        let days = plan.schedule.as_days().unwrap();
        // 8 locations minus the excluded start
        assert_eq!(days.visit_count(), 7);

        let monday: Vec<&str> = days
            .visits("Monday")
            .iter()
            .map(|v| v.location.as_str())
            .collect();
        assert_eq!(
            monday,
            vec!["DistributionCenter1", "FactoryB", "DistributionCenter2"]
        );

        let tuesday: Vec<&str> = days
            .visits("Tuesday")
            .iter()
            .map(|v| v.location.as_str())
            .collect();
        assert_eq!(tuesday, vec!["WarehouseY", "RetailStore2"]);

        let wednesday: Vec<&str> = days
            .visits("Wednesday")
            .iter()
            .map(|v| v.location.as_str())
            .collect();
        assert_eq!(wednesday, vec!["WarehouseX", "RetailStore1"]);
    }

    #[test]
    fn test_plan_exposes_route_snapshots() {
        let request = PlanRequest::new(
            GraphSource::Description(supply_chain()),
            SlotSpec::Days(weekdays()),
        )
        .with_start("FactoryA");

        let plan = Planner::new().plan(&request).unwrap();
        let routes = plan.routes.as_ref().unwrap();
        assert_eq!(routes.distance_to("RetailStore1"), 2.0);

        let days = plan.schedule.as_days().unwrap();
        let visit = days
            .visits("Wednesday")
            .iter()
            .find(|v| v.location == "RetailStore1")
            .unwrap();
        let route = visit.route.as_ref().unwrap();
        assert_eq!(route.stops, vec!["FactoryA", "WarehouseX", "RetailStore1"]);
        assert_eq!(route.distance, 2.0);
    }

    #[test]
    fn test_malformed_description_is_rejected() {
        let request = PlanRequest::new(
            GraphSource::Description(GraphDescription::new()),
            SlotSpec::Days(weekdays()),
        );

        let err = Planner::new().plan(&request).unwrap_err();
        assert!(matches!(err, PlanError::MalformedDescription(_)));
    }

    #[test]
    fn test_path_policy_requires_start() {
        let request = PlanRequest::new(
            GraphSource::Description(supply_chain()),
            SlotSpec::Days(weekdays()),
        );

        let err = Planner::new().plan(&request).unwrap_err();
        assert_eq!(err, PlanError::MissingStart);
    }

    #[test]
    fn test_unknown_start_reported_by_validation() {
        let request = PlanRequest::new(
            GraphSource::Description(supply_chain()),
            SlotSpec::Days(weekdays()),
        )
        .with_start("Nowhere");

        let err = Planner::new().plan(&request).unwrap_err();
        match err {
            PlanError::MalformedDescription(issues) => {
                assert!(issues.iter().any(|i| i.message.contains("Nowhere")));
            }
            other => panic!("expected MalformedDescription, got {other:?}"),
        }
    }

    #[test]
    fn test_roster_interval_plan() {
        // Exam-style timetabling: classes conflict via shared students
        let roster = Roster::new()
            .with_entry("Math", vec!["ann".into(), "bob".into()])
            .with_entry("Physics", vec!["bob".into(), "cara".into()])
            .with_entry("Art", vec!["dave".into()])
            .with_entry("History", vec!["ann".into(), "dave".into()]);

        let request = PlanRequest::new(
            GraphSource::Roster(roster),
            SlotSpec::Intervals {
                slot_minutes: 120,
                window: TimeWindow::new(540, 1020),
            },
        )
        .with_policy(GroupingPolicy::AdjacencyPropagation);

        let plan = Planner::new().plan(&request).unwrap();
        assert!(plan.routes.is_none());
        assert_eq!(plan.groups.len(), 4);

        let intervals = plan.schedule.as_intervals().unwrap();
        assert_eq!(intervals.slots().len(), plan.groups.group_count());
        assert_eq!(intervals.periods(), 1);
        assert!(plan.groups.iter().all(|(node, _)| {
            intervals.label_for(&plan.groups, node).is_some()
        }));
    }

    #[test]
    fn test_adjacency_policy_day_plan_without_routes() {
        let request = PlanRequest::new(
            GraphSource::Description(supply_chain()),
            SlotSpec::Days(weekdays()),
        )
        .with_policy(GroupingPolicy::AdjacencyPropagation);

        let plan = Planner::new().plan(&request).unwrap();
        assert!(plan.routes.is_none());

        let days = plan.schedule.as_days().unwrap();
        // No start: nothing is excluded and visits carry no routes
        assert_eq!(days.visit_count(), 8);
        for day in days.slots().map(str::to_string).collect::<Vec<_>>() {
            assert!(days.visits(&day).iter().all(|v| v.route.is_none()));
        }
    }

    #[test]
    fn test_day_overflow_surfaces() {
        let request = PlanRequest::new(
            GraphSource::Description(supply_chain()),
            SlotSpec::Days(vec!["Monday".into()]),
        )
        .with_start("FactoryA");

        let err = Planner::new().plan(&request).unwrap_err();
        assert!(matches!(err, PlanError::SlotIndexOutOfRange { .. }));
    }

    #[test]
    fn test_plan_snapshot_serializes() {
        let request = PlanRequest::new(
            GraphSource::Description(supply_chain()),
            SlotSpec::Days(weekdays()),
        )
        .with_start("FactoryA");

        let plan = Planner::new().plan(&request).unwrap();
        let json = serde_json::to_string(&plan.groups).unwrap();
        let groups: GroupAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(groups.group_of("FactoryB"), plan.groups.group_of("FactoryB"));

        // Day plans round-trip with their visit ordering intact
        let days = plan.schedule.as_days().unwrap();
        let json = serde_json::to_string(days).unwrap();
        let restored: DayPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.visits("Monday"), days.visits("Monday"));
    }
}
