//! Group partitioning policies.
//!
//! Partitions the graph's nodes into integer groups with one of two
//! propagation rules:
//!
//! - **Path propagation** walks nodes farthest-from-start first and
//!   stamps each new group backward along the node's predecessor chain,
//!   overwriting ancestors — the last chain processed for an ancestor
//!   wins. A path-clustering heuristic, not a proper vertex coloring.
//! - **Adjacency propagation** walks nodes most-connected first and
//!   stamps each new group onto every still-ungrouped direct neighbor.
//!
//! Both orderings are stable sorts over the graph's node insertion
//! order, so results are deterministic. Neither policy avoids giving
//! adjacent nodes the same group; that is the documented behavior, the
//! opposite of a conflict-free coloring.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems" — the degree
//! ordering; the propagation rule here deliberately diverges from it.

use std::cmp::Ordering;

use crate::error::PlanError;
use crate::models::{GroupAssignment, GroupingPolicy, RouteTree, WeightedGraph};

/// Partitions nodes into groups with the requested policy.
///
/// # Errors
/// [`PlanError::MissingStart`] when the path-propagation policy is
/// requested without route data.
pub fn assign_groups(
    graph: &WeightedGraph,
    routes: Option<&RouteTree>,
    policy: GroupingPolicy,
) -> Result<GroupAssignment, PlanError> {
    match policy {
        GroupingPolicy::PathPropagation => {
            let routes = routes.ok_or(PlanError::MissingStart)?;
            Ok(group_by_route(graph, routes))
        }
        GroupingPolicy::AdjacencyPropagation => Ok(group_by_adjacency(graph)),
    }
}

/// Groups nodes by shortest-path chain membership.
///
/// Nodes are visited in descending distance from the start (insertion
/// order breaks ties). Each still-ungrouped node allocates the next
/// group id and propagates it backward along its predecessor chain to
/// the start, overwriting any group an ancestor already holds.
/// Unreachable nodes carry an infinite distance, sort first, and end up
/// in singleton groups (their chains are empty).
pub fn group_by_route(graph: &WeightedGraph, routes: &RouteTree) -> GroupAssignment {
    let mut ordered: Vec<&str> = graph.nodes().collect();
    ordered.sort_by(|a, b| {
        routes
            .distance_to(b)
            .partial_cmp(&routes.distance_to(a))
            .unwrap_or(Ordering::Equal)
    });

    let mut assignment = GroupAssignment::new();
    for node in ordered {
        if assignment.contains(node) {
            continue;
        }
        let group = assignment.allocate();
        assignment.assign(node, group);

        let mut current = node;
        while let Some(previous) = routes.predecessor(current) {
            assignment.assign(previous, group);
            current = previous;
        }
    }

    assignment
}

/// Groups nodes by direct adjacency.
///
/// Nodes are visited in descending degree (insertion order breaks
/// ties). Each still-ungrouped node allocates the next group id and
/// stamps it on every direct neighbor that lacks a group; already
/// grouped neighbors keep theirs.
pub fn group_by_adjacency(graph: &WeightedGraph) -> GroupAssignment {
    let mut ordered: Vec<&str> = graph.nodes().collect();
    ordered.sort_by(|a, b| graph.degree(b).cmp(&graph.degree(a)));

    let mut assignment = GroupAssignment::new();
    for node in ordered {
        if assignment.contains(node) {
            continue;
        }
        let group = assignment.allocate();
        assignment.assign(node, group);

        for (neighbor, _) in graph.neighbors(node) {
            if !assignment.contains(neighbor) {
                assignment.assign(neighbor, group);
            }
        }
    }

    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::shortest_paths;

    fn sample_graph() -> WeightedGraph {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("A", "C", 3.0).unwrap();
        g.add_edge("B", "D", 1.0).unwrap();
        g.add_edge("C", "D", 7.0).unwrap();
        g
    }

    #[test]
    fn test_path_propagation_worked_example() {
        // Descending distance: C(3), D(2), B(1), A(0).
        // C -> group 0, chain C->A marks A.
        // D -> group 1, chain D->B->A marks B and overwrites A.
        let g = sample_graph();
        let routes = shortest_paths(&g, "A").unwrap();
        let groups = group_by_route(&g, &routes);

        assert_eq!(groups.group_of("C"), Some(0));
        assert_eq!(groups.group_of("D"), Some(1));
        assert_eq!(groups.group_of("B"), Some(1));
        assert_eq!(groups.group_of("A"), Some(1));
        assert_eq!(groups.group_count(), 2);
    }

    #[test]
    fn test_path_propagation_first_assignment_order() {
        let g = sample_graph();
        let routes = shortest_paths(&g, "A").unwrap();
        let groups = group_by_route(&g, &routes);

        // A keeps the position it got from C's chain even after D's
        // chain overwrites its group.
        let order: Vec<&str> = groups.iter().map(|(node, _)| node).collect();
        assert_eq!(order, vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn test_every_node_grouped_contiguous_ids() {
        let g = sample_graph();
        let routes = shortest_paths(&g, "A").unwrap();

        for groups in [group_by_route(&g, &routes), group_by_adjacency(&g)] {
            assert_eq!(groups.len(), g.node_count());
            let mut seen = vec![false; groups.group_count()];
            for (_, group) in groups.iter() {
                seen[group] = true;
            }
            assert!(seen.iter().all(|&s| s), "group ids must have no gaps");
        }
    }

    #[test]
    fn test_unreachable_nodes_form_singleton_groups() {
        let mut g = sample_graph();
        g.add_node("island1");
        g.add_node("island2");
        let routes = shortest_paths(&g, "A").unwrap();
        let groups = group_by_route(&g, &routes);

        // Infinite distances sort first; empty chains leave them alone
        assert_eq!(groups.group_of("island1"), Some(0));
        assert_eq!(groups.group_of("island2"), Some(1));
        assert_eq!(groups.group_count(), 4);
    }

    #[test]
    fn test_adjacency_star_shares_hub_group() {
        let mut g = WeightedGraph::new();
        g.add_edge("hub", "a", 1.0).unwrap();
        g.add_edge("hub", "b", 1.0).unwrap();
        g.add_edge("hub", "c", 1.0).unwrap();

        let groups = group_by_adjacency(&g);
        // hub has the highest degree, claims group 0, and spreads it to
        // every neighbor: adjacent nodes end up sharing a group
        assert_eq!(groups.group_of("hub"), Some(0));
        assert_eq!(groups.group_of("a"), Some(0));
        assert_eq!(groups.group_of("b"), Some(0));
        assert_eq!(groups.group_of("c"), Some(0));
        assert_eq!(groups.group_count(), 1);
    }

    #[test]
    fn test_adjacency_degree_ties_break_by_insertion() {
        // Two disjoint edges: all degrees equal, so insertion order rules
        let mut g = WeightedGraph::new();
        g.add_edge("P", "Q", 1.0).unwrap();
        g.add_edge("X", "Y", 1.0).unwrap();

        let groups = group_by_adjacency(&g);
        assert_eq!(groups.group_of("P"), Some(0));
        assert_eq!(groups.group_of("Q"), Some(0));
        assert_eq!(groups.group_of("X"), Some(1));
        assert_eq!(groups.group_of("Y"), Some(1));
    }

    #[test]
    fn test_policies_are_deterministic() {
        let g = sample_graph();
        let routes = shortest_paths(&g, "A").unwrap();

        let first: Vec<(String, usize)> = group_by_route(&g, &routes)
            .iter()
            .map(|(n, g)| (n.to_string(), g))
            .collect();
        for _ in 0..10 {
            let again: Vec<(String, usize)> = group_by_route(&g, &routes)
                .iter()
                .map(|(n, g)| (n.to_string(), g))
                .collect();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_assign_groups_dispatch() {
        let g = sample_graph();
        let routes = shortest_paths(&g, "A").unwrap();

        let by_path =
            assign_groups(&g, Some(&routes), GroupingPolicy::PathPropagation).unwrap();
        assert_eq!(by_path.group_count(), 2);

        let by_adjacency =
            assign_groups(&g, None, GroupingPolicy::AdjacencyPropagation).unwrap();
        assert_eq!(by_adjacency.len(), 4);

        let err = assign_groups(&g, None, GroupingPolicy::PathPropagation).unwrap_err();
        assert_eq!(err, PlanError::MissingStart);
    }

    #[test]
    fn test_grouping_does_not_mutate_graph() {
        let g = sample_graph();
        let before: Vec<String> = g.nodes().map(str::to_string).collect();
        let routes = shortest_paths(&g, "A").unwrap();
        let _ = group_by_route(&g, &routes);
        let _ = group_by_adjacency(&g);
        let after: Vec<String> = g.nodes().map(str::to_string).collect();
        assert_eq!(before, after);
        assert_eq!(g.edge_count(), 4);
    }
}
