// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::{BinaryHeap, HashMap};

use crate::{earth_distance, AirwayGraph};

/// Recommended number of allowed waypoint expansions in
/// [find_route](crate::find_route) before [RouteError::StepLimitExceeded]
/// is returned.
pub const DEFAULT_STEP_LIMIT: usize = 1_000_000;

/// Error conditions which may occur during [find_route](crate::find_route).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The start or end waypoint doesn't exist in the graph.
    UnknownWaypoint(String),

    /// Route search has exceeded its limit of steps.
    /// Either the waypoints are really far apart, or no route exists.
    ///
    /// Concluding that no route exists requires traversing every waypoint
    /// reachable from the start, which can result in a denial-of-service.
    /// The step limit protects against resource exhaustion.
    StepLimitExceeded,
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWaypoint(name) => write!(f, "unknown waypoint: {}", name),
            Self::StepLimitExceeded => write!(f, "step limit exceeded"),
        }
    }
}

impl std::error::Error for RouteError {}

#[derive(Debug, Clone, Copy)]
struct QueueItem<'a> {
    at: &'a str,
    cost: f64,
    score: f64,
}

impl PartialEq for QueueItem<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.score.eq(&other.score)
    }
}

impl PartialOrd for QueueItem<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        // NOTE: We revert the order of comparison,
        // as lower scores are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        other.score.partial_cmp(&self.score)
    }
}

impl Eq for QueueItem<'_> {}

impl Ord for QueueItem<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.partial_cmp(self).unwrap()
    }
}

fn reconstruct_path<'a>(came_from: &HashMap<&'a str, &'a str>, mut last: &'a str) -> Vec<String> {
    let mut path = vec![last.to_string()];

    while let Some(&wpt) = came_from.get(last) {
        path.push(wpt.to_string());
        last = wpt;
    }

    path.reverse();
    path
}

/// Uses the [A* algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)
/// to find the shortest route between two waypoints in the provided graph,
/// by total airway distance. Returns the sequence of waypoint names from
/// `from` to `to`, inclusive.
///
/// Returns an empty vector if there is no route between the two waypoints.
/// Returns [RouteError::UnknownWaypoint] if either endpoint is not present
/// in the graph, without performing any search.
///
/// The heuristic is the great-circle distance to the goal, which never
/// exceeds the summed great-circle distances along any chain of airways,
/// so the returned route has minimal total distance. Between routes of
/// equal total distance the choice is unspecified.
///
/// `step_limit` limits how many waypoints may be expanded during the search
/// before returning [RouteError::StepLimitExceeded]. Concluding that no route
/// exists requires expanding all waypoints reachable from the start, which
/// may be time-consuming on continent-sized datasets. The recommended value
/// is [DEFAULT_STEP_LIMIT].
pub fn find_route(
    g: &AirwayGraph,
    from: &str,
    to: &str,
    step_limit: usize,
) -> Result<Vec<String>, RouteError> {
    let to_wpt = g
        .get_waypoint(to)
        .ok_or_else(|| RouteError::UnknownWaypoint(to.to_string()))?;

    let from_wpt = g
        .get_waypoint(from)
        .ok_or_else(|| RouteError::UnknownWaypoint(from.to_string()))?;

    if from == to {
        return Ok(vec![from.to_string()]);
    }

    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::default();
    let mut came_from: HashMap<&str, &str> = HashMap::default();
    let mut known_costs: HashMap<&str, f64> = HashMap::default();
    let mut steps: usize = 0;

    let initial_distance = earth_distance(from_wpt.lat, from_wpt.lon, to_wpt.lat, to_wpt.lon);
    queue.push(QueueItem {
        at: &from_wpt.name,
        cost: 0.0,
        score: initial_distance,
    });
    known_costs.insert(&from_wpt.name, 0.0);

    while let Some(item) = queue.pop() {
        if item.at == to {
            return Ok(reconstruct_path(&came_from, item.at));
        }

        // Contrary to the wikipedia definition, we might keep multiple items
        // in the queue for the same waypoint. Stale ones are skipped here.
        if item.cost > known_costs.get(item.at).cloned().unwrap_or(f64::INFINITY) {
            continue;
        }

        steps += 1;
        if steps > step_limit {
            return Err(RouteError::StepLimitExceeded);
        }

        for awy in g.airways_from(item.at) {
            // The destination is guaranteed to exist by AirwayGraph::add_airway
            let neighbor = match g.get_waypoint(&awy.to) {
                Some(wpt) => wpt,
                None => continue,
            };

            // Only proceed if this is a strictly cheaper way to the neighbor
            let neighbor_cost = item.cost + awy.distance;
            if neighbor_cost
                >= known_costs
                    .get(awy.to.as_str())
                    .cloned()
                    .unwrap_or(f64::INFINITY)
            {
                continue;
            }

            came_from.insert(&awy.to, item.at);
            known_costs.insert(&awy.to, neighbor_cost);
            queue.push(QueueItem {
                at: &awy.to,
                cost: neighbor_cost,
                score: neighbor_cost
                    + earth_distance(neighbor.lat, neighbor.lon, to_wpt.lat, to_wpt.lon),
            });
        }
    }

    Ok(vec![])
}
