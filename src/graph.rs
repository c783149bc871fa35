// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{earth_distance, Airway, AirwayKind, Waypoint};
use std::collections::btree_map::{BTreeMap, Entry};

/// Represents an aeronautical fix network as a set of [Waypoints](Waypoint)
/// and directed [Airways](Airway) between them.
///
/// The graph is populated once during a batch-load phase and treated as
/// immutable afterwards. [find_route](crate::find_route) only takes a shared
/// reference, so independent searches may run concurrently over a frozen
/// graph without coordination.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AirwayGraph(BTreeMap<String, (Waypoint, BTreeMap<String, Airway>)>);

impl AirwayGraph {
    /// Returns the number of waypoints in the graph.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the graph contains no waypoints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all [Waypoints](Waypoint) in the graph.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.0.values().map(|(wpt, _)| wpt)
    }

    /// Retrieves the [Waypoint] with the provided name.
    pub fn get_waypoint(&self, name: &str) -> Option<&Waypoint> {
        self.0.get(name).map(|(wpt, _)| wpt)
    }

    /// Inserts a [Waypoint] under `wpt.name`.
    ///
    /// Insertion is first-writer-wins: if a waypoint with the same name
    /// is already present, the existing record is kept unchanged and the
    /// call is a no-op returning `false`.
    pub fn add_waypoint(&mut self, wpt: Waypoint) -> bool {
        assert!(!wpt.name.is_empty());

        match self.0.entry(wpt.name.clone()) {
            Entry::Vacant(e) => {
                e.insert((wpt, BTreeMap::default()));
                true
            }
            Entry::Occupied(_) => {
                log::debug!("waypoint {} already exists, skipping", wpt.name);
                false
            }
        }
    }

    /// Inserts an [Airway] from `from` to `to`, with the distance computed
    /// from the endpoints' coordinates.
    ///
    /// Both endpoints must already be present in the graph; if either is
    /// missing, the call is a no-op and no partial edge is created. At most
    /// one airway is kept per ordered `(from, to)` pair, first-writer-wins.
    /// A reverse airway is never inferred; bidirectional connections take
    /// two calls.
    ///
    /// Returns whether the airway was stored.
    pub fn add_airway(&mut self, from: &str, to: &str, kind: AirwayKind, name: &str) -> bool {
        let (start_lat, start_lon) = match self.get_waypoint(from) {
            Some(wpt) => (wpt.lat, wpt.lon),
            None => {
                log::warn!("{from} not in waypoint list, skipping airway {from}->{to}");
                return false;
            }
        };
        let (end_lat, end_lon) = match self.get_waypoint(to) {
            Some(wpt) => (wpt.lat, wpt.lon),
            None => {
                log::warn!("{to} not in waypoint list, skipping airway {from}->{to}");
                return false;
            }
        };

        let distance = earth_distance(start_lat, start_lon, end_lat, end_lon);

        let (_, airways) = self
            .0
            .get_mut(from)
            .expect("endpoint presence was checked above");

        match airways.entry(to.to_string()) {
            Entry::Vacant(e) => {
                e.insert(Airway {
                    to: to.to_string(),
                    distance,
                    // TODO: check validity with respect to airspace, NOTAMs, etc.
                    valid: true,
                    kind,
                    name: name.to_string(),
                });
                true
            }
            Entry::Occupied(_) => {
                log::debug!("airway {from}->{to} already exists, skipping");
                false
            }
        }
    }

    /// Gets the [Airway] from one waypoint to another, if one is stored.
    pub fn get_airway(&self, from: &str, to: &str) -> Option<&Airway> {
        self.0.get(from).and_then(|(_, airways)| airways.get(to))
    }

    /// Gets all outgoing [Airways](Airway) of the waypoint with the given
    /// name. The result is empty for unknown or isolated waypoints.
    pub fn airways_from(&self, name: &str) -> impl Iterator<Item = &Airway> {
        self.0
            .get(name)
            .into_iter()
            .flat_map(|(_, airways)| airways.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WaypointKind;

    fn wpt(name: &str, lat: f64, lon: f64, kind: WaypointKind) -> Waypoint {
        Waypoint {
            name: name.to_string(),
            lat,
            lon,
            kind,
            runway: String::new(),
        }
    }

    #[test]
    fn waypoint_insertion_is_first_writer_wins() {
        let mut g = AirwayGraph::default();
        assert!(g.add_waypoint(wpt("ALPHA", 10.0, 20.0, WaypointKind::Fix)));
        assert!(!g.add_waypoint(wpt("ALPHA", -5.0, -6.0, WaypointKind::Airport)));

        let stored = g.get_waypoint("ALPHA").unwrap();
        assert_eq!(stored.lat, 10.0);
        assert_eq!(stored.lon, 20.0);
        assert_eq!(stored.kind, WaypointKind::Fix);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn airway_insertion_is_first_writer_wins() {
        let mut g = AirwayGraph::default();
        g.add_waypoint(wpt("ALPHA", 0.0, 0.0, WaypointKind::Fix));
        g.add_waypoint(wpt("BRAVO", 0.0, 1.0, WaypointKind::Fix));

        assert!(g.add_airway("ALPHA", "BRAVO", AirwayKind::Enroute, "V1"));
        assert!(!g.add_airway("ALPHA", "BRAVO", AirwayKind::Arrival, "RNAV1"));

        let stored = g.get_airway("ALPHA", "BRAVO").unwrap();
        assert_eq!(stored.kind, AirwayKind::Enroute);
        assert_eq!(stored.name, "V1");
        assert!(stored.valid);
    }

    #[test]
    fn airway_with_missing_endpoint_leaves_graph_unchanged() {
        let mut g = AirwayGraph::default();
        g.add_waypoint(wpt("ALPHA", 0.0, 0.0, WaypointKind::Fix));

        assert!(!g.add_airway("ALPHA", "BRAVO", AirwayKind::Enroute, ""));
        assert!(!g.add_airway("BRAVO", "ALPHA", AirwayKind::Enroute, ""));
        assert_eq!(g.airways_from("ALPHA").count(), 0);
        assert_eq!(g.airways_from("BRAVO").count(), 0);
    }

    #[test]
    fn no_reverse_airway_is_inferred() {
        let mut g = AirwayGraph::default();
        g.add_waypoint(wpt("ALPHA", 0.0, 0.0, WaypointKind::Fix));
        g.add_waypoint(wpt("BRAVO", 0.0, 1.0, WaypointKind::Fix));

        assert!(g.add_airway("ALPHA", "BRAVO", AirwayKind::Departure, "HOBBY1"));
        assert!(g.get_airway("ALPHA", "BRAVO").is_some());
        assert!(g.get_airway("BRAVO", "ALPHA").is_none());
    }

    #[test]
    fn airway_distance_is_computed_from_coordinates() {
        let mut g = AirwayGraph::default();
        g.add_waypoint(wpt("ALPHA", 0.0, 0.0, WaypointKind::Fix));
        g.add_waypoint(wpt("BRAVO", 0.0, 1.0, WaypointKind::Fix));
        g.add_airway("ALPHA", "BRAVO", AirwayKind::Enroute, "");

        // One degree along the equator is roughly 111.2 km.
        let awy = g.get_airway("ALPHA", "BRAVO").unwrap();
        assert!((awy.distance - 111_195.0).abs() < 100.0, "got {}", awy.distance);
    }

    #[test]
    fn airways_from_unknown_waypoint_is_empty() {
        let g = AirwayGraph::default();
        assert_eq!(g.airways_from("NOWHERE").count(), 0);
    }
}
