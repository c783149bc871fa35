// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::io;

use crate::{AirwayGraph, AirwayKind, Waypoint, WaypointKind};

use super::records::{AirportRecord, AirwaySegmentRecord, FixRecord, NavaidRecord};
use super::Error;

/// Replays fix records into [AirwayGraph::add_waypoint] calls.
pub(super) fn add_fixes<R: io::Read>(
    g: &mut AirwayGraph,
    mut rows: csv::Reader<R>,
) -> Result<(), Error> {
    let mut added: usize = 0;

    for row in rows.deserialize() {
        let record: FixRecord = row?;
        let (lat, lon) = match (record.lat, record.lon) {
            (Some(lat), Some(lon)) if !record.id.is_empty() => (lat, lon),
            _ => {
                log::warn!("fix record missing identifier or coordinates, skipping");
                continue;
            }
        };

        if g.add_waypoint(Waypoint {
            name: record.id,
            lat,
            lon,
            kind: WaypointKind::Fix,
            runway: String::new(),
        }) {
            added += 1;
        }
    }

    log::info!("loaded {added} fixes");
    Ok(())
}

/// Replays navaid records into [AirwayGraph::add_waypoint] calls.
pub(super) fn add_navaids<R: io::Read>(
    g: &mut AirwayGraph,
    mut rows: csv::Reader<R>,
) -> Result<(), Error> {
    let mut added: usize = 0;

    for row in rows.deserialize() {
        let record: NavaidRecord = row?;
        let (lat, lon) = match (record.lat, record.lon) {
            (Some(lat), Some(lon)) if !record.id.is_empty() => (lat, lon),
            _ => {
                log::warn!("navaid record missing identifier or coordinates, skipping");
                continue;
            }
        };

        if g.add_waypoint(Waypoint {
            name: record.waypoint_name(),
            lat,
            lon,
            kind: WaypointKind::Navaid,
            runway: String::new(),
        }) {
            added += 1;
        }
    }

    log::info!("loaded {added} navaids");
    Ok(())
}

/// Replays airport records into [AirwayGraph::add_waypoint] calls.
pub(super) fn add_airports<R: io::Read>(
    g: &mut AirwayGraph,
    mut rows: csv::Reader<R>,
) -> Result<(), Error> {
    let mut added: usize = 0;

    for row in rows.deserialize() {
        let record: AirportRecord = row?;
        let (lat, lon) = match (record.lat, record.lon) {
            (Some(lat), Some(lon)) if !record.id.is_empty() => (lat, lon),
            _ => {
                log::warn!("airport record missing identifier or coordinates, skipping");
                continue;
            }
        };

        if g.add_waypoint(Waypoint {
            name: record.id,
            lat,
            lon,
            kind: WaypointKind::Airport,
            runway: String::new(),
        }) {
            added += 1;
        }
    }

    log::info!("loaded {added} airports");
    Ok(())
}

/// Replays enroute airway segments into [AirwayGraph::add_airway] calls.
///
/// Enroute airways are navigable in both directions, so every segment
/// results in two insertion calls, one per direction. Segments referencing
/// waypoints absent from the graph are skipped by [AirwayGraph::add_airway].
pub(super) fn add_airway_segments<R: io::Read>(
    g: &mut AirwayGraph,
    mut rows: csv::Reader<R>,
) -> Result<(), Error> {
    // Airway segments reference waypoints by identifier; an empty graph
    // means fixes/navaids/airports were not loaded first.
    if g.is_empty() {
        return Err(Error::NoWaypoints);
    }

    let mut added: usize = 0;

    for row in rows.deserialize() {
        let record: AirwaySegmentRecord = row?;
        let (from, to) = match (&record.from, &record.to) {
            (Some(from), Some(to)) => (from.as_str(), to.as_str()),
            _ => continue, // last segment of an airway has no NEXT_SEG
        };

        if g.add_airway(from, to, AirwayKind::Enroute, &record.airway_id) {
            added += 1;
        }
        if g.add_airway(to, from, AirwayKind::Enroute, &record.airway_id) {
            added += 1;
        }
    }

    log::info!("loaded {added} enroute airways");
    Ok(())
}
