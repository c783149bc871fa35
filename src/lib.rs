// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Flight-plan routing over [FAA NASR](https://www.faa.gov/air_traffic/flight_info/aeronav/aero_data/NASR_Subscription)
//! aeronautical data.
//!
//! It models named fixes, navaids and airports as waypoints of a weighted
//! directed graph, with airways as the edges between them, and runs A* to
//! find the shortest route between two identifiers. The great-circle
//! distance between waypoint coordinates serves both as the edge cost
//! and as the search heuristic.
//!
//! # Example
//!
//! ```no_run
//! use avroute::nasr::{self, FileFormat};
//!
//! let mut g = avroute::AirwayGraph::default();
//! nasr::add_fixes_from_file(&mut g, FileFormat::Csv, "data/FIX_BASE.csv")
//!     .expect("failed to load fixes");
//! nasr::add_airway_segments_from_file(&mut g, FileFormat::Csv, "data/AWY_SEG.csv")
//!     .expect("failed to load airway segments");
//!
//! let route = avroute::find_route(&g, "ZUNIG", "TRUPS", avroute::DEFAULT_STEP_LIMIT)
//!     .expect("failed to find route");
//!
//! println!("Route: {:?}", route);
//! ```

mod astar;
mod distance;
mod graph;
pub mod nasr;

pub use astar::{find_route, RouteError, DEFAULT_STEP_LIMIT};
pub use distance::earth_distance;
pub use graph::AirwayGraph;

/// Category of a [Waypoint].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WaypointKind {
    #[default]
    Custom,
    Fix,
    Navaid,
    Airport,
}

impl std::fmt::Display for WaypointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom => write!(f, "custom"),
            Self::Fix => write!(f, "fix"),
            Self::Navaid => write!(f, "navaid"),
            Self::Airport => write!(f, "airport"),
        }
    }
}

/// Category of an [Airway].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AirwayKind {
    #[default]
    Custom,
    Departure,
    Enroute,
    Arrival,
}

impl std::fmt::Display for AirwayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom => write!(f, "custom"),
            Self::Departure => write!(f, "departure"),
            Self::Enroute => write!(f, "enroute"),
            Self::Arrival => write!(f, "arrival"),
        }
    }
}

/// Represents an element of the [AirwayGraph]: a named navigable point
/// with WGS84 coordinates in decimal degrees.
///
/// `name` is the unique, case-sensitive key of the waypoint. The empty
/// name is disallowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub kind: WaypointKind,

    /// Runway designator, empty when not applicable.
    pub runway: String,
}

/// Represents an outgoing (one-way) connection from a specific [Waypoint].
///
/// Bidirectional airways are stored as two separate instances, one per
/// direction; the graph never infers a reverse edge on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Airway {
    /// Name of the destination [Waypoint], guaranteed to exist in the
    /// same [AirwayGraph].
    pub to: String,

    /// Great-circle distance between the two endpoints, in meters.
    pub distance: f64,

    /// Placeholder for airspace/NOTAM restriction checking;
    /// always set to `true` and never evaluated during route search.
    pub valid: bool,

    pub kind: AirwayKind,

    /// Designator of a named airway or procedure, empty otherwise.
    pub name: String,
}
