// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Loading of [FAA NASR](https://www.faa.gov/air_traffic/flight_info/aeronav/aero_data/NASR_Subscription)
//! subscriber files into an [AirwayGraph].
//!
//! Waypoint files (`FIX_BASE.csv`, `NAV_BASE.csv`, `APT_BASE.csv`) must be
//! loaded before the airway segment file (`AWY_SEG.csv`), as segments
//! reference waypoints by identifier. Records with missing identifiers or
//! coordinates are skipped with a warning; re-loading the same file is
//! harmless, as insertion is first-writer-wins.

use std::fs::File;
use std::io;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::AirwayGraph;

mod loader;
mod records;

pub use records::{AirportRecord, AirwaySegmentRecord, FixRecord, NavaidRecord};

/// Format of an input NASR data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Plain CSV, as distributed in NASR subscriber files
    Csv,

    /// CSV with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    CsvGz,
}

/// Error conditions which may occur when loading NASR files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// Airway segments were loaded into a graph with no waypoints,
    /// indicating the load calls were issued in the wrong order.
    #[error("no waypoints loaded - load fixes, navaids and/or airports before airway segments")]
    NoWaypoints,
}

fn csv_rows<R: io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Parse `FIX_BASE.csv` records from a reader into the [AirwayGraph].
pub fn add_fixes_from_io<R: io::Read>(
    g: &mut AirwayGraph,
    format: FileFormat,
    reader: R,
) -> Result<(), Error> {
    match format {
        FileFormat::Csv => loader::add_fixes(g, csv_rows(reader)),
        FileFormat::CsvGz => loader::add_fixes(g, csv_rows(MultiGzDecoder::new(reader))),
    }
}

/// Parse `FIX_BASE.csv` records from a file at the provided path into the [AirwayGraph].
pub fn add_fixes_from_file<P: AsRef<Path>>(
    g: &mut AirwayGraph,
    format: FileFormat,
    path: P,
) -> Result<(), Error> {
    let f = File::open(path)?;
    add_fixes_from_io(g, format, f)
}

/// Parse `NAV_BASE.csv` records from a reader into the [AirwayGraph].
pub fn add_navaids_from_io<R: io::Read>(
    g: &mut AirwayGraph,
    format: FileFormat,
    reader: R,
) -> Result<(), Error> {
    match format {
        FileFormat::Csv => loader::add_navaids(g, csv_rows(reader)),
        FileFormat::CsvGz => loader::add_navaids(g, csv_rows(MultiGzDecoder::new(reader))),
    }
}

/// Parse `NAV_BASE.csv` records from a file at the provided path into the [AirwayGraph].
pub fn add_navaids_from_file<P: AsRef<Path>>(
    g: &mut AirwayGraph,
    format: FileFormat,
    path: P,
) -> Result<(), Error> {
    let f = File::open(path)?;
    add_navaids_from_io(g, format, f)
}

/// Parse `APT_BASE.csv` records from a reader into the [AirwayGraph].
pub fn add_airports_from_io<R: io::Read>(
    g: &mut AirwayGraph,
    format: FileFormat,
    reader: R,
) -> Result<(), Error> {
    match format {
        FileFormat::Csv => loader::add_airports(g, csv_rows(reader)),
        FileFormat::CsvGz => loader::add_airports(g, csv_rows(MultiGzDecoder::new(reader))),
    }
}

/// Parse `APT_BASE.csv` records from a file at the provided path into the [AirwayGraph].
pub fn add_airports_from_file<P: AsRef<Path>>(
    g: &mut AirwayGraph,
    format: FileFormat,
    path: P,
) -> Result<(), Error> {
    let f = File::open(path)?;
    add_airports_from_io(g, format, f)
}

/// Parse `AWY_SEG.csv` records from a reader into the [AirwayGraph].
///
/// Each segment is inserted in both directions, as enroute airways are
/// navigable both ways. Waypoints must be loaded beforehand; an empty
/// graph results in [Error::NoWaypoints].
pub fn add_airway_segments_from_io<R: io::Read>(
    g: &mut AirwayGraph,
    format: FileFormat,
    reader: R,
) -> Result<(), Error> {
    match format {
        FileFormat::Csv => loader::add_airway_segments(g, csv_rows(reader)),
        FileFormat::CsvGz => loader::add_airway_segments(g, csv_rows(MultiGzDecoder::new(reader))),
    }
}

/// Parse `AWY_SEG.csv` records from a file at the provided path into the [AirwayGraph].
pub fn add_airway_segments_from_file<P: AsRef<Path>>(
    g: &mut AirwayGraph,
    format: FileFormat,
    path: P,
) -> Result<(), Error> {
    let f = File::open(path)?;
    add_airway_segments_from_io(g, format, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_route, AirwayKind, WaypointKind, DEFAULT_STEP_LIMIT};

    const FIXES: &[u8] = include_bytes!("test_fixtures/FIX_BASE.csv");
    const FIXES_GZ: &[u8] = include_bytes!("test_fixtures/FIX_BASE.csv.gz");
    const NAVAIDS: &[u8] = include_bytes!("test_fixtures/NAV_BASE.csv");
    const AIRPORTS: &[u8] = include_bytes!("test_fixtures/APT_BASE.csv");
    const AIRWAYS: &[u8] = include_bytes!("test_fixtures/AWY_SEG.csv");

    #[test]
    fn load_fixes() {
        let mut g = AirwayGraph::default();
        add_fixes_from_io(&mut g, FileFormat::Csv, FIXES).unwrap();

        // BADFX has no coordinates, the duplicate ALPHA row keeps the first
        assert_eq!(g.len(), 3);
        assert!(g.get_waypoint("BADFX").is_none());

        let alpha = g.get_waypoint("ALPHA").unwrap();
        assert_eq!(alpha.kind, WaypointKind::Fix);
        assert_eq!(alpha.lat, 29.5);
        assert_eq!(alpha.lon, -95.0);
    }

    #[test]
    fn load_fixes_gz_round_trip() {
        let mut plain = AirwayGraph::default();
        add_fixes_from_io(&mut plain, FileFormat::Csv, FIXES).unwrap();

        let mut gz = AirwayGraph::default();
        add_fixes_from_io(&mut gz, FileFormat::CsvGz, FIXES_GZ).unwrap();

        assert_eq!(plain, gz);
    }

    #[test]
    fn load_navaids() {
        let mut g = AirwayGraph::default();
        add_navaids_from_io(&mut g, FileFormat::Csv, NAVAIDS).unwrap();

        // The identifier-less row is skipped
        assert_eq!(g.len(), 1);

        let hub = g.get_waypoint("HUB_HOBBY_VORTAC").unwrap();
        assert_eq!(hub.kind, WaypointKind::Navaid);
        assert_eq!(hub.lat, 29.65);
    }

    #[test]
    fn load_airports() {
        let mut g = AirwayGraph::default();
        add_airports_from_io(&mut g, FileFormat::Csv, AIRPORTS).unwrap();

        assert_eq!(g.len(), 2);
        assert_eq!(g.get_waypoint("HOU").unwrap().kind, WaypointKind::Airport);
        assert_eq!(g.get_waypoint("IAH").unwrap().kind, WaypointKind::Airport);
    }

    #[test]
    fn load_airway_segments_in_both_directions() {
        let mut g = AirwayGraph::default();
        add_fixes_from_io(&mut g, FileFormat::Csv, FIXES).unwrap();
        add_airway_segments_from_io(&mut g, FileFormat::Csv, AIRWAYS).unwrap();

        let forward = g.get_airway("ALPHA", "BRAVO").unwrap();
        assert_eq!(forward.kind, AirwayKind::Enroute);
        assert_eq!(forward.name, "V1");

        let backward = g.get_airway("BRAVO", "ALPHA").unwrap();
        assert_eq!(backward.kind, AirwayKind::Enroute);
        assert_eq!(backward.name, "V1");

        // The V9 row references ZULU, which is not a loaded waypoint -
        // the segment is skipped without creating anything
        assert!(g.get_waypoint("ZULU").is_none());
        assert!(g.airways_from("ALPHA").all(|awy| awy.to != "ZULU"));
    }

    #[test]
    fn airway_segments_require_waypoints() {
        let mut g = AirwayGraph::default();
        let err = add_airway_segments_from_io(&mut g, FileFormat::Csv, AIRWAYS).unwrap_err();
        assert!(matches!(err, Error::NoWaypoints));
    }

    #[test]
    fn route_over_loaded_graph() {
        let mut g = AirwayGraph::default();
        add_fixes_from_io(&mut g, FileFormat::Csv, FIXES).unwrap();
        add_airway_segments_from_io(&mut g, FileFormat::Csv, AIRWAYS).unwrap();

        let route = find_route(&g, "ALPHA", "CHARLIE", DEFAULT_STEP_LIMIT).unwrap();
        assert_eq!(route, vec!["ALPHA", "BRAVO", "CHARLIE"]);
    }
}
