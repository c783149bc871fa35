// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use serde::Deserialize;

/// Represents a row of the NASR `FIX_BASE.csv` file.
///
/// Unknown columns are ignored; coordinate fields may be empty in the
/// source data and are therefore optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FixRecord {
    #[serde(rename = "FIX_ID")]
    pub id: String,

    #[serde(rename = "LAT_DECIMAL")]
    pub lat: Option<f64>,

    #[serde(rename = "LONG_DECIMAL")]
    pub lon: Option<f64>,
}

/// Represents a row of the NASR `NAV_BASE.csv` file.
///
/// Navaid identifiers alone are not unique (the same two-letter code may
/// be reused across the country), so the stored waypoint name is the
/// `{id}_{name}_{nav_type}` combination.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavaidRecord {
    #[serde(rename = "NAV_ID")]
    pub id: String,

    #[serde(rename = "NAME")]
    pub name: String,

    #[serde(rename = "NAV_TYPE")]
    pub nav_type: String,

    #[serde(rename = "LAT_DECIMAL")]
    pub lat: Option<f64>,

    #[serde(rename = "LONG_DECIMAL")]
    pub lon: Option<f64>,
}

impl NavaidRecord {
    /// The unique waypoint name under which this navaid is stored.
    pub fn waypoint_name(&self) -> String {
        format!("{}_{}_{}", self.id, self.name, self.nav_type)
    }
}

/// Represents a row of the NASR `APT_BASE.csv` file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirportRecord {
    #[serde(rename = "ARPT_ID")]
    pub id: String,

    #[serde(rename = "LAT_DECIMAL")]
    pub lat: Option<f64>,

    #[serde(rename = "LONG_DECIMAL")]
    pub lon: Option<f64>,
}

/// Represents a row of the NASR `AWY_SEG.csv` file: one segment of an
/// enroute airway, from `SEG_VALUE` to `NEXT_SEG`.
///
/// The last segment of each airway has no `NEXT_SEG` and is skipped by
/// the loader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirwaySegmentRecord {
    #[serde(rename = "AWY_ID")]
    pub airway_id: String,

    #[serde(rename = "SEG_VALUE")]
    pub from: Option<String>,

    #[serde(rename = "NEXT_SEG")]
    pub to: Option<String>,
}
