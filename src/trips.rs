//! Core trip-data types: the fixed operator groups, day types, and the
//! context structs that carry loaded tables between pipeline stages.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The four operator groups covered by the report. This is a closed set:
/// the eight input tables are fixed and nothing else is ever loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = "OBC")]
    Obc,
    #[serde(rename = "Stagecoach")]
    Stagecoach,
    #[serde(rename = "Thames Travel")]
    ThamesTravel,
    /// Routes run jointly by OBC and Stagecoach, reported as their own
    /// group rather than redistributed into the other two.
    #[serde(rename = "Shared")]
    Shared,
}

impl Operator {
    /// Report order; datasets are loaded and summarized in this order.
    pub const ALL: [Operator; 4] = [
        Operator::Obc,
        Operator::Stagecoach,
        Operator::ThamesTravel,
        Operator::Shared,
    ];

    /// Human-readable name used in charts and report output.
    pub fn label(&self) -> &'static str {
        match self {
            Operator::Obc => "OBC",
            Operator::Stagecoach => "Stagecoach",
            Operator::ThamesTravel => "Thames Travel",
            Operator::Shared => "Shared",
        }
    }

    /// File-name stem of this operator's datasets, e.g. `obc-weekday.csv`.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Operator::Obc => "obc",
            Operator::Stagecoach => "stagecoach",
            Operator::ThamesTravel => "thames-travel",
            Operator::Shared => "shared",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day classification for a trip table. Weekday tables stand for five days
/// of service per week, weekend tables for two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub const ALL: [DayType; 2] = [DayType::Weekday, DayType::Weekend];

    /// Number of days per week this table counts for.
    pub fn weekly_multiplier(&self) -> f64 {
        match self {
            DayType::Weekday => 5.0,
            DayType::Weekend => 2.0,
        }
    }

    pub fn file_suffix(&self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}

/// A single service-day row from an input table. Extra CSV columns are
/// ignored; the derived fuel column is computed downstream, never written
/// back into the table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Daily Total Distance (miles)")]
    pub distance_miles: f64,
    #[serde(rename = "MPG rating")]
    pub mpg_rating: f64,
}

/// One loaded table plus the path it came from, kept for error reporting.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub path: PathBuf,
    pub records: Vec<TripRecord>,
}

/// Both day-type tables for one operator.
#[derive(Debug, Clone)]
pub struct OperatorTrips {
    pub operator: Operator,
    pub weekday: TripTable,
    pub weekend: TripTable,
}

/// The full set of loaded input data, in report order. Owned by the caller
/// and handed through the pipeline explicitly.
#[derive(Debug, Clone)]
pub struct FleetTrips {
    pub operators: Vec<OperatorTrips>,
}
