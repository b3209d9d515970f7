//! Per-row fuel derivation: the pure transformation from trip records to
//! fuel records. Gallons = miles / MPG.

use serde::Serialize;
use tracing::debug;

use crate::error::AnalysisError;
use crate::trips::{FleetTrips, Operator, TripTable};

/// A trip row with its derived fuel usage. Serializes with the source
/// column headers so exported CSVs line up with the input tables.
#[derive(Debug, Clone, Serialize)]
pub struct FuelRecord {
    #[serde(rename = "Daily Total Distance (miles)")]
    pub distance_miles: f64,
    #[serde(rename = "MPG rating")]
    pub mpg_rating: f64,
    #[serde(rename = "Daily Fuel Usage (gallons)")]
    pub fuel_gallons: f64,
}

/// Derived fuel rows for one operator, by day type.
#[derive(Debug, Clone)]
pub struct OperatorFuel {
    pub operator: Operator,
    pub weekday: Vec<FuelRecord>,
    pub weekend: Vec<FuelRecord>,
}

/// Derived fuel data for the whole fleet, in report order.
#[derive(Debug, Clone)]
pub struct FleetFuel {
    pub operators: Vec<OperatorFuel>,
}

/// Derives fuel usage for every row of a table.
///
/// # Errors
///
/// `InvalidEfficiency` for an MPG rating that is zero, negative, or not
/// finite; `InvalidDistance` for a distance that is negative or not finite.
/// `row` in either error is 1-based over data rows (header excluded).
pub fn derive_table(table: &TripTable) -> Result<Vec<FuelRecord>, AnalysisError> {
    table
        .records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let row = idx + 1;
            if !(record.mpg_rating.is_finite() && record.mpg_rating > 0.0) {
                return Err(AnalysisError::InvalidEfficiency {
                    path: table.path.clone(),
                    row,
                    mpg: record.mpg_rating,
                });
            }
            if !(record.distance_miles.is_finite() && record.distance_miles >= 0.0) {
                return Err(AnalysisError::InvalidDistance {
                    path: table.path.clone(),
                    row,
                    miles: record.distance_miles,
                });
            }
            Ok(FuelRecord {
                distance_miles: record.distance_miles,
                mpg_rating: record.mpg_rating,
                fuel_gallons: record.distance_miles / record.mpg_rating,
            })
        })
        .collect()
}

/// Derives fuel usage across all eight tables.
pub fn derive_fleet(fleet: &FleetTrips) -> Result<FleetFuel, AnalysisError> {
    let mut operators = Vec::with_capacity(fleet.operators.len());

    for trips in &fleet.operators {
        let weekday = derive_table(&trips.weekday)?;
        let weekend = derive_table(&trips.weekend)?;

        debug!(
            operator = %trips.operator,
            weekday_rows = weekday.len(),
            weekend_rows = weekend.len(),
            "Fuel usage derived"
        );

        operators.push(OperatorFuel {
            operator: trips.operator,
            weekday,
            weekend,
        });
    }

    Ok(FleetFuel { operators })
}

/// Sums the daily fuel usage of a derived table, in gallons.
pub fn total_fuel_gallons(records: &[FuelRecord]) -> f64 {
    records.iter().map(|r| r.fuel_gallons).sum()
}
