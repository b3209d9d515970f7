//! CSV ingestion for the eight fixed trip tables.
//!
//! One file per (operator, day-type) pair, named `<operator>-<daytype>.csv`.
//! A missing file, a missing required column, or a malformed row aborts the
//! whole run.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::AnalysisError;
use crate::trips::{DayType, FleetTrips, Operator, OperatorTrips, TripRecord, TripTable};

/// Columns every input table must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 2] = ["Daily Total Distance (miles)", "MPG rating"];

/// File name of one (operator, day-type) dataset, e.g. `obc-weekday.csv`.
pub fn dataset_file_name(operator: Operator, day_type: DayType) -> String {
    format!("{}-{}.csv", operator.file_stem(), day_type.file_suffix())
}

/// Loads a single trip table.
///
/// # Errors
///
/// `DatasetRead` if the file cannot be opened, `MissingColumn` if the header
/// row lacks a required column, `DatasetParse` if a row fails to deserialize.
pub fn load_table(path: &Path) -> Result<TripTable, AnalysisError> {
    let file = File::open(path).map_err(|source| AnalysisError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = csv::Reader::from_reader(file);

    let headers = rdr
        .headers()
        .map_err(|source| AnalysisError::DatasetParse {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AnalysisError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: TripRecord = result.map_err(|source| AnalysisError::DatasetParse {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    debug!(path = %path.display(), rows = records.len(), "Trip table loaded");

    Ok(TripTable {
        path: path.to_path_buf(),
        records,
    })
}

/// Loads all eight datasets from `data_dir`, in report order.
pub fn load_fleet(data_dir: &Path) -> Result<FleetTrips, AnalysisError> {
    let mut operators = Vec::with_capacity(Operator::ALL.len());

    for operator in Operator::ALL {
        let weekday = load_table(&data_dir.join(dataset_file_name(operator, DayType::Weekday)))?;
        let weekend = load_table(&data_dir.join(dataset_file_name(operator, DayType::Weekend)))?;
        operators.push(OperatorTrips {
            operator,
            weekday,
            weekend,
        });
    }

    Ok(FleetTrips { operators })
}
