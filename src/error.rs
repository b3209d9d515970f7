//! Error taxonomy for the report pipeline.
//!
//! Every failure here is fatal: this is a single-pass batch report with no
//! retries. Variants carry the dataset path (and the 1-based data row where
//! it applies) so the offending input can be located.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("failed to read dataset {}: {source}", .path.display())]
    DatasetRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse dataset {}: {source}", .path.display())]
    DatasetParse { path: PathBuf, source: csv::Error },
    #[error("dataset {} is missing required column \"{column}\"", .path.display())]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },
    #[error("dataset {} row {row}: invalid MPG rating {mpg} (must be a positive number)", .path.display())]
    InvalidEfficiency { path: PathBuf, row: usize, mpg: f64 },
    #[error("dataset {} row {row}: invalid distance {miles} (must be a non-negative number)", .path.display())]
    InvalidDistance {
        path: PathBuf,
        row: usize,
        miles: f64,
    },
    #[error("failed to render chart {}: {message}", .path.display())]
    ChartRender { path: PathBuf, message: String },
}
