//! Report assembly and output for the weekly fleet summary.
//!
//! Supports plain-text printing, JSON serialization, and CSV export.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::fuel::FuelRecord;
use crate::summary::{self, WeeklySummary};
use std::io::Write;
use std::path::Path;

/// One full report run: per-operator summaries plus the fleet-wide
/// hydrogen total, stamped with the generation time.
#[derive(Debug, Serialize)]
pub struct FleetReport {
    pub generated_at: DateTime<Utc>,
    pub summaries: Vec<WeeklySummary>,
    pub total_hydrogen_thousand_kg: f64,
}

impl FleetReport {
    pub fn new(summaries: Vec<WeeklySummary>) -> Self {
        let total_hydrogen_thousand_kg = summary::total_hydrogen_thousand_kg(&summaries);
        FleetReport {
            generated_at: Utc::now(),
            summaries,
            total_hydrogen_thousand_kg,
        }
    }
}

/// Writes the per-operator hydrogen requirement and the fleet total as
/// aligned plain text.
pub fn write_hydrogen_text(w: &mut impl Write, report: &FleetReport) -> std::io::Result<()> {
    writeln!(w, "Weekly hydrogen requirement (thousands of kgs):")?;
    for s in &report.summaries {
        writeln!(
            w,
            "  {:<14} {:>10.3}",
            s.operator.label(),
            s.hydrogen_thousand_kg
        )?;
    }
    writeln!(w)?;
    writeln!(
        w,
        "Total across all providers: {:.3}",
        report.total_hydrogen_thousand_kg
    )?;
    Ok(())
}

/// Writes the full report as pretty-printed JSON.
pub fn write_json(w: &mut impl Write, report: &FleetReport) -> Result<()> {
    writeln!(w, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}

/// Writes the per-operator summary rows to a CSV file.
pub fn write_summary_csv(path: &Path, report: &FleetReport) -> Result<()> {
    debug!(path = %path.display(), rows = report.summaries.len(), "Writing summary CSV");

    let mut writer = csv::Writer::from_path(path)?;
    for s in &report.summaries {
        writer.serialize(s)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes per-trip fuel rows, including the derived usage column, to a
/// CSV file.
pub fn write_fuel_csv(path: &Path, records: &[FuelRecord]) -> Result<()> {
    debug!(path = %path.display(), rows = records.len(), "Writing fuel usage CSV");

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::Operator;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn summary(operator: Operator, hydrogen_thousand_kg: f64) -> WeeklySummary {
        WeeklySummary {
            operator,
            fuel_thousand_gallons: 0.5,
            emissions_thousand_kg: 6.1,
            energy_mj: 35.875,
            hydrogen_thousand_kg,
        }
    }

    #[test]
    fn test_new_totals_hydrogen_across_operators() {
        let report = FleetReport::new(vec![
            summary(Operator::Obc, 1.5),
            summary(Operator::Shared, 0.25),
        ]);

        assert!((report.total_hydrogen_thousand_kg - 1.75).abs() < 1e-9);
    }

    #[test]
    fn test_write_hydrogen_text_lists_each_operator() {
        let report = FleetReport::new(vec![
            summary(Operator::Obc, 1.5),
            summary(Operator::ThamesTravel, 0.25),
        ]);

        let mut out = Vec::new();
        write_hydrogen_text(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Weekly hydrogen requirement (thousands of kgs):"));
        assert!(text.contains("OBC"));
        assert!(text.contains("1.500"));
        assert!(text.contains("Thames Travel"));
        assert!(text.contains("0.250"));
        assert!(text.contains("Total across all providers: 1.750"));
    }

    #[test]
    fn test_write_json_is_valid_and_complete() {
        let report = FleetReport::new(vec![summary(Operator::Stagecoach, 2.0)]);

        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["summaries"].as_array().unwrap().len(), 1);
        assert_eq!(value["summaries"][0]["operator"], "Stagecoach");
        assert!((value["total_hydrogen_thousand_kg"].as_f64().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_write_summary_csv_one_row_per_operator() {
        let path = temp_path("bus_fuel_report_test_summary.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        let report = FleetReport::new(vec![
            summary(Operator::Obc, 1.5),
            summary(Operator::Shared, 0.25),
        ]);
        write_summary_csv(&path, &report).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3); // header + one row per operator
        assert!(lines[0].contains("hydrogen_thousand_kg"));
        assert!(lines[1].contains("OBC"));
        assert!(lines[2].contains("Shared"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_fuel_csv_keeps_derived_column() {
        let path = temp_path("bus_fuel_report_test_fuel.csv");
        let _ = fs::remove_file(&path);

        let records = vec![FuelRecord {
            distance_miles: 120.0,
            mpg_rating: 6.0,
            fuel_gallons: 20.0,
        }];
        write_fuel_csv(&path, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Daily Fuel Usage (gallons)"));
        assert!(lines[1].contains("20.0"));

        fs::remove_file(&path).unwrap();
    }
}
