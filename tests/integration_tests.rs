use bus_fuel_report::error::AnalysisError;
use bus_fuel_report::fuel::{derive_fleet, derive_table, total_fuel_gallons};
use bus_fuel_report::loader::{load_fleet, load_table};
use bus_fuel_report::report::FleetReport;
use bus_fuel_report::summary::{self, summarize_fleet};
use bus_fuel_report::trips::Operator;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_full_pipeline() {
    let trips = load_fleet(&fixtures_dir()).expect("Failed to load datasets");
    let fuel = derive_fleet(&trips).expect("Failed to derive fuel usage");
    let summaries = summarize_fleet(&fuel);

    assert_eq!(summaries.len(), 4);

    // Daily fuel totals per fixture dataset: OBC 57/18, Stagecoach 45/12,
    // Thames Travel 20/6, Shared 13/0 gallons (weekday/weekend).
    let expected = [
        (Operator::Obc, 57.0, 18.0),
        (Operator::Stagecoach, 45.0, 12.0),
        (Operator::ThamesTravel, 20.0, 6.0),
        (Operator::Shared, 13.0, 0.0),
    ];

    for (got, (operator, weekday, weekend)) in summaries.iter().zip(expected) {
        assert_eq!(got.operator, operator);

        let fuel_kgal = (weekday * 5.0 + weekend * 2.0) * 0.001;
        assert!((got.fuel_thousand_gallons - fuel_kgal).abs() < 1e-9);
        assert!(
            (got.emissions_thousand_kg - fuel_kgal * summary::CO2_KG_PER_GALLON).abs() < 1e-9
        );

        let energy_mj = fuel_kgal
            * summary::DIESEL_ENERGY_MJ_PER_GALLON
            * summary::DIESEL_DRIVETRAIN_EFFICIENCY;
        assert!((got.energy_mj - energy_mj).abs() < 1e-9);

        let hydrogen = energy_mj
            / (summary::HYDROGEN_ENERGY_MJ_PER_GALLON * summary::HYDROGEN_DRIVETRAIN_EFFICIENCY)
            * summary::HYDROGEN_MASS_DENSITY_KG_PER_M3;
        assert!((got.hydrogen_thousand_kg - hydrogen).abs() < 1e-9);
    }
}

#[test]
fn test_report_total_matches_sum_of_operators() {
    let trips = load_fleet(&fixtures_dir()).expect("Failed to load datasets");
    let fuel = derive_fleet(&trips).expect("Failed to derive fuel usage");
    let report = FleetReport::new(summarize_fleet(&fuel));

    let sum: f64 = report
        .summaries
        .iter()
        .map(|s| s.hydrogen_thousand_kg)
        .sum();
    assert!((report.total_hydrogen_thousand_kg - sum).abs() < 1e-9);
    assert!(report.total_hydrogen_thousand_kg > 0.0);
}

#[test]
fn test_empty_weekend_dataset_contributes_nothing() {
    let trips = load_fleet(&fixtures_dir()).expect("Failed to load datasets");
    let fuel = derive_fleet(&trips).expect("Failed to derive fuel usage");
    let summaries = summarize_fleet(&fuel);

    // The shared-route weekend fixture has headers but no rows, so the
    // weekly figure comes from weekdays alone.
    let shared = summaries
        .iter()
        .find(|s| s.operator == Operator::Shared)
        .expect("Shared summary missing");
    assert!((shared.fuel_thousand_gallons - 13.0 * 5.0 * 0.001).abs() < 1e-9);
}

#[test]
fn test_inspect_single_dataset() {
    let path = fixtures_dir().join("obc-weekday.csv");
    let table = load_table(&path).expect("Failed to load dataset");
    let records = derive_table(&table).expect("Failed to derive fuel usage");

    assert_eq!(records.len(), 3);
    assert!((records[0].fuel_gallons - 20.0).abs() < 1e-9);
    assert!((total_fuel_gallons(&records) - 57.0).abs() < 1e-9);
}

#[test]
fn test_missing_dataset_reports_which_file() {
    let result = load_fleet(&fixtures_dir().join("does-not-exist"));

    match result {
        Err(AnalysisError::DatasetRead { path, .. }) => {
            assert!(path.to_string_lossy().ends_with("obc-weekday.csv"));
        }
        other => panic!("Expected DatasetRead error, got {other:?}"),
    }
}
