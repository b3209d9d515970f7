//! CLI entry point for the bus fuel report tool.
//!
//! Provides subcommands for generating the weekly fuel, emissions, and
//! hydrogen report across all operators, and for inspecting the derived
//! fuel usage of a single trip dataset.

use anyhow::Result;
use bus_fuel_report::{
    chart::{render_fuel_emissions_chart, render_hydrogen_chart},
    fuel::{derive_fleet, derive_table, total_fuel_gallons},
    loader::{load_fleet, load_table},
    report::{FleetReport, write_fuel_csv, write_hydrogen_text, write_json, write_summary_csv},
    summary::summarize_fleet,
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bus_fuel_report")]
#[command(about = "A tool to analyze bus fleet fuel usage and emissions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the weekly fuel, emissions, and hydrogen report
    Report {
        /// Directory containing the per-operator trip CSVs
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        /// Directory to write the report charts to
        #[arg(short, long, default_value = "reports")]
        out_dir: PathBuf,

        /// Optional: CSV file to write the per-operator summary rows to
        #[arg(long)]
        summary_csv: Option<PathBuf>,

        /// Print the report as JSON instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Derive per-trip fuel usage for a single dataset
    Inspect {
        /// Path to the trip CSV to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// CSV file to write the derived rows to
        #[arg(short, long, default_value = "fuel-usage.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bus_fuel_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bus_fuel_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            data_dir,
            out_dir,
            summary_csv,
            json,
        } => {
            run_report(&data_dir, &out_dir, summary_csv.as_deref(), json)?;
        }
        Commands::Inspect { file, output } => {
            inspect_table(&file, &output)?;
        }
    }

    Ok(())
}

/// Runs the full weekly report: load all datasets, derive fuel usage,
/// summarize per operator, render charts, and print the hydrogen series.
#[tracing::instrument(
    skip_all,
    fields(data_dir = %data_dir.display(), out_dir = %out_dir.display())
)]
fn run_report(
    data_dir: &Path,
    out_dir: &Path,
    summary_csv: Option<&Path>,
    json: bool,
) -> Result<()> {
    let trips = load_fleet(data_dir)?;
    let fuel = derive_fleet(&trips)?;
    let summaries = summarize_fleet(&fuel);
    let report = FleetReport::new(summaries);

    std::fs::create_dir_all(out_dir)?;

    let fuel_chart = out_dir.join("weekly-fuel-emissions.png");
    render_fuel_emissions_chart(&fuel_chart, &report.summaries)?;
    info!(path = %fuel_chart.display(), "Fuel and emissions chart written");

    let hydrogen_chart = out_dir.join("weekly-hydrogen-requirement.png");
    render_hydrogen_chart(&hydrogen_chart, &report.summaries)?;
    info!(path = %hydrogen_chart.display(), "Hydrogen requirement chart written");

    if let Some(path) = summary_csv {
        write_summary_csv(path, &report)?;
        info!(path = %path.display(), "Summary CSV written");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        write_json(&mut out, &report)?;
    } else {
        write_hydrogen_text(&mut out, &report)?;
    }

    Ok(())
}

/// Derives per-trip fuel usage for a single dataset and writes it as CSV.
#[tracing::instrument(skip_all, fields(file = %file.display(), output = %output.display()))]
fn inspect_table(file: &Path, output: &Path) -> Result<()> {
    let table = load_table(file)?;
    let records = derive_table(&table)?;

    write_fuel_csv(output, &records)?;
    info!(
        rows = records.len(),
        total_gallons = total_fuel_gallons(&records),
        "Fuel usage derived"
    );

    Ok(())
}
