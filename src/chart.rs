//! Bar-chart rendering for the weekly report.
//!
//! Two PNG charts: weekly fuel usage and CO2 emissions per operator on dual
//! y-axes, and weekly hydrogen requirement per operator. A rendering failure
//! is fatal to the run.

use std::path::Path;

use plotters::prelude::*;

use crate::error::AnalysisError;
use crate::summary::WeeklySummary;

struct ChartStyle;

impl ChartStyle {
    const WIDTH_PX: u32 = 1024;
    const HEIGHT_PX: u32 = 640;
    const MARGIN: i32 = 16;
    const FONT_FAMILY: &'static str = "sans-serif";
    const CAPTION_FONT_SIZE: i32 = 24;
    const AXIS_DESC_FONT_SIZE: i32 = 16;
    const X_LABEL_AREA_SIZE: u32 = 48;
    const Y_LABEL_AREA_SIZE: u32 = 64;
    const BAR_GAP_PX: u32 = 24;
    const BACKGROUND: RGBColor = WHITE;
    /// House green used for the report bars (#95c22b).
    const BAR_GREEN: RGBColor = RGBColor(0x95, 0xc2, 0x2b);
    /// Darker companion shade for the emissions series.
    const BAR_DARK_GREEN: RGBColor = RGBColor(0x4f, 0x77, 0x1c);
}

fn chart_error(path: &Path, stage: &str, err: impl std::fmt::Debug) -> AnalysisError {
    AnalysisError::ChartRender {
        path: path.to_path_buf(),
        message: format!("{stage}: {err:?}"),
    }
}

fn empty_input_error(path: &Path) -> AnalysisError {
    AnalysisError::ChartRender {
        path: path.to_path_buf(),
        message: "no operator summaries to plot".to_string(),
    }
}

/// Upper axis bound: the series maximum plus 10% headroom, or 1.0 for an
/// all-zero series so the range stays drawable.
fn axis_max<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let max = values.into_iter().fold(0.0_f64, f64::max);
    if max > 0.0 { max * 1.1 } else { 1.0 }
}

fn segment_label(value: &SegmentValue<usize>, labels: &[String]) -> String {
    match value {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Renders the grouped fuel-usage / emissions chart on dual y-axes: fuel on
/// the left axis, emissions on the right, one bar of each per operator.
pub fn render_fuel_emissions_chart(
    path: &Path,
    summaries: &[WeeklySummary],
) -> Result<(), AnalysisError> {
    if summaries.is_empty() {
        return Err(empty_input_error(path));
    }

    let groups = summaries.len();
    let labels: Vec<String> = summaries.iter().map(|s| s.operator.to_string()).collect();
    let fuel_max = axis_max(summaries.iter().map(|s| s.fuel_thousand_gallons));
    let emissions_max = axis_max(summaries.iter().map(|s| s.emissions_thousand_kg));

    let root =
        BitMapBackend::new(path, (ChartStyle::WIDTH_PX, ChartStyle::HEIGHT_PX)).into_drawing_area();
    root.fill(&ChartStyle::BACKGROUND)
        .map_err(|e| chart_error(path, "background fill error", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(ChartStyle::MARGIN)
        .caption(
            "Weekly fuel usage and emissions for different Oxfordshire bus networks",
            (ChartStyle::FONT_FAMILY, ChartStyle::CAPTION_FONT_SIZE),
        )
        .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
        .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
        .right_y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
        .build_cartesian_2d((0..groups).into_segmented(), 0.0..fuel_max)
        .map_err(|e| chart_error(path, "chart build error", e))?
        .set_secondary_coord((0..groups).into_segmented(), 0.0..emissions_max);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|v| segment_label(v, &labels))
        .x_desc("Service Provider")
        .y_desc("Fuel Usage (thousands of gallons)")
        .axis_desc_style((ChartStyle::FONT_FAMILY, ChartStyle::AXIS_DESC_FONT_SIZE))
        .draw()
        .map_err(|e| chart_error(path, "mesh draw error", e))?;

    chart
        .configure_secondary_axes()
        .y_desc("CO2 Emissions (thousands of kgs)")
        .axis_desc_style((ChartStyle::FONT_FAMILY, ChartStyle::AXIS_DESC_FONT_SIZE))
        .draw()
        .map_err(|e| chart_error(path, "secondary axis draw error", e))?;

    // Left half of each segment: fuel on the primary axis.
    chart
        .draw_series(summaries.iter().enumerate().map(|(i, s)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::CenterOf(i), s.fuel_thousand_gallons),
                ],
                ChartStyle::BAR_GREEN.filled(),
            )
        }))
        .map_err(|e| chart_error(path, "fuel series draw error", e))?
        .label("Fuel usage")
        .legend(|(x, y)| {
            Rectangle::new(
                [(x - 6, y - 6), (x + 6, y + 6)],
                ChartStyle::BAR_GREEN.filled(),
            )
        });

    // Right half: emissions on the secondary axis.
    chart
        .draw_secondary_series(summaries.iter().enumerate().map(|(i, s)| {
            Rectangle::new(
                [
                    (SegmentValue::CenterOf(i), 0.0),
                    (SegmentValue::Exact(i + 1), s.emissions_thousand_kg),
                ],
                ChartStyle::BAR_DARK_GREEN.filled(),
            )
        }))
        .map_err(|e| chart_error(path, "emissions series draw error", e))?
        .label("CO2 emissions")
        .legend(|(x, y)| {
            Rectangle::new(
                [(x - 6, y - 6), (x + 6, y + 6)],
                ChartStyle::BAR_DARK_GREEN.filled(),
            )
        });

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| chart_error(path, "legend draw error", e))?;

    root.present()
        .map_err(|e| chart_error(path, "present error", e))?;

    Ok(())
}

/// Renders the weekly hydrogen requirement bar chart.
pub fn render_hydrogen_chart(
    path: &Path,
    summaries: &[WeeklySummary],
) -> Result<(), AnalysisError> {
    if summaries.is_empty() {
        return Err(empty_input_error(path));
    }

    let groups = summaries.len();
    let labels: Vec<String> = summaries.iter().map(|s| s.operator.to_string()).collect();
    let hydrogen_max = axis_max(summaries.iter().map(|s| s.hydrogen_thousand_kg));

    let root =
        BitMapBackend::new(path, (ChartStyle::WIDTH_PX, ChartStyle::HEIGHT_PX)).into_drawing_area();
    root.fill(&ChartStyle::BACKGROUND)
        .map_err(|e| chart_error(path, "background fill error", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(ChartStyle::MARGIN)
        .caption(
            "Weekly hydrogen requirement for different Oxfordshire bus networks",
            (ChartStyle::FONT_FAMILY, ChartStyle::CAPTION_FONT_SIZE),
        )
        .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
        .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
        .build_cartesian_2d((0..groups).into_segmented(), 0.0..hydrogen_max)
        .map_err(|e| chart_error(path, "chart build error", e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|v| segment_label(v, &labels))
        .x_desc("Service Provider")
        .y_desc("Hydrogen requirement (thousands of kgs)")
        .axis_desc_style((ChartStyle::FONT_FAMILY, ChartStyle::AXIS_DESC_FONT_SIZE))
        .draw()
        .map_err(|e| chart_error(path, "mesh draw error", e))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(ChartStyle::BAR_GREEN.filled())
                .margin(ChartStyle::BAR_GAP_PX)
                .data(
                    summaries
                        .iter()
                        .enumerate()
                        .map(|(i, s)| (i, s.hydrogen_thousand_kg)),
                ),
        )
        .map_err(|e| chart_error(path, "hydrogen series draw error", e))?;

    root.present()
        .map_err(|e| chart_error(path, "present error", e))?;

    Ok(())
}
