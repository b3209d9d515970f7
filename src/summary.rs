//! Weekly aggregation and the diesel-to-hydrogen equivalence chain.
//!
//! Weekly totals model five weekday services and two weekend services per
//! week. Totals are scaled into thousands of gallons before any conversion;
//! every downstream figure builds on that scaled value.

use serde::Serialize;

use crate::fuel::{FleetFuel, FuelRecord, OperatorFuel, total_fuel_gallons};
use crate::trips::{DayType, Operator};

/// kg of CO2 released per UK gallon of diesel burnt
/// (2.68 kg CO2 per litre x 4.55 litres per gallon).
pub const CO2_KG_PER_GALLON: f64 = 12.2;

/// Energy content of diesel, MJ per gallon.
pub const DIESEL_ENERGY_MJ_PER_GALLON: f64 = 175.0;

/// Drivetrain efficiency of a diesel bus.
pub const DIESEL_DRIVETRAIN_EFFICIENCY: f64 = 0.41;

/// Energy content of hydrogen, MJ per gallon-equivalent.
pub const HYDROGEN_ENERGY_MJ_PER_GALLON: f64 = 12.6;

/// Drivetrain efficiency of a hydrogen bus.
pub const HYDROGEN_DRIVETRAIN_EFFICIENCY: f64 = 0.6;

/// Mass density of hydrogen, kg per cubic metre.
pub const HYDROGEN_MASS_DENSITY_KG_PER_M3: f64 = 23.0;

/// Display scale applied to weekly totals: gallons into thousands of gallons.
const THOUSANDS: f64 = 0.001;

/// The computed weekly figures for one operator group.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklySummary {
    pub operator: Operator,
    /// thousands of gallons
    pub fuel_thousand_gallons: f64,
    /// thousands of kg of CO2
    pub emissions_thousand_kg: f64,
    /// MJ
    pub energy_mj: f64,
    /// thousands of kg of hydrogen
    pub hydrogen_thousand_kg: f64,
}

/// Weekly fuel usage in thousands of gallons:
/// (weekday total x 5 + weekend total x 2) x 0.001.
///
/// An empty day-type table contributes zero.
pub fn weekly_fuel_thousand_gallons(weekday: &[FuelRecord], weekend: &[FuelRecord]) -> f64 {
    let weekly_gallons = total_fuel_gallons(weekday) * DayType::Weekday.weekly_multiplier()
        + total_fuel_gallons(weekend) * DayType::Weekend.weekly_multiplier();
    weekly_gallons * THOUSANDS
}

/// Runs the full conversion chain for one operator group.
pub fn summarize_operator(fuel: &OperatorFuel) -> WeeklySummary {
    let fuel_thousand_gallons = weekly_fuel_thousand_gallons(&fuel.weekday, &fuel.weekend);
    let emissions_thousand_kg = fuel_thousand_gallons * CO2_KG_PER_GALLON;
    let energy_mj =
        fuel_thousand_gallons * DIESEL_ENERGY_MJ_PER_GALLON * DIESEL_DRIVETRAIN_EFFICIENCY;
    let hydrogen_thousand_kg = (energy_mj
        / (HYDROGEN_ENERGY_MJ_PER_GALLON * HYDROGEN_DRIVETRAIN_EFFICIENCY))
        * HYDROGEN_MASS_DENSITY_KG_PER_M3;

    WeeklySummary {
        operator: fuel.operator,
        fuel_thousand_gallons,
        emissions_thousand_kg,
        energy_mj,
        hydrogen_thousand_kg,
    }
}

/// Summarizes every operator group, in report order.
pub fn summarize_fleet(fleet: &FleetFuel) -> Vec<WeeklySummary> {
    fleet.operators.iter().map(summarize_operator).collect()
}

/// Total weekly hydrogen requirement across all groups, thousands of kg.
pub fn total_hydrogen_thousand_kg(summaries: &[WeeklySummary]) -> f64 {
    summaries.iter().map(|s| s.hydrogen_thousand_kg).sum()
}
