//! One-call entry point over plain per-layer and per-day arrays.

use loam_core::{ConfigError, SoilColumn};
use loam_forcing::DailyForcing;

use crate::config::{BalanceConfig, InitialState};
use crate::engine::WaterBalanceEngine;
use crate::series::BalanceRun;

/// Run the layered water balance over a forcing period.
///
/// - `layer_thicknesses`, `layer_capacities`: per layer, mm, surface first;
/// - `root_fractions`: per layer, summing to one (rescaled if within
///   [`ROOT_FRACTION_TOLERANCE`](loam_core::ROOT_FRACTION_TOLERANCE));
/// - `precipitation`, `transpiration_demand`: per day, mm;
/// - `residual_floor`: volumetric, applied to every layer as
///   `floor = residual_floor × thickness`;
/// - `initial_saturation_fraction`: every layer starts at this fraction
///   of its capacity.
///
/// Uses the cascading-deficit extraction policy and no canopy
/// interception. For anything else build a [`BalanceConfig`] and drive a
/// [`WaterBalanceEngine`] directly.
///
/// # Errors
///
/// Any [`ConfigError`] from column, initial-state or forcing validation.
/// Nothing is simulated unless every input is valid.
pub fn run_water_balance(
    layer_thicknesses: &[f64],
    layer_capacities: &[f64],
    root_fractions: &[f64],
    precipitation: &[f64],
    transpiration_demand: &[f64],
    residual_floor: f64,
    initial_saturation_fraction: f64,
) -> Result<BalanceRun, ConfigError> {
    let column = SoilColumn::from_parts(
        layer_thicknesses,
        layer_capacities,
        root_fractions,
        residual_floor,
    )?;
    let forcing = DailyForcing::new(precipitation.to_vec(), transpiration_demand.to_vec())?;
    let config = BalanceConfig::new(column)
        .with_initial(InitialState::SaturationFraction(initial_saturation_fraction));
    let mut engine = WaterBalanceEngine::new(config)?;
    Ok(engine.run(&forcing))
}
