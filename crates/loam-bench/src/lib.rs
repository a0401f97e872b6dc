//! Reference profiles for benchmarks and examples.
//!
//! - [`reference_profile`]: six CABLE-proportioned layers over 2 m of
//!   coarse sand, Jackson roots (β = 0.9), one year of seeded Beta
//!   rainfall against 3 mm/day transpiration demand.
//! - [`stress_profile`]: the same column over a decade with a much drier
//!   rainfall regime, so most days hit the residual floor somewhere.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use loam_core::{cable_layering, ConfigError, LengthUnit, SoilColumn, SoilTexture};
use loam_engine::{BalanceConfig, InitialState};
use loam_forcing::{BetaRainfall, DailyForcing};
use loam_roots::{RootDistribution, DEFAULT_ROOT_BETA};

/// Column depth of the reference profiles (mm).
pub const REFERENCE_DEPTH_MM: f64 = 2000.0;

/// Constant daily transpiration demand of the reference profiles (mm).
pub const REFERENCE_DEMAND_MM: f64 = 3.0;

/// A configuration paired with the forcing to drive it with.
#[derive(Clone, Debug)]
pub struct Profile {
    /// Engine configuration.
    pub config: BalanceConfig,
    /// Daily forcing.
    pub forcing: DailyForcing,
}

/// The reference coarse-sand column with roots for extinction coefficient `beta`.
pub fn reference_column(beta: f64) -> Result<SoilColumn, ConfigError> {
    let thicknesses = cable_layering(REFERENCE_DEPTH_MM);
    let roots = RootDistribution::builder()
        .thicknesses(&thicknesses, LengthUnit::Millimetres)
        .beta(beta)
        .build()?
        .renormalized();
    SoilColumn::from_texture(&thicknesses, &SoilTexture::COARSE_SAND, roots.fractions())
}

/// One year of the reference column, starting just below saturation.
pub fn reference_profile(seed: u64) -> Result<Profile, ConfigError> {
    let config = BalanceConfig::new(reference_column(DEFAULT_ROOT_BETA)?)
        .with_initial(InitialState::SaturationFraction(0.9999));
    let forcing = BetaRainfall::builder()
        .seed(seed)
        .build()?
        .forcing(365, REFERENCE_DEMAND_MM)?;
    Ok(Profile { config, forcing })
}

/// Ten years of the reference column under sparse, light rain.
pub fn stress_profile(seed: u64) -> Result<Profile, ConfigError> {
    let config = BalanceConfig::new(reference_column(DEFAULT_ROOT_BETA)?)
        .with_initial(InitialState::SaturationFraction(0.5));
    let forcing = BetaRainfall::builder()
        .alpha(0.02)
        .range(0.0, 20.0)
        .seed(seed)
        .build()?
        .forcing(3650, REFERENCE_DEMAND_MM)?;
    Ok(Profile { config, forcing })
}
