//! Canonical soil columns and forcing series.
//!
//! Fixtures panic on invalid input; they are only ever called with
//! known-good constants.

use loam_core::{LengthUnit, SoilColumn, SoilTexture};
use loam_forcing::DailyForcing;
use loam_roots::RootDistribution;

/// Two-layer column: thicknesses `[10, 20]` mm, capacities `[4, 8]` mm,
/// root fractions `[0.6, 0.4]`, residual floor 0.1 (floors `[1, 2]` mm).
pub fn two_layer_column() -> SoilColumn {
    SoilColumn::from_parts(&[10.0, 20.0], &[4.0, 8.0], &[0.6, 0.4], 0.1)
        .expect("two-layer fixture is valid")
}

/// Six CABLE-proportioned layers spanning 2 m, in mm.
pub const REFERENCE_THICKNESSES_MM: [f64; 6] = [10.0, 25.0, 67.0, 178.0, 472.0, 1248.0];

/// Reference coarse-sand column with Jackson roots for extinction
/// coefficient `beta`.
///
/// Fractions are renormalised so shallow-rooted and deep-rooted
/// variants are both valid columns.
pub fn reference_column(beta: f64) -> SoilColumn {
    let roots = RootDistribution::builder()
        .thicknesses(&REFERENCE_THICKNESSES_MM, LengthUnit::Millimetres)
        .beta(beta)
        .build()
        .expect("reference root fixture is valid")
        .renormalized();
    SoilColumn::from_texture(
        &REFERENCE_THICKNESSES_MM,
        &SoilTexture::COARSE_SAND,
        roots.fractions(),
    )
    .expect("reference column fixture is valid")
}

/// `n_days` of identical rain and demand.
pub fn constant_forcing(n_days: usize, precipitation: f64, demand: f64) -> DailyForcing {
    DailyForcing::with_constant_demand(vec![precipitation; n_days], demand)
        .expect("constant forcing fixture is valid")
}

/// `n_days` without rain at constant demand.
pub fn dry_forcing(n_days: usize, demand: f64) -> DailyForcing {
    constant_forcing(n_days, 0.0, demand)
}

/// A storm every `interval` days, dry in between.
pub fn pulsed_forcing(n_days: usize, interval: usize, storm: f64, demand: f64) -> DailyForcing {
    let rain = (0..n_days)
        .map(|d| if d % interval == 0 { storm } else { 0.0 })
        .collect();
    DailyForcing::with_constant_demand(rain, demand).expect("pulsed forcing fixture is valid")
}
