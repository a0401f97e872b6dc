//! Water conservation checks over a recorded run.
//!
//! Two balances are checked for every day `d`:
//!
//! ```text
//! storage(d) − storage(d−1) == throughfall − transpired − drainage_lost + clamped
//! demand                    == transpired + unmet_demand
//! ```
//!
//! where `storage(−1)` is the run's initial storage. Both hold by
//! construction up to floating-point rounding; a residual beyond the
//! caller's tolerance produces a [`BalanceAnomaly`] for the first failing
//! day.

use loam_core::DayIndex;

use crate::series::BalanceRun;

/// Which balance a [`BalanceAnomaly`] violates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Imbalance {
    /// Storage change not explained by the day's fluxes.
    Storage,
    /// Transpired plus unmet demand differs from the day's demand.
    Demand,
}

/// The first day on which a balance failed.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceAnomaly {
    /// The failing day.
    pub day: DayIndex,
    /// Which balance failed.
    pub kind: Imbalance,
    /// Signed residual (mm): left-hand side minus right-hand side.
    pub residual: f64,
    /// Human-readable description.
    pub message: String,
}

/// The result of checking a run.
#[derive(Clone, Debug, PartialEq)]
pub enum ConservationResult {
    /// Every day balances within tolerance.
    Balanced,
    /// At least one day does not.
    Anomaly(BalanceAnomaly),
}

impl ConservationResult {
    /// `true` if every day balanced.
    pub fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }
}

/// Check both daily balances for every day of `run`.
pub fn verify_conservation(run: &BalanceRun, tolerance: f64) -> ConservationResult {
    let mut previous: f64 = run.initial_water().iter().sum();
    for (d, row) in run.water_content().rows().enumerate() {
        let storage: f64 = row.iter().sum();
        let fluxes = run.throughfall()[d] - run.transpired()[d] - run.drainage_lost()[d]
            + run.clamped()[d];
        let residual = (storage - previous) - fluxes;
        if residual.abs() > tolerance || residual.is_nan() {
            return anomaly(d, Imbalance::Storage, residual, tolerance);
        }

        let residual = run.demand()[d] - (run.transpired()[d] + run.unmet_demand()[d]);
        if residual.abs() > tolerance || residual.is_nan() {
            return anomaly(d, Imbalance::Demand, residual, tolerance);
        }
        previous = storage;
    }
    ConservationResult::Balanced
}

fn anomaly(day: usize, kind: Imbalance, residual: f64, tolerance: f64) -> ConservationResult {
    let what = match kind {
        Imbalance::Storage => "storage change does not match fluxes",
        Imbalance::Demand => "transpired + unmet does not match demand",
    };
    ConservationResult::Anomaly(BalanceAnomaly {
        day: DayIndex(day),
        kind,
        residual,
        message: format!(
            "day {day}: {what} (residual {residual:e} mm, tolerance {tolerance:e} mm)"
        ),
    })
}
