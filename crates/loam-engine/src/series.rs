//! Result time series of a water balance run.

use loam_core::{DayIndex, LayerIndex};

use crate::conservation::{verify_conservation, ConservationResult};
use crate::digest::run_fingerprint;
use crate::metrics::RunSummary;
use crate::policy::DayOutcome;

// ── WaterContentSeries ──────────────────────────────────────────

/// End-of-day water content per layer, stored as one flat row-major
/// buffer indexed `[day][layer]`.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterContentSeries {
    n_layers: usize,
    values: Vec<f64>,
}

impl WaterContentSeries {
    pub(crate) fn with_capacity(n_layers: usize, n_days: usize) -> Self {
        debug_assert!(n_layers > 0);
        Self {
            n_layers,
            values: Vec::with_capacity(n_layers * n_days),
        }
    }

    pub(crate) fn push_row(&mut self, row: &[f64]) {
        debug_assert_eq!(row.len(), self.n_layers);
        self.values.extend_from_slice(row);
    }

    /// Number of recorded days.
    pub fn n_days(&self) -> usize {
        self.values.len() / self.n_layers
    }

    /// Number of layers per day.
    pub fn n_layers(&self) -> usize {
        self.n_layers
    }

    /// All layers at the end of `day`, or `None` past the last day.
    pub fn day(&self, day: DayIndex) -> Option<&[f64]> {
        let start = day.0.checked_mul(self.n_layers)?;
        self.values.get(start..start.checked_add(self.n_layers)?)
    }

    /// One layer at the end of one day.
    pub fn get(&self, day: DayIndex, layer: LayerIndex) -> Option<f64> {
        if layer.0 >= self.n_layers {
            return None;
        }
        self.day(day).map(|row| row[layer.0])
    }

    /// Iterate the daily rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.n_layers)
    }

    /// One layer's values over the whole run.
    pub fn layer(&self, layer: LayerIndex) -> impl Iterator<Item = f64> + '_ {
        let skip = if layer.0 < self.n_layers {
            layer.0
        } else {
            self.values.len()
        };
        self.values.iter().skip(skip).step_by(self.n_layers).copied()
    }

    /// The flat `[day][layer]` buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Copy into one `Vec` per day.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    fn map_rows(&self, f: impl Fn(usize, f64) -> f64) -> Self {
        let n = self.n_layers;
        Self {
            n_layers: n,
            values: self
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| f(i % n, v))
                .collect(),
        }
    }
}

// ── BalanceRun ──────────────────────────────────────────────────

/// Everything recorded over one run of the engine.
///
/// Row `d` of [`water_content`](Self::water_content) and entry `d` of
/// every daily series describe day `d` of the forcing the run was
/// driven with.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceRun {
    water_content: WaterContentSeries,
    throughfall: Vec<f64>,
    demand: Vec<f64>,
    transpired: Vec<f64>,
    unmet_demand: Vec<f64>,
    drainage_lost: Vec<f64>,
    clamped: Vec<f64>,
    initial_water: Vec<f64>,
    thicknesses: Vec<f64>,
}

impl BalanceRun {
    pub(crate) fn with_capacity(
        initial_water: Vec<f64>,
        thicknesses: Vec<f64>,
        n_days: usize,
    ) -> Self {
        Self {
            water_content: WaterContentSeries::with_capacity(initial_water.len(), n_days),
            throughfall: Vec::with_capacity(n_days),
            demand: Vec::with_capacity(n_days),
            transpired: Vec::with_capacity(n_days),
            unmet_demand: Vec::with_capacity(n_days),
            drainage_lost: Vec::with_capacity(n_days),
            clamped: Vec::with_capacity(n_days),
            initial_water,
            thicknesses,
        }
    }

    pub(crate) fn record(&mut self, outcome: &DayOutcome, water: &[f64]) {
        self.water_content.push_row(water);
        self.throughfall.push(outcome.throughfall);
        self.demand.push(outcome.demand);
        self.transpired.push(outcome.transpired);
        self.unmet_demand.push(outcome.unmet_demand);
        self.drainage_lost.push(outcome.drainage_lost);
        self.clamped.push(outcome.clamped);
    }

    /// Number of simulated days.
    pub fn n_days(&self) -> usize {
        self.unmet_demand.len()
    }

    /// Number of layers.
    pub fn n_layers(&self) -> usize {
        self.initial_water.len()
    }

    /// End-of-day water content (mm) per layer.
    pub fn water_content(&self) -> &WaterContentSeries {
        &self.water_content
    }

    /// End-of-day volumetric water content (mm³ mm⁻³) per layer.
    pub fn volumetric_water_content(&self) -> WaterContentSeries {
        self.water_content
            .map_rows(|layer, water| water / self.thicknesses[layer])
    }

    /// Daily transpiration demand no layer could supply (mm).
    pub fn unmet_demand(&self) -> &[f64] {
        &self.unmet_demand
    }

    /// Daily drainage out of the bottom of the column (mm).
    pub fn drainage_lost(&self) -> &[f64] {
        &self.drainage_lost
    }

    /// Daily water extracted by roots (mm).
    pub fn transpired(&self) -> &[f64] {
        &self.transpired
    }

    /// Daily transpiration demand imposed on the column (mm).
    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    /// Daily water reaching the soil surface (mm).
    pub fn throughfall(&self) -> &[f64] {
        &self.throughfall
    }

    /// Daily net drift correction applied by clamping (mm).
    pub fn clamped(&self) -> &[f64] {
        &self.clamped
    }

    /// Water content (mm) per layer before the first day.
    pub fn initial_water(&self) -> &[f64] {
        &self.initial_water
    }

    /// Water content (mm) per layer after the last day.
    pub fn final_water(&self) -> &[f64] {
        match self.n_days() {
            0 => &self.initial_water,
            n => self
                .water_content
                .day(DayIndex(n - 1))
                .unwrap_or(&self.initial_water),
        }
    }

    /// Layer thicknesses (mm), surface first.
    pub fn thicknesses(&self) -> &[f64] {
        &self.thicknesses
    }

    /// Total column storage (mm) at the end of `day`.
    pub fn storage(&self, day: DayIndex) -> Option<f64> {
        self.water_content.day(day).map(|row| row.iter().sum())
    }

    /// Run-level totals.
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_run(self)
    }

    /// Check that every day's storage change is explained by its fluxes.
    pub fn verify_conservation(&self, tolerance: f64) -> ConservationResult {
        verify_conservation(self, tolerance)
    }

    /// Order-sensitive hash of every recorded value.
    ///
    /// Runs that recorded bit-identical series share a fingerprint.
    pub fn fingerprint(&self) -> u64 {
        run_fingerprint(self)
    }
}
