//! Run-level totals derived from a [`BalanceRun`].

use crate::series::BalanceRun;

/// Totals over one run. All water quantities in mm.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Number of simulated days.
    pub days: usize,
    /// Water that reached the soil surface.
    pub total_throughfall: f64,
    /// Transpiration demand imposed on the column.
    pub total_demand: f64,
    /// Water extracted by roots.
    pub total_transpired: f64,
    /// Demand the column could not supply.
    pub total_unmet_demand: f64,
    /// Drainage out of the bottom of the column.
    pub total_drainage_lost: f64,
    /// Net drift correction from clamping.
    pub total_clamped: f64,
    /// Final storage minus initial storage.
    pub storage_change: f64,
    /// Days with any unmet demand.
    pub stress_days: usize,
}

impl RunSummary {
    /// Summarise a recorded run.
    pub fn from_run(run: &BalanceRun) -> Self {
        let initial: f64 = run.initial_water().iter().sum();
        let last: f64 = run.final_water().iter().sum();
        Self {
            days: run.n_days(),
            total_throughfall: run.throughfall().iter().sum(),
            total_demand: run.demand().iter().sum(),
            total_transpired: run.transpired().iter().sum(),
            total_unmet_demand: run.unmet_demand().iter().sum(),
            total_drainage_lost: run.drainage_lost().iter().sum(),
            total_clamped: run.clamped().iter().sum(),
            storage_change: last - initial,
            stress_days: run.unmet_demand().iter().filter(|&&u| u > 0.0).count(),
        }
    }

    /// Fraction of demand that was met, in `[0, 1]`. One when there was
    /// no demand.
    pub fn demand_satisfaction(&self) -> f64 {
        if self.total_demand > 0.0 {
            (self.total_transpired / self.total_demand).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}
