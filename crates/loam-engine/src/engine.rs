//! The day-stepped water balance engine.
//!
//! [`WaterBalanceEngine`] owns a validated soil column and the mutable
//! per-layer water state. Each [`step_day()`](WaterBalanceEngine::step_day)
//! runs one surface-to-depth pass (see [`policy`](crate::policy)) and
//! returns that day's fluxes; [`run()`](WaterBalanceEngine::run) drives a
//! whole forcing series and records every day.
//!
//! # Ownership model
//!
//! `WaterBalanceEngine` is [`Send`] and holds no shared state, so
//! independent engines can run on separate threads (see
//! [`BatchedRuns`](crate::BatchedRuns)). All mutating methods take
//! `&mut self`.

use loam_core::{ConfigError, DayIndex, SoilColumn};
use loam_forcing::{DailyForcing, DailyInput};

use crate::config::BalanceConfig;
use crate::policy::{advance_day, DayOutcome, ExtractionPolicy};
use crate::series::BalanceRun;

// Compile-time assertion: WaterBalanceEngine is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<WaterBalanceEngine>();
    }
};

/// Single-column soil water balance simulator.
///
/// # Example
///
/// ```ignore
/// let mut engine = WaterBalanceEngine::new(BalanceConfig::new(column))?;
/// let run = engine.run(&forcing);
/// println!("unmet: {:?}", run.unmet_demand());
/// ```
pub struct WaterBalanceEngine {
    column: SoilColumn,
    policy: ExtractionPolicy,
    initial: Vec<f64>,
    water: Vec<f64>,
    day: DayIndex,
}

impl WaterBalanceEngine {
    /// Create an engine from a [`BalanceConfig`].
    ///
    /// Resolves and validates the initial state. Consumes the config.
    pub fn new(config: BalanceConfig) -> Result<Self, ConfigError> {
        let initial = config.initial_water()?;
        tracing::debug!(
            layers = config.column.len(),
            depth_mm = config.column.total_depth(),
            capacity_mm = config.column.total_capacity(),
            policy = ?config.policy,
            "water balance engine created"
        );
        Ok(Self {
            column: config.column,
            policy: config.policy,
            water: initial.clone(),
            initial,
            day: DayIndex::default(),
        })
    }

    /// Advance one day with the given forcing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidForcing`] if any component of
    /// `input` is negative or non-finite. The state is left untouched.
    pub fn step_day(&mut self, input: &DailyInput) -> Result<DayOutcome, ConfigError> {
        input.validate(self.day)?;
        Ok(self.advance(input))
    }

    /// Drive the engine through every day of `forcing`, recording each day.
    ///
    /// Continues from the current state; call [`reset()`](Self::reset)
    /// first to start from the initial state. The forcing is already
    /// validated, so this cannot fail.
    pub fn run(&mut self, forcing: &DailyForcing) -> BalanceRun {
        let mut run = BalanceRun::with_capacity(
            self.water.clone(),
            self.column.thicknesses(),
            forcing.n_days(),
        );
        for input in forcing.iter() {
            let outcome = self.advance(&input);
            run.record(&outcome, &self.water);
        }
        let summary = run.summary();
        tracing::debug!(
            days = summary.days,
            transpired_mm = summary.total_transpired,
            unmet_mm = summary.total_unmet_demand,
            drainage_mm = summary.total_drainage_lost,
            stress_days = summary.stress_days,
            "water balance run complete"
        );
        run
    }

    /// Restore the initial state and day counter.
    pub fn reset(&mut self) {
        self.water.copy_from_slice(&self.initial);
        self.day = DayIndex::default();
    }

    fn advance(&mut self, input: &DailyInput) -> DayOutcome {
        let outcome = advance_day(
            self.column.layers(),
            &mut self.water,
            input,
            self.policy,
            self.day,
        );
        tracing::trace!(
            day = %outcome.day,
            throughfall = outcome.throughfall,
            transpired = outcome.transpired,
            unmet_demand = outcome.unmet_demand,
            drainage_lost = outcome.drainage_lost,
            "day advanced"
        );
        if outcome.is_stressed() {
            tracing::debug!(
                day = %outcome.day,
                demand = outcome.demand,
                unmet_demand = outcome.unmet_demand,
                "transpiration demand not met"
            );
        }
        if outcome.clamped != 0.0 {
            tracing::debug!(day = %outcome.day, clamped = outcome.clamped, "clamped drift");
        }
        self.day = self.day.next();
        outcome
    }

    /// Current per-layer water content (mm), surface first.
    pub fn water_content(&self) -> &[f64] {
        &self.water
    }

    /// Initial per-layer water content (mm).
    pub fn initial_water(&self) -> &[f64] {
        &self.initial
    }

    /// Total water currently stored in the column (mm).
    pub fn storage(&self) -> f64 {
        self.water.iter().sum()
    }

    /// The next day to be simulated (0 after construction or reset).
    pub fn current_day(&self) -> DayIndex {
        self.day
    }

    /// The soil column.
    pub fn column(&self) -> &SoilColumn {
        &self.column
    }

    /// The extraction policy in use.
    pub fn policy(&self) -> ExtractionPolicy {
        self.policy
    }
}

impl std::fmt::Debug for WaterBalanceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaterBalanceEngine")
            .field("layers", &self.column.len())
            .field("policy", &self.policy)
            .field("current_day", &self.day)
            .field("storage", &self.storage())
            .finish()
    }
}
