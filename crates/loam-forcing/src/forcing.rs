//! Validated daily forcing series.

use loam_core::{ConfigError, DayIndex};

/// One day's forcing, in mm.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DailyInput {
    /// Water arriving above the canopy.
    pub precipitation: f64,
    /// Water intercepted by the canopy and evaporated before reaching the soil.
    pub canopy_interception: f64,
    /// Total transpiration demand imposed on the whole column.
    pub transpiration_demand: f64,
}

impl DailyInput {
    /// A day with no canopy interception.
    pub fn new(precipitation: f64, transpiration_demand: f64) -> Self {
        Self {
            precipitation,
            canopy_interception: 0.0,
            transpiration_demand,
        }
    }

    /// Water reaching the soil surface: precipitation less interception,
    /// never negative.
    pub fn throughfall(&self) -> f64 {
        (self.precipitation - self.canopy_interception).max(0.0)
    }

    /// Check that every component is finite and non-negative.
    pub fn validate(&self, day: DayIndex) -> Result<(), ConfigError> {
        for (series, value) in [
            ("precipitation", self.precipitation),
            ("canopy_interception", self.canopy_interception),
            ("transpiration_demand", self.transpiration_demand),
        ] {
            check_value(series, day, value)?;
        }
        Ok(())
    }
}

/// Per-day forcing for a whole run.
///
/// All series have the same length (the run length in days) and every
/// value is finite and non-negative. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyForcing {
    precipitation: Vec<f64>,
    canopy_interception: Vec<f64>,
    transpiration_demand: Vec<f64>,
}

impl DailyForcing {
    /// Build forcing from precipitation and demand series of equal length.
    /// Canopy interception is zero on every day.
    pub fn new(
        precipitation: Vec<f64>,
        transpiration_demand: Vec<f64>,
    ) -> Result<Self, ConfigError> {
        if transpiration_demand.len() != precipitation.len() {
            return Err(ConfigError::LengthMismatch {
                series: "transpiration_demand",
                expected: precipitation.len(),
                actual: transpiration_demand.len(),
            });
        }
        check_series("precipitation", &precipitation)?;
        check_series("transpiration_demand", &transpiration_demand)?;
        let n = precipitation.len();
        Ok(Self {
            precipitation,
            canopy_interception: vec![0.0; n],
            transpiration_demand,
        })
    }

    /// Build forcing with the same transpiration demand on every day.
    pub fn with_constant_demand(precipitation: Vec<f64>, demand: f64) -> Result<Self, ConfigError> {
        let n = precipitation.len();
        Self::new(precipitation, vec![demand; n])
    }

    /// Replace the canopy interception series.
    pub fn with_canopy_interception(mut self, interception: Vec<f64>) -> Result<Self, ConfigError> {
        if interception.len() != self.precipitation.len() {
            return Err(ConfigError::LengthMismatch {
                series: "canopy_interception",
                expected: self.precipitation.len(),
                actual: interception.len(),
            });
        }
        check_series("canopy_interception", &interception)?;
        self.canopy_interception = interception;
        Ok(self)
    }

    /// Number of days covered.
    pub fn n_days(&self) -> usize {
        self.precipitation.len()
    }

    /// `true` if the forcing covers no days.
    pub fn is_empty(&self) -> bool {
        self.precipitation.is_empty()
    }

    /// Daily precipitation (mm).
    pub fn precipitation(&self) -> &[f64] {
        &self.precipitation
    }

    /// Daily canopy interception (mm).
    pub fn canopy_interception(&self) -> &[f64] {
        &self.canopy_interception
    }

    /// Daily transpiration demand (mm).
    pub fn transpiration_demand(&self) -> &[f64] {
        &self.transpiration_demand
    }

    /// Forcing for a single day, or `None` past the end of the series.
    pub fn day(&self, day: DayIndex) -> Option<DailyInput> {
        let i = day.0;
        Some(DailyInput {
            precipitation: *self.precipitation.get(i)?,
            canopy_interception: *self.canopy_interception.get(i)?,
            transpiration_demand: *self.transpiration_demand.get(i)?,
        })
    }

    /// Iterate the days in order.
    pub fn iter(&self) -> impl Iterator<Item = DailyInput> + '_ {
        self.precipitation
            .iter()
            .zip(&self.canopy_interception)
            .zip(&self.transpiration_demand)
            .map(|((&precipitation, &canopy_interception), &transpiration_demand)| DailyInput {
                precipitation,
                canopy_interception,
                transpiration_demand,
            })
    }

    /// Total precipitation over the run (mm).
    pub fn total_precipitation(&self) -> f64 {
        self.precipitation.iter().sum()
    }

    /// Total transpiration demand over the run (mm).
    pub fn total_demand(&self) -> f64 {
        self.transpiration_demand.iter().sum()
    }
}

fn check_value(series: &'static str, day: DayIndex, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidForcing { series, day, value })
    }
}

fn check_series(series: &'static str, values: &[f64]) -> Result<(), ConfigError> {
    values
        .iter()
        .enumerate()
        .try_for_each(|(i, &v)| check_value(series, DayIndex(i), v))
}
