//! Engine configuration and initial-state resolution.
//!
//! [`BalanceConfig`] is the builder-input for
//! [`WaterBalanceEngine`](crate::WaterBalanceEngine). Call
//! [`validate()`](BalanceConfig::validate) to check the initial state
//! against the column without constructing an engine.

use loam_core::{ConfigError, Layer, LayerIndex, SoilColumn, DRIFT_TOLERANCE};

use crate::policy::ExtractionPolicy;

// ── InitialState ────────────────────────────────────────────────

/// Water content at the start of a run.
#[derive(Clone, Debug, PartialEq)]
pub enum InitialState {
    /// Every layer at this fraction of its capacity, in `[0, 1]`.
    ///
    /// The fraction must put every layer at or above its residual floor.
    SaturationFraction(f64),
    /// Every layer at its residual floor (a fully dried column).
    ResidualFloor,
    /// Explicit per-layer water depths (mm), surface first.
    Depths(Vec<f64>),
}

impl Default for InitialState {
    /// A saturated column.
    fn default() -> Self {
        Self::SaturationFraction(1.0)
    }
}

// ── BalanceConfig ───────────────────────────────────────────────

/// Complete configuration for a [`WaterBalanceEngine`](crate::WaterBalanceEngine).
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceConfig {
    /// The validated soil column.
    pub column: SoilColumn,
    /// How per-layer shortfalls against demand are handled.
    pub policy: ExtractionPolicy,
    /// Water content on day 0.
    pub initial: InitialState,
}

impl BalanceConfig {
    /// Configuration with the cascading-deficit policy and a saturated
    /// starting column.
    pub fn new(column: SoilColumn) -> Self {
        Self {
            column,
            policy: ExtractionPolicy::default(),
            initial: InitialState::default(),
        }
    }

    /// Replace the extraction policy.
    pub fn with_policy(mut self, policy: ExtractionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the initial state.
    pub fn with_initial(mut self, initial: InitialState) -> Self {
        self.initial = initial;
        self
    }

    /// Check the initial state against the column.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_water().map(|_| ())
    }

    /// Resolve the initial state to per-layer water depths (mm).
    ///
    /// Values outside a layer's `[residual_floor, capacity]` by no more
    /// than [`DRIFT_TOLERANCE`] are clamped; anything further out is an
    /// error.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidInitialSaturation`] if a saturation
    ///   fraction is outside `[0, 1]`;
    /// - [`ConfigError::LengthMismatch`] if explicit depths do not match
    ///   the number of layers;
    /// - [`ConfigError::InitialOutOfBounds`] if any layer starts outside
    ///   its bounds.
    pub fn initial_water(&self) -> Result<Vec<f64>, ConfigError> {
        let layers = self.column.layers();
        match &self.initial {
            InitialState::SaturationFraction(fraction) => {
                let fraction = *fraction;
                if !(0.0..=1.0).contains(&fraction) {
                    return Err(ConfigError::InvalidInitialSaturation { value: fraction });
                }
                layers
                    .iter()
                    .enumerate()
                    .map(|(i, layer)| bounded(layer, LayerIndex(i), fraction * layer.capacity))
                    .collect()
            }
            InitialState::ResidualFloor => Ok(layers.iter().map(|l| l.residual_floor).collect()),
            InitialState::Depths(depths) => {
                if depths.len() != layers.len() {
                    return Err(ConfigError::LengthMismatch {
                        series: "initial_water",
                        expected: layers.len(),
                        actual: depths.len(),
                    });
                }
                layers
                    .iter()
                    .zip(depths)
                    .enumerate()
                    .map(|(i, (layer, &water))| bounded(layer, LayerIndex(i), water))
                    .collect()
            }
        }
    }
}

fn bounded(layer: &Layer, index: LayerIndex, water: f64) -> Result<f64, ConfigError> {
    let in_bounds = water.is_finite()
        && water >= layer.residual_floor - DRIFT_TOLERANCE
        && water <= layer.capacity + DRIFT_TOLERANCE;
    if in_bounds {
        Ok(layer.clamp(water))
    } else {
        Err(ConfigError::InitialOutOfBounds {
            layer: index,
            water,
            floor: layer.residual_floor,
            capacity: layer.capacity,
        })
    }
}
