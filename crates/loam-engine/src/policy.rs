//! Extraction policies and the single-day pass over the column.
//!
//! Each day is one surface-to-depth sweep. For every layer, in order:
//!
//! 1. **Infiltration**: the water still moving down (the day's
//!    throughfall at the surface, drainage from above otherwise) fills the
//!    layer up to capacity; any excess drains to the next layer.
//! 2. **Extraction**: the layer is asked for
//!    `root_fraction × demand + deficit carried from shallower layers` and
//!    gives what it can above its residual floor, using its water content
//!    *after* infiltration.
//!
//! Drainage past the deepest layer leaves the column. Deficit left after
//! the deepest layer is the day's unmet demand.

use loam_core::{DayIndex, Layer};
use loam_forcing::DailyInput;

/// How a layer's shortfall against its share of demand is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExtractionPolicy {
    /// A layer that cannot meet its demand passes the shortfall down, and
    /// the next layer is asked for its own share plus that deficit.
    #[default]
    CascadingDeficit,
    /// Each layer is only ever asked for its own share. Shortfalls go
    /// straight to the day's unmet demand.
    IndependentPerLayer,
}

/// Fluxes and bookkeeping for one simulated day, all in mm.
///
/// For every day, up to floating-point rounding:
///
/// ```text
/// storage_change = throughfall − transpired − drainage_lost + clamped
/// demand         = transpired + unmet_demand
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DayOutcome {
    /// The day these fluxes belong to.
    pub day: DayIndex,
    /// Water that reached the soil surface.
    pub throughfall: f64,
    /// Transpiration demand imposed on the column.
    pub demand: f64,
    /// Water actually extracted by roots across all layers.
    pub transpired: f64,
    /// Demand no layer could supply (water stress).
    pub unmet_demand: f64,
    /// Drainage out of the bottom of the column.
    pub drainage_lost: f64,
    /// Change in total column storage.
    pub storage_change: f64,
    /// Net water added (positive) or removed (negative) by clamping
    /// floating-point drift back into layer bounds.
    pub clamped: f64,
}

impl DayOutcome {
    /// `true` if some transpiration demand went unmet.
    pub fn is_stressed(&self) -> bool {
        self.unmet_demand > 0.0
    }
}

/// Advance `water` (mm per layer) through one day of forcing.
///
/// `layers` and `water` must have the same length; the engine guarantees
/// this by construction.
pub(crate) fn advance_day(
    layers: &[Layer],
    water: &mut [f64],
    input: &DailyInput,
    policy: ExtractionPolicy,
    day: DayIndex,
) -> DayOutcome {
    debug_assert_eq!(layers.len(), water.len());

    let throughfall = input.throughfall();
    let demand = input.transpiration_demand;
    let before: f64 = water.iter().sum();

    let mut infiltrating = throughfall;
    let mut deficit = 0.0;
    let mut unmet_demand = 0.0;
    let mut transpired = 0.0;
    let mut clamped = 0.0;

    for (layer, w) in layers.iter().zip(water.iter_mut()) {
        let room = layer.headroom(*w);
        if infiltrating > room {
            *w = layer.capacity;
            infiltrating -= room;
        } else {
            *w += infiltrating;
            infiltrating = 0.0;
        }

        let layer_demand = layer.root_fraction * demand + deficit;
        let taken = layer_demand.min(layer.extractable(*w));
        *w -= taken;
        transpired += taken;

        let shortfall = layer_demand - taken;
        match policy {
            ExtractionPolicy::CascadingDeficit => deficit = shortfall,
            ExtractionPolicy::IndependentPerLayer => unmet_demand += shortfall,
        }

        let bounded = layer.clamp(*w);
        clamped += bounded - *w;
        *w = bounded;
    }
    unmet_demand += deficit;

    let after: f64 = water.iter().sum();
    DayOutcome {
        day,
        throughfall,
        demand,
        transpired,
        unmet_demand,
        drainage_lost: infiltrating,
        storage_change: after - before,
        clamped,
    }
}
