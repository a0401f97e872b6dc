//! Configuration errors for Loam simulations.
//!
//! Every detectable failure in a Loam run is an input-validation failure
//! caught before the first simulated day. Unmet transpiration demand is
//! a simulation outcome, not an error, and never appears here.

use crate::id::{DayIndex, LayerIndex};

/// Errors detected while validating soil geometry, root parameters,
/// initial state, or forcing series.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The soil column has no layers.
    #[error("soil column has no layers")]
    EmptyColumn,

    /// A layer thickness is negative, zero where zero is not allowed, or non-finite.
    #[error("layer {layer}: thickness must be finite and positive, got {value}")]
    InvalidThickness {
        /// The offending layer.
        layer: LayerIndex,
        /// The rejected thickness.
        value: f64,
    },

    /// Layer bottom depths do not increase strictly with layer index.
    #[error("layer {layer}: bottom depth {depth} is not below the previous bottom {previous}")]
    NonMonotonicDepth {
        /// The offending layer.
        layer: LayerIndex,
        /// Bottom depth of the offending layer.
        depth: f64,
        /// Bottom depth of the layer above it.
        previous: f64,
    },

    /// A layer capacity is negative or non-finite.
    #[error("layer {layer}: capacity must be finite and >= 0, got {value}")]
    InvalidCapacity {
        /// The offending layer.
        layer: LayerIndex,
        /// The rejected capacity.
        value: f64,
    },

    /// A volumetric water content parameter lies outside `[0, 1]`.
    #[error("{parameter} must be a volumetric fraction in [0, 1], got {value}")]
    InvalidVolumetric {
        /// Which parameter was rejected.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Texture thresholds are out of order (wilting point, field capacity, saturation).
    #[error("soil texture thresholds out of order: {reason}")]
    InvalidTexture {
        /// Description of the violated ordering.
        reason: String,
    },

    /// A layer's residual floor is negative, non-finite, or exceeds its capacity.
    #[error("layer {layer}: residual floor {floor} must lie in [0, capacity {capacity}]")]
    InvalidResidualFloor {
        /// The offending layer.
        layer: LayerIndex,
        /// The rejected floor (mm).
        floor: f64,
        /// The layer capacity (mm).
        capacity: f64,
    },

    /// A root fraction is negative or non-finite.
    #[error("layer {layer}: root fraction must be finite and >= 0, got {value}")]
    InvalidRootFraction {
        /// The offending layer.
        layer: LayerIndex,
        /// The rejected fraction.
        value: f64,
    },

    /// Root fractions do not sum to one.
    #[error("root fractions sum to {sum}, expected 1 within {tolerance}")]
    RootFractionSum {
        /// The actual sum.
        sum: f64,
        /// The accepted deviation from one.
        tolerance: f64,
    },

    /// The root extinction coefficient lies outside the open interval `(0, 1)`.
    #[error("root extinction coefficient must lie strictly between 0 and 1, got {value}")]
    InvalidRootBeta {
        /// The rejected coefficient.
        value: f64,
    },

    /// The initial saturation fraction lies outside `[0, 1]`.
    #[error("initial saturation fraction must be in [0, 1], got {value}")]
    InvalidInitialSaturation {
        /// The rejected fraction.
        value: f64,
    },

    /// An initial layer water content lies outside `[residual floor, capacity]`.
    #[error("layer {layer}: initial water {water} mm outside [{floor}, {capacity}] mm")]
    InitialOutOfBounds {
        /// The offending layer.
        layer: LayerIndex,
        /// The requested initial water (mm).
        water: f64,
        /// The layer residual floor (mm).
        floor: f64,
        /// The layer capacity (mm).
        capacity: f64,
    },

    /// Two series that must line up have different lengths.
    #[error("{series} has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Name of the mismatched series.
        series: &'static str,
        /// The required length.
        expected: usize,
        /// The supplied length.
        actual: usize,
    },

    /// A forcing value is negative or non-finite.
    #[error("{series}[{day}] must be finite and >= 0, got {value}")]
    InvalidForcing {
        /// Name of the forcing series.
        series: &'static str,
        /// The offending day.
        day: DayIndex,
        /// The rejected value.
        value: f64,
    },

    /// Rainfall generator parameters are invalid.
    #[error("invalid rainfall generator: {reason}")]
    InvalidRainfall {
        /// Description of the invalid parameter.
        reason: String,
    },
}
