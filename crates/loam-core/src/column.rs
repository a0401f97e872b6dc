//! The ordered soil column and layer-geometry helpers.
//!
//! A [`SoilColumn`] is validated once at construction and is immutable
//! afterwards; the engine owns the mutable water state separately.

use crate::error::ConfigError;
use crate::id::LayerIndex;
use crate::layer::{Layer, SoilTexture};

/// Accepted deviation of `sum(root_fraction)` from one.
pub const ROOT_FRACTION_TOLERANCE: f64 = 1e-6;

/// The six CABLE land-surface model layer thicknesses (m), 4.6 m in total.
pub const CABLE_LAYER_THICKNESSES_M: [f64; 6] = [0.022, 0.058, 0.154, 0.409, 1.085, 2.872];

/// Rescale the CABLE layer proportions to span `total_depth`.
///
/// The result is in whatever unit `total_depth` is given in. A 2 m
/// column gives roughly `[0.01, 0.025, 0.067, 0.178, 0.472, 1.248]` m.
pub fn cable_layering(total_depth: f64) -> Vec<f64> {
    let cable_total: f64 = CABLE_LAYER_THICKNESSES_M.iter().sum();
    CABLE_LAYER_THICKNESSES_M
        .iter()
        .map(|&zse| total_depth * zse / cable_total)
        .collect()
}

/// Convert layer bottom depths (surface = 0) into layer thicknesses.
///
/// Bottoms must increase strictly with layer index; a repeated or
/// shallower bottom means the layers are out of order.
pub fn thicknesses_from_depths(bottom_depths: &[f64]) -> Result<Vec<f64>, ConfigError> {
    let mut previous = 0.0;
    let mut thicknesses = Vec::with_capacity(bottom_depths.len());
    for (i, &depth) in bottom_depths.iter().enumerate() {
        if !depth.is_finite() || depth <= previous {
            return Err(ConfigError::NonMonotonicDepth {
                layer: LayerIndex(i),
                depth,
                previous,
            });
        }
        thicknesses.push(depth - previous);
        previous = depth;
    }
    Ok(thicknesses)
}

/// An ordered, validated sequence of layers from the surface (index 0)
/// to the deepest layer.
///
/// # Invariants
///
/// - at least one layer;
/// - every layer passes [`Layer::validate`];
/// - root fractions sum to one up to floating-point rounding; inputs
///   are accepted within [`ROOT_FRACTION_TOLERANCE`] and rescaled.
#[derive(Clone, Debug, PartialEq)]
pub struct SoilColumn {
    layers: Vec<Layer>,
}

impl SoilColumn {
    /// Validate `layers` and build a column from them.
    ///
    /// Root fractions within [`ROOT_FRACTION_TOLERANCE`] of summing to one
    /// are rescaled to sum to one, so the full daily demand is always
    /// either extracted or reported as unmet.
    pub fn new(mut layers: Vec<Layer>) -> Result<Self, ConfigError> {
        if layers.is_empty() {
            return Err(ConfigError::EmptyColumn);
        }
        for (i, layer) in layers.iter().enumerate() {
            layer.validate(LayerIndex(i))?;
        }
        let sum: f64 = layers.iter().map(|l| l.root_fraction).sum();
        if (sum - 1.0).abs() > ROOT_FRACTION_TOLERANCE {
            return Err(ConfigError::RootFractionSum {
                sum,
                tolerance: ROOT_FRACTION_TOLERANCE,
            });
        }
        for layer in &mut layers {
            layer.root_fraction /= sum;
        }
        Ok(Self { layers })
    }

    /// Build a column from parallel per-layer arrays.
    ///
    /// Thicknesses and capacities are in mm; `residual_floor` is a
    /// volumetric fraction applied to every layer as `floor = residual_floor × thickness`.
    pub fn from_parts(
        thicknesses: &[f64],
        capacities: &[f64],
        root_fractions: &[f64],
        residual_floor: f64,
    ) -> Result<Self, ConfigError> {
        let n = thicknesses.len();
        check_len("layer_capacities", n, capacities.len())?;
        check_len("root_fractions", n, root_fractions.len())?;
        if !(0.0..=1.0).contains(&residual_floor) {
            return Err(ConfigError::InvalidVolumetric {
                parameter: "residual_floor",
                value: residual_floor,
            });
        }
        let layers = thicknesses
            .iter()
            .zip(capacities)
            .zip(root_fractions)
            .map(|((&thickness, &capacity), &root_fraction)| Layer {
                thickness,
                capacity,
                residual_floor: residual_floor * thickness,
                root_fraction,
            })
            .collect();
        Self::new(layers)
    }

    /// Build a column of uniform texture: capacity from saturation and
    /// residual floor from the wilting point.
    pub fn from_texture(
        thicknesses: &[f64],
        texture: &SoilTexture,
        root_fractions: &[f64],
    ) -> Result<Self, ConfigError> {
        texture.validate()?;
        check_len("root_fractions", thicknesses.len(), root_fractions.len())?;
        let layers = thicknesses
            .iter()
            .zip(root_fractions)
            .map(|(&thickness, &root_fraction)| {
                Layer::from_texture(thickness, texture, root_fraction)
            })
            .collect();
        Self::new(layers)
    }

    /// The layers, surface first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of layers (always at least one).
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`; a column cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer thicknesses (mm), surface first.
    pub fn thicknesses(&self) -> Vec<f64> {
        self.layers.iter().map(|l| l.thickness).collect()
    }

    /// Bottom depth (mm) of every layer, surface first.
    pub fn bottom_depths(&self) -> Vec<f64> {
        self.layers
            .iter()
            .scan(0.0, |depth, layer| {
                *depth += layer.thickness;
                Some(*depth)
            })
            .collect()
    }

    /// Total column depth (mm).
    pub fn total_depth(&self) -> f64 {
        self.layers.iter().map(|l| l.thickness).sum()
    }

    /// Total water the column can hold (mm).
    pub fn total_capacity(&self) -> f64 {
        self.layers.iter().map(|l| l.capacity).sum()
    }

    /// Total non-extractable water (mm).
    pub fn total_residual(&self) -> f64 {
        self.layers.iter().map(|l| l.residual_floor).sum()
    }
}

fn check_len(series: &'static str, expected: usize, actual: usize) -> Result<(), ConfigError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ConfigError::LengthMismatch {
            series,
            expected,
            actual,
        })
    }
}
