//! Soil textures and individual soil layers.
//!
//! A [`Layer`] stores its capacity and residual floor as absolute depth
//! equivalents (mm). [`SoilTexture`] holds the volumetric thresholds a
//! layer is usually derived from.

use crate::error::ConfigError;
use crate::id::LayerIndex;

/// Largest excursion (mm) outside a layer's bounds that is treated as
/// floating-point drift and clamped rather than reported.
pub const DRIFT_TOLERANCE: f64 = 1e-9;

/// Volumetric water-content thresholds of a soil texture (mm³ mm⁻³).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoilTexture {
    /// Wilting point: water below this is present but not extractable by roots.
    pub wilting_point: f64,
    /// Field capacity: water held against gravity drainage.
    pub field_capacity: f64,
    /// Saturated water content: the most a layer can hold.
    pub saturation: f64,
}

impl SoilTexture {
    /// Coarse sand / loamy sand.
    pub const COARSE_SAND: SoilTexture = SoilTexture {
        wilting_point: 0.072,
        field_capacity: 0.301,
        saturation: 0.398,
    };

    /// Check that every threshold is a volumetric fraction and that
    /// `wilting_point <= field_capacity <= saturation`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (parameter, value) in [
            ("wilting_point", self.wilting_point),
            ("field_capacity", self.field_capacity),
            ("saturation", self.saturation),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidVolumetric { parameter, value });
            }
        }
        if self.wilting_point > self.field_capacity {
            return Err(ConfigError::InvalidTexture {
                reason: format!(
                    "wilting_point ({}) exceeds field_capacity ({})",
                    self.wilting_point, self.field_capacity
                ),
            });
        }
        if self.field_capacity > self.saturation {
            return Err(ConfigError::InvalidTexture {
                reason: format!(
                    "field_capacity ({}) exceeds saturation ({})",
                    self.field_capacity, self.saturation
                ),
            });
        }
        Ok(())
    }

    /// Plant-available water between wilting point and field capacity.
    pub fn plant_available(&self) -> f64 {
        self.field_capacity - self.wilting_point
    }
}

/// One vertical soil slab.
///
/// `capacity` and `residual_floor` are absolute depths in mm. A layer's
/// water content is kept in `[residual_floor, capacity]` by the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    /// Slab thickness (mm).
    pub thickness: f64,
    /// Maximum water the layer can hold (mm).
    pub capacity: f64,
    /// Water below this depth (mm) is not extractable by roots.
    pub residual_floor: f64,
    /// Fraction of the column's transpiring roots in this layer.
    pub root_fraction: f64,
}

impl Layer {
    /// Build a layer from volumetric saturation and residual thresholds.
    ///
    /// Capacity becomes `thickness × saturation` and the residual floor
    /// `thickness × residual`.
    pub fn from_volumetric(
        thickness: f64,
        saturation: f64,
        residual: f64,
        root_fraction: f64,
    ) -> Self {
        Self {
            thickness,
            capacity: thickness * saturation,
            residual_floor: thickness * residual,
            root_fraction,
        }
    }

    /// Build a layer whose thresholds come from a soil texture.
    pub fn from_texture(thickness: f64, texture: &SoilTexture, root_fraction: f64) -> Self {
        Self::from_volumetric(
            thickness,
            texture.saturation,
            texture.wilting_point,
            root_fraction,
        )
    }

    /// Validate this layer in isolation.
    pub fn validate(&self, index: LayerIndex) -> Result<(), ConfigError> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(ConfigError::InvalidThickness {
                layer: index,
                value: self.thickness,
            });
        }
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(ConfigError::InvalidCapacity {
                layer: index,
                value: self.capacity,
            });
        }
        if !self.residual_floor.is_finite()
            || self.residual_floor < 0.0
            || self.residual_floor > self.capacity
        {
            return Err(ConfigError::InvalidResidualFloor {
                layer: index,
                floor: self.residual_floor,
                capacity: self.capacity,
            });
        }
        if !self.root_fraction.is_finite() || self.root_fraction < 0.0 {
            return Err(ConfigError::InvalidRootFraction {
                layer: index,
                value: self.root_fraction,
            });
        }
        Ok(())
    }

    /// Water (mm) that roots could extract from a layer holding `water` mm.
    pub fn extractable(&self, water: f64) -> f64 {
        (water - self.residual_floor).max(0.0)
    }

    /// Space (mm) left before a layer holding `water` mm saturates.
    pub fn headroom(&self, water: f64) -> f64 {
        (self.capacity - water).max(0.0)
    }

    /// Clamp `water` into `[residual_floor, capacity]`.
    pub fn clamp(&self, water: f64) -> f64 {
        water.clamp(self.residual_floor, self.capacity)
    }

    /// Convert an absolute depth (mm) held by this layer to volumetric content.
    pub fn to_volumetric(&self, water: f64) -> f64 {
        water / self.thickness
    }
}
