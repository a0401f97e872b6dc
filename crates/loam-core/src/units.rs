//! Length units accepted at the configuration boundary.
//!
//! The engine works in millimetres throughout; the root model evaluates
//! its exponent in centimetres. Everything else is converted on entry.

/// A unit of length for layer thicknesses and depths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    /// Millimetres (the engine's canonical unit).
    #[default]
    Millimetres,
    /// Centimetres (the root-model exponent unit).
    Centimetres,
    /// Metres.
    Metres,
}

impl LengthUnit {
    /// Number of millimetres in one unit.
    pub const fn millimetres_per_unit(self) -> f64 {
        match self {
            Self::Millimetres => 1.0,
            Self::Centimetres => 10.0,
            Self::Metres => 1000.0,
        }
    }

    /// Convert `value` expressed in `self` into `target` units.
    pub fn convert(self, value: f64, target: LengthUnit) -> f64 {
        if self == target {
            return value;
        }
        value * self.millimetres_per_unit() / target.millimetres_per_unit()
    }

    /// Convert `value` expressed in `self` into millimetres.
    pub fn to_millimetres(self, value: f64) -> f64 {
        self.convert(value, Self::Millimetres)
    }

    /// Convert `value` expressed in `self` into centimetres.
    pub fn to_centimetres(self, value: f64) -> f64 {
        self.convert(value, Self::Centimetres)
    }
}
