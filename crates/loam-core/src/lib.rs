//! Core types for the Loam soil water balance workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other Loam crate: layer and day
//! indices, length units, soil textures, the [`Layer`] and [`SoilColumn`]
//! types, and the single [`ConfigError`] type through which all input
//! validation is reported.
//!
//! All water quantities held by these types are absolute depth
//! equivalents in millimetres. Volumetric values (mm³ mm⁻³) only appear
//! at construction and reporting boundaries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod column;
pub mod error;
pub mod id;
pub mod layer;
pub mod units;

pub use column::{
    cable_layering, thicknesses_from_depths, SoilColumn, CABLE_LAYER_THICKNESSES_M,
    ROOT_FRACTION_TOLERANCE,
};
pub use error::ConfigError;
pub use id::{DayIndex, LayerIndex};
pub use layer::{Layer, SoilTexture, DRIFT_TOLERANCE};
pub use units::LengthUnit;
