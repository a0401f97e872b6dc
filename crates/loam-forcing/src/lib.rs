//! Daily forcing for Loam soil water balance runs.
//!
//! - [`DailyForcing`]: validated, immutable per-day precipitation,
//!   canopy interception and transpiration demand series.
//! - [`BetaRainfall`]: seeded generator of intermittent daily rainfall
//!   drawn from a scaled Beta distribution.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod forcing;
pub mod rainfall;

pub use forcing::{DailyForcing, DailyInput};
pub use rainfall::{BetaRainfall, BetaRainfallBuilder};
