//! Loam: a single-column, multi-layer soil water balance.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Loam sub-crates. For most users, adding `loam` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! // Six layers over 2 m of coarse sand, roots from the Jackson model.
//! let thicknesses = cable_layering(2000.0);
//! let roots = RootDistribution::builder()
//!     .thicknesses(&thicknesses, LengthUnit::Millimetres)
//!     .beta(0.9)
//!     .build()
//!     .unwrap()
//!     .renormalized();
//! let column =
//!     SoilColumn::from_texture(&thicknesses, &SoilTexture::COARSE_SAND, roots.fractions())
//!         .unwrap();
//!
//! // A year of seeded intermittent rain against 3 mm/day demand.
//! let forcing = BetaRainfall::builder().seed(0).build().unwrap().forcing(365, 3.0).unwrap();
//!
//! let mut engine = WaterBalanceEngine::new(BalanceConfig::new(column)).unwrap();
//! let run = engine.run(&forcing);
//! assert_eq!(run.n_days(), 365);
//! assert!(run.verify_conservation(1e-9).is_balanced());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `loam-core` | Layers, columns, units, indices, `ConfigError` |
//! | [`roots`] | `loam-roots` | Jackson (1996) root distribution |
//! | [`forcing`] | `loam-forcing` | Daily forcing series and Beta rainfall |
//! | [`engine`] | `loam-engine` | Water balance engine, results, batching |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and validation (`loam-core`).
pub use loam_core as types;

/// Root distribution model (`loam-roots`).
///
/// [`roots::compute_root_fractions`] for plain arrays,
/// [`roots::RootDistribution`] for a builder with unit handling.
pub use loam_roots as roots;

/// Daily forcing (`loam-forcing`).
pub use loam_forcing as forcing;

/// Water balance engine (`loam-engine`).
///
/// [`engine::WaterBalanceEngine`] for stepped runs,
/// [`engine::run_water_balance`] for one call over plain arrays.
pub use loam_engine as engine;

/// Common imports for typical Loam usage.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use loam_core::{
        cable_layering, ConfigError, DayIndex, Layer, LayerIndex, LengthUnit, SoilColumn,
        SoilTexture,
    };

    // Roots
    pub use loam_roots::{compute_root_fractions, RootDistribution};

    // Forcing
    pub use loam_forcing::{BetaRainfall, DailyForcing, DailyInput};

    // Engine
    pub use loam_engine::{
        run_water_balance, BalanceConfig, BalanceRun, DayOutcome, ExtractionPolicy, InitialState,
        RunSummary, WaterBalanceEngine,
    };
}
