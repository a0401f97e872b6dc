//! Root distribution model for Loam soil columns.
//!
//! Converts layer thicknesses into the fraction of transpiring root mass
//! held by each layer, using the cumulative exponential profile of
//! Jackson et al. (1996), *Oecologia* 108:389–411:
//!
//! ```text
//! F(D) = min(1, 1 − β^D)        D in centimetres
//! ```
//!
//! A layer's fraction is the difference of `F` between its bottom and
//! the bottom of the layer above. Roots below the modelled column are
//! reported separately rather than folded into the deepest layer.
//!
//! The model is pure: no state, no allocation beyond the returned vector.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod jackson;

pub use jackson::{
    compute_root_fractions, cumulative_root_fraction, RootDistribution,
    RootDistributionBuilder, DEFAULT_ROOT_BETA,
};
