//! Layered soil water balance engine.
//!
//! Advances per-layer water content one day at a time: throughfall
//! infiltrates from the surface and cascades downward as layers fill,
//! then roots extract transpiration demand in proportion to their root
//! fraction, passing any shortfall to deeper layers. Drainage past the
//! deepest layer and demand no layer could supply are recorded daily.
//!
//! - [`WaterBalanceEngine`]: the stepped simulator.
//! - [`BalanceRun`]: recorded time series, summaries, conservation
//!   checks and fingerprints.
//! - [`BatchedRuns`]: independent engines driven together.
//! - [`run_water_balance`]: one call over plain arrays.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod api;
pub mod batched;
pub mod config;
pub mod conservation;
pub mod digest;
pub mod engine;
pub mod metrics;
pub mod policy;
pub mod series;

pub use api::run_water_balance;
pub use batched::{BatchError, BatchedRuns};
pub use config::{BalanceConfig, InitialState};
pub use conservation::{BalanceAnomaly, ConservationResult, Imbalance};
pub use digest::series_hash;
pub use engine::WaterBalanceEngine;
pub use metrics::RunSummary;
pub use policy::{DayOutcome, ExtractionPolicy};
pub use series::{BalanceRun, WaterContentSeries};
