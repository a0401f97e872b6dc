//! Test fixtures for Loam development.
//!
//! Canonical columns and forcing series shared by the engine's unit,
//! integration and property tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;
