//! Strongly-typed indices for layers and simulated days.

use std::fmt;

/// Position of a layer within a soil column.
///
/// `LayerIndex(0)` is the surface layer; indices increase with depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerIndex(pub usize);

impl fmt::Display for LayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for LayerIndex {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Zero-based day counter within one simulation run.
///
/// Day `n` is the n-th entry of the forcing series and the n-th row of
/// the result time series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DayIndex(pub usize);

impl DayIndex {
    /// The day after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for DayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for DayIndex {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
