//! Batches of independent water balance runs.
//!
//! [`BatchedRuns`] owns N [`WaterBalanceEngine`]s, typically sharing a
//! forcing series but differing in column, root profile or policy (for
//! example a sweep over the root extinction coefficient). Engines share
//! no state, so [`run_parallel()`](BatchedRuns::run_parallel) gives each
//! one its own scoped thread and returns results identical to
//! [`run()`](BatchedRuns::run).

use loam_core::ConfigError;
use loam_forcing::DailyForcing;

use crate::config::BalanceConfig;
use crate::engine::WaterBalanceEngine;
use crate::series::BalanceRun;

// ── Error type ──────────────────────────────────────────────────

/// Error from a batched operation.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BatchError {
    /// A run's configuration failed validation.
    #[error("run {run_index}: {error}")]
    Config {
        /// Index of the failing run (0-based).
        run_index: usize,
        /// The underlying error.
        #[source]
        error: ConfigError,
    },
    /// The number of forcing series does not match the number of runs.
    #[error("expected {expected} forcing series, got {actual}")]
    ForcingCount {
        /// Number of runs in the batch.
        expected: usize,
        /// Number of forcing series supplied.
        actual: usize,
    },
}

// ── BatchedRuns ─────────────────────────────────────────────────

/// A set of independent engines driven together.
#[derive(Debug)]
pub struct BatchedRuns {
    engines: Vec<WaterBalanceEngine>,
}

impl BatchedRuns {
    /// Build one engine per config.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Config`] naming the first config that fails.
    pub fn new(configs: Vec<BalanceConfig>) -> Result<Self, BatchError> {
        let engines = configs
            .into_iter()
            .enumerate()
            .map(|(run_index, config)| {
                WaterBalanceEngine::new(config)
                    .map_err(|error| BatchError::Config { run_index, error })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { engines })
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// `true` if the batch holds no runs.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// The engines, in config order.
    pub fn engines(&self) -> &[WaterBalanceEngine] {
        &self.engines
    }

    /// Drive every engine through `forcing`, one after another.
    pub fn run(&mut self, forcing: &DailyForcing) -> Vec<BalanceRun> {
        self.engines.iter_mut().map(|e| e.run(forcing)).collect()
    }

    /// Drive engine `i` through `forcings[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::ForcingCount`] if `forcings.len()` differs
    /// from the number of runs. No engine is advanced in that case.
    pub fn run_each(&mut self, forcings: &[DailyForcing]) -> Result<Vec<BalanceRun>, BatchError> {
        if forcings.len() != self.engines.len() {
            return Err(BatchError::ForcingCount {
                expected: self.engines.len(),
                actual: forcings.len(),
            });
        }
        Ok(self
            .engines
            .iter_mut()
            .zip(forcings)
            .map(|(e, f)| e.run(f))
            .collect())
    }

    /// Drive every engine through `forcing`, one scoped thread per engine.
    ///
    /// Results are in config order and bit-identical to [`run()`](Self::run).
    pub fn run_parallel(&mut self, forcing: &DailyForcing) -> Vec<BalanceRun> {
        tracing::debug!(
            runs = self.engines.len(),
            days = forcing.n_days(),
            "parallel batch started"
        );
        std::thread::scope(|scope| {
            let handles: Vec<_> = self
                .engines
                .iter_mut()
                .map(|engine| scope.spawn(move || engine.run(forcing)))
                .collect();
            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(run) => run,
                    Err(payload) => std::panic::resume_unwind(payload),
                })
                .collect()
        })
    }

    /// Reset every engine to its initial state.
    pub fn reset(&mut self) {
        for engine in &mut self.engines {
            engine.reset();
        }
    }
}
