//! Jackson et al. (1996) cumulative root fraction profile.
//!
//! Constructed directly via [`compute_root_fractions`] when thicknesses
//! are already in centimetres, or via [`RootDistribution::builder`] for
//! other units and for the below-column residual.

use loam_core::{ConfigError, LayerIndex, LengthUnit};

/// Root extinction coefficient used by the reference runs.
///
/// Typical values lie in `[0.7, 1.0)`; values closer to one push roots deeper.
pub const DEFAULT_ROOT_BETA: f64 = 0.9;

/// Cumulative fraction of roots above `depth_cm`.
///
/// `F(D) = min(1, 1 − β^D)`. The caller is responsible for `β ∈ (0, 1)`.
pub fn cumulative_root_fraction(depth_cm: f64, beta: f64) -> f64 {
    (1.0 - beta.powf(depth_cm)).min(1.0)
}

/// Per-layer root fractions for thicknesses given in centimetres.
///
/// Walks the layers surface-to-depth, accumulating depth `D` and taking
/// `F(D_i) − F(D_{i−1})` as each layer's share. The fractions telescope
/// to `F(D_last) ≤ 1`; the remainder belongs to roots below the column.
///
/// # Errors
///
/// - [`ConfigError::InvalidRootBeta`] if `beta` is not strictly inside `(0, 1)`.
/// - [`ConfigError::InvalidThickness`] if a thickness is negative or non-finite.
///   A zero thickness is accepted and yields a zero fraction.
pub fn compute_root_fractions(thicknesses_cm: &[f64], beta: f64) -> Result<Vec<f64>, ConfigError> {
    validate_beta(beta)?;
    let mut depth = 0.0;
    let mut above = 0.0;
    let mut fractions = Vec::with_capacity(thicknesses_cm.len());
    for (i, &thickness) in thicknesses_cm.iter().enumerate() {
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(ConfigError::InvalidThickness {
                layer: LayerIndex(i),
                value: thickness,
            });
        }
        depth += thickness;
        let cumulative = cumulative_root_fraction(depth, beta);
        fractions.push((cumulative - above).max(0.0));
        above = cumulative;
    }
    Ok(fractions)
}

fn validate_beta(beta: f64) -> Result<(), ConfigError> {
    if beta > 0.0 && beta < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRootBeta { value: beta })
    }
}

/// Root fractions for a column, plus the share of roots below it.
///
/// `fractions().iter().sum() + below_column() == 1` within floating-point
/// tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct RootDistribution {
    fractions: Vec<f64>,
    below_column: f64,
    beta: f64,
}

/// Builder for [`RootDistribution`].
///
/// Required: thicknesses. The coefficient defaults to [`DEFAULT_ROOT_BETA`]
/// and the thickness unit to millimetres.
#[derive(Clone, Debug)]
pub struct RootDistributionBuilder {
    thicknesses: Vec<f64>,
    unit: LengthUnit,
    beta: f64,
}

impl RootDistribution {
    /// Create a new builder.
    pub fn builder() -> RootDistributionBuilder {
        RootDistributionBuilder {
            thicknesses: Vec::new(),
            unit: LengthUnit::Millimetres,
            beta: DEFAULT_ROOT_BETA,
        }
    }

    /// Per-layer fractions, surface first.
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Share of roots below the deepest modelled layer.
    pub fn below_column(&self) -> f64 {
        self.below_column
    }

    /// Sum of the per-layer fractions.
    pub fn total(&self) -> f64 {
        self.fractions.iter().sum()
    }

    /// The root extinction coefficient this distribution was built with.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Rescale the per-layer fractions to sum to exactly one, assigning
    /// the below-column roots proportionally to the modelled layers.
    ///
    /// A distribution with no roots in the column (every layer zero
    /// thickness) is returned unchanged.
    pub fn renormalized(mut self) -> Self {
        let total = self.total();
        if total > 0.0 {
            for f in &mut self.fractions {
                *f /= total;
            }
            self.below_column = 0.0;
        }
        self
    }
}

impl RootDistributionBuilder {
    /// Set the layer thicknesses, surface first, in the given unit.
    pub fn thicknesses(mut self, thicknesses: &[f64], unit: LengthUnit) -> Self {
        self.thicknesses = thicknesses.to_vec();
        self.unit = unit;
        self
    }

    /// Set the root extinction coefficient β (default 0.9).
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Build the distribution.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - no thicknesses were supplied ([`ConfigError::EmptyColumn`])
    /// - `beta` is outside `(0, 1)`
    /// - any thickness is negative or non-finite
    pub fn build(self) -> Result<RootDistribution, ConfigError> {
        if self.thicknesses.is_empty() {
            return Err(ConfigError::EmptyColumn);
        }
        let unit = self.unit;
        let thicknesses_cm: Vec<f64> = self
            .thicknesses
            .iter()
            .map(|&t| unit.to_centimetres(t))
            .collect();
        let fractions = compute_root_fractions(&thicknesses_cm, self.beta)?;
        let total: f64 = fractions.iter().sum();
        let below_column = (1.0 - total).max(0.0);
        if below_column > 1e-3 {
            tracing::debug!(
                below_column,
                beta = self.beta,
                "root profile extends below the modelled column"
            );
        }
        Ok(RootDistribution {
            fractions,
            below_column,
            beta: self.beta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Layer thicknesses of the reference 2 m column, in metres.
    const REFERENCE_M: [f64; 6] = [0.01, 0.025, 0.067, 0.178, 0.472, 1.248];

    #[test]
    fn single_layer_equals_cumulative() {
        let f = compute_root_fractions(&[30.0], 0.9).unwrap();
        assert_eq!(f.len(), 1);
        assert_relative_eq!(f[0], 1.0 - 0.9f64.powf(30.0));
    }

    #[test]
    fn two_layers_telescope() {
        let f = compute_root_fractions(&[10.0, 20.0], 0.9).unwrap();
        let f10 = 1.0 - 0.9f64.powf(10.0);
        let f30 = 1.0 - 0.9f64.powf(30.0);
        assert_relative_eq!(f[0], f10, epsilon = 1e-15);
        assert_relative_eq!(f[1], f30 - f10, epsilon = 1e-15);
        assert_relative_eq!(f.iter().sum::<f64>(), f30, epsilon = 1e-15);
    }

    #[test]
    fn zero_thickness_layer_gets_no_roots() {
        let f = compute_root_fractions(&[5.0, 0.0, 5.0], 0.8).unwrap();
        assert_eq!(f[1], 0.0);
        assert!(f[0] > 0.0 && f[2] > 0.0);
    }

    #[test]
    fn beta_outside_open_interval_rejected() {
        for beta in [0.0, 1.0, -0.3, 1.2, f64::NAN] {
            let err = compute_root_fractions(&[10.0], beta).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidRootBeta { .. }), "beta {beta}");
        }
    }

    #[test]
    fn negative_thickness_rejected() {
        let err = compute_root_fractions(&[10.0, -1.0], 0.9).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidThickness {
                layer: LayerIndex(1),
                value: -1.0
            }
        );
    }

    #[test]
    fn reference_column_in_metres() {
        let dist = RootDistribution::builder()
            .thicknesses(&REFERENCE_M, LengthUnit::Metres)
            .beta(0.9)
            .build()
            .unwrap();
        let f = dist.fractions();
        assert_eq!(f.len(), 6);
        // 1 cm surface layer: 1 - 0.9^1
        assert_relative_eq!(f[0], 0.1, epsilon = 1e-12);
        // 200 cm column holds all but 0.9^200 of the roots.
        assert_relative_eq!(dist.total(), 1.0, epsilon = 1e-8);
        assert!(dist.below_column() < 1e-8);
        // The 6.7 cm layer holds the largest share for β = 0.9.
        let max_layer = f
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i);
        assert_eq!(max_layer, Some(2));
    }

    #[test]
    fn units_do_not_change_the_answer() {
        let mm = RootDistribution::builder()
            .thicknesses(&[100.0, 250.0, 670.0], LengthUnit::Millimetres)
            .build()
            .unwrap();
        let cm = RootDistribution::builder()
            .thicknesses(&[10.0, 25.0, 67.0], LengthUnit::Centimetres)
            .build()
            .unwrap();
        for (a, b) in mm.fractions().iter().zip(cm.fractions()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn shallow_column_reports_and_renormalizes() {
        let dist = RootDistribution::builder()
            .thicknesses(&[5.0, 5.0], LengthUnit::Centimetres)
            .beta(0.97)
            .build()
            .unwrap();
        let expected_total = 1.0 - 0.97f64.powf(10.0);
        assert_relative_eq!(dist.total(), expected_total, epsilon = 1e-12);
        assert_relative_eq!(dist.below_column(), 0.97f64.powf(10.0), epsilon = 1e-12);

        let closed = dist.renormalized();
        assert_relative_eq!(closed.total(), 1.0, epsilon = 1e-12);
        assert_eq!(closed.below_column(), 0.0);
        assert!(closed.fractions()[0] > closed.fractions()[1]);
    }

    #[test]
    fn empty_builder_rejected() {
        assert_eq!(
            RootDistribution::builder().build(),
            Err(ConfigError::EmptyColumn)
        );
    }
}
