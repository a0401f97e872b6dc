//! The facade re-exports compose into a complete workflow.

use approx::assert_relative_eq;
use loam::prelude::*;

#[test]
fn roots_feed_a_column_and_run() {
    let thicknesses_cm = [1.0, 2.5, 6.7, 17.8, 47.2, 124.8];
    let fractions = compute_root_fractions(&thicknesses_cm, 0.9).unwrap();
    let thicknesses_mm: Vec<f64> = thicknesses_cm
        .iter()
        .map(|&t| LengthUnit::Centimetres.to_millimetres(t))
        .collect();
    let capacities: Vec<f64> = thicknesses_mm.iter().map(|t| t * 0.398).collect();

    let run = run_water_balance(
        &thicknesses_mm,
        &capacities,
        &fractions,
        &[0.0, 0.0, 20.0, 0.0],
        &[3.0, 3.0, 3.0, 3.0],
        0.072,
        0.9999,
    )
    .unwrap();
    assert_eq!(run.n_days(), 4);
    assert!(run.unmet_demand().iter().all(|&u| u == 0.0));
    assert_relative_eq!(run.summary().total_transpired, 12.0, epsilon = 1e-9);
    // Raw Jackson fractions fall short of one by the roots below 2 m.
    assert!(run.verify_conservation(1e-9).is_balanced());
}

#[test]
fn errors_surface_through_the_facade() {
    let err = run_water_balance(&[10.0], &[4.0], &[0.5], &[0.0], &[1.0], 0.1, 1.0).unwrap_err();
    assert!(matches!(err, ConfigError::RootFractionSum { .. }));
    assert_eq!(err.to_string(), "root fractions sum to 0.5, expected 1 within 0.000001");
}
