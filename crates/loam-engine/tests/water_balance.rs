//! End-to-end behaviour of the layered water balance.

use approx::assert_relative_eq;
use loam_core::{DayIndex, Layer, LayerIndex, SoilColumn};
use loam_engine::{
    run_water_balance, BalanceConfig, ExtractionPolicy, InitialState, WaterBalanceEngine,
};
use loam_forcing::{DailyForcing, DailyInput};
use loam_test_utils::{
    constant_forcing, dry_forcing, pulsed_forcing, reference_column, two_layer_column,
};
use proptest::prelude::*;

fn engine(column: SoilColumn, initial: InitialState) -> WaterBalanceEngine {
    WaterBalanceEngine::new(BalanceConfig::new(column).with_initial(initial)).unwrap()
}

fn assert_within_bounds(column: &SoilColumn, rows: &[Vec<f64>]) {
    for (d, row) in rows.iter().enumerate() {
        for (i, (layer, &w)) in column.layers().iter().zip(row).enumerate() {
            assert!(
                w >= layer.residual_floor && w <= layer.capacity,
                "day {d} layer {i}: {w} outside [{}, {}]",
                layer.residual_floor,
                layer.capacity
            );
        }
    }
}

#[test]
fn two_layer_dry_day_matches_hand_calculation() {
    let run = run_water_balance(
        &[10.0, 20.0],
        &[4.0, 8.0],
        &[0.6, 0.4],
        &[0.0],
        &[3.0],
        0.1,
        1.0,
    )
    .unwrap();
    let row = run.water_content().day(DayIndex(0)).unwrap();
    assert_relative_eq!(row[0], 2.2, epsilon = 1e-12);
    assert_relative_eq!(row[1], 6.8, epsilon = 1e-12);
    assert_eq!(run.unmet_demand(), &[0.0]);
    assert_eq!(run.drainage_lost(), &[0.0]);
}

#[test]
fn drought_exhausts_column_then_reports_full_stress() {
    let column = two_layer_column();
    let mut e = engine(column.clone(), InitialState::default());
    let run = e.run(&dry_forcing(10, 3.0));

    // 9 mm extractable at the start; three days of 3 mm drain it.
    let summary = run.summary();
    assert_relative_eq!(summary.total_transpired, 9.0, epsilon = 1e-9);
    assert_relative_eq!(summary.total_unmet_demand, 21.0, epsilon = 1e-9);
    for d in 4..10 {
        assert_relative_eq!(run.unmet_demand()[d], 3.0, epsilon = 1e-12);
    }
    assert_relative_eq!(run.final_water()[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(run.final_water()[1], 2.0, epsilon = 1e-12);
    assert!(run.drainage_lost().iter().all(|&d| d == 0.0));
    assert_within_bounds(&column, &run.water_content().to_nested());
}

#[test]
fn column_at_floor_cannot_supply_any_demand() {
    let mut e = engine(two_layer_column(), InitialState::ResidualFloor);
    let run = e.run(&dry_forcing(5, 2.5));
    for &unmet in run.unmet_demand() {
        assert_relative_eq!(unmet, 2.5, epsilon = 1e-12);
    }
    assert!(run.transpired().iter().all(|&t| t == 0.0));
    assert_eq!(run.summary().stress_days, 5);
}

#[test]
fn near_unit_root_fractions_account_for_all_demand() {
    // Fractions sum to 1 - 5e-7, inside the accepted tolerance; the column
    // starts at its floor so every millimetre of demand goes unmet.
    let run = run_water_balance(
        &[10.0, 20.0],
        &[4.0, 8.0],
        &[0.6, 0.399_999_5],
        &[0.0; 3],
        &[3.0; 3],
        0.1,
        0.25,
    )
    .unwrap();
    for (&unmet, &demand) in run.unmet_demand().iter().zip(run.demand()) {
        assert_relative_eq!(unmet, demand, epsilon = 1e-12);
    }
    assert!(run.verify_conservation(1e-9).is_balanced());

    let wet = run_water_balance(
        &[10.0, 20.0],
        &[4.0, 8.0],
        &[0.6, 0.399_999_5],
        &[0.0; 3],
        &[3.0; 3],
        0.1,
        1.0,
    )
    .unwrap();
    assert_relative_eq!(wet.summary().total_transpired, 9.0, epsilon = 1e-12);
    assert!(wet.unmet_demand().iter().all(|&u| u == 0.0));
    assert!(wet.verify_conservation(1e-9).is_balanced());
}

#[test]
fn saturated_column_drains_all_rain_without_demand() {
    let mut e = engine(two_layer_column(), InitialState::default());
    let run = e.run(&constant_forcing(4, 7.5, 0.0));
    for d in 0..4 {
        assert_eq!(run.drainage_lost()[d], 7.5);
        assert_eq!(run.water_content().day(DayIndex(d)).unwrap(), &[4.0, 8.0]);
    }
}

#[test]
fn zero_demand_never_loses_storage() {
    let column = reference_column(0.9);
    let mut e = engine(column, InitialState::SaturationFraction(0.5));
    let run = e.run(&pulsed_forcing(60, 7, 25.0, 0.0));
    let mut previous: f64 = run.initial_water().iter().sum();
    for d in 0..run.n_days() {
        let storage = run.storage(DayIndex(d)).unwrap();
        assert!(storage >= previous - 1e-9);
        previous = storage;
    }
    assert!(run.transpired().iter().all(|&t| t == 0.0));
    assert!(run.unmet_demand().iter().all(|&u| u == 0.0));
}

#[test]
fn zero_rain_never_drains() {
    let mut e = engine(reference_column(0.95), InitialState::default());
    let run = e.run(&dry_forcing(120, 5.0));
    assert!(run.drainage_lost().iter().all(|&d| d == 0.0));
    let mut previous: f64 = run.initial_water().iter().sum();
    for d in 0..run.n_days() {
        let storage = run.storage(DayIndex(d)).unwrap();
        assert!(storage <= previous + 1e-9);
        previous = storage;
    }
}

#[test]
fn rain_infiltrates_surface_first() {
    let mut e = engine(two_layer_column(), InitialState::ResidualFloor);
    e.step_day(&DailyInput::new(2.0, 0.0)).unwrap();
    assert_eq!(e.water_content(), &[3.0, 2.0]);
    e.step_day(&DailyInput::new(4.0, 0.0)).unwrap();
    // 1 mm tops up layer 0, 3 mm moves on to layer 1.
    assert_eq!(e.water_content(), &[4.0, 5.0]);
}

#[test]
fn canopy_interception_reduces_infiltration() {
    let forcing = DailyForcing::new(vec![6.0], vec![0.0])
        .unwrap()
        .with_canopy_interception(vec![2.0])
        .unwrap();
    let mut e = engine(two_layer_column(), InitialState::ResidualFloor);
    let run = e.run(&forcing);
    assert_eq!(run.throughfall(), &[4.0]);
    assert_eq!(run.final_water(), &[4.0, 3.0]);
}

#[test]
fn independent_policy_strands_deep_water() {
    let column = two_layer_column();
    let cascading = WaterBalanceEngine::new(
        BalanceConfig::new(column.clone()).with_initial(InitialState::Depths(vec![1.0, 8.0])),
    )
    .unwrap()
    .step_day(&DailyInput::new(0.0, 3.0))
    .map(|o| o.unmet_demand);
    let independent = WaterBalanceEngine::new(
        BalanceConfig::new(column)
            .with_policy(ExtractionPolicy::IndependentPerLayer)
            .with_initial(InitialState::Depths(vec![1.0, 8.0])),
    )
    .unwrap()
    .step_day(&DailyInput::new(0.0, 3.0))
    .map(|o| o.unmet_demand);
    assert_eq!(cascading.unwrap(), 0.0);
    assert_relative_eq!(independent.unwrap(), 1.8, epsilon = 1e-12);
}

#[test]
fn reference_year_conserves_water() {
    let column = reference_column(0.9);
    let mut e = engine(column.clone(), InitialState::SaturationFraction(0.9999));
    let run = e.run(&pulsed_forcing(365, 9, 30.0, 3.0));
    assert!(run.verify_conservation(1e-9).is_balanced());
    assert_within_bounds(&column, &run.water_content().to_nested());

    let s = run.summary();
    let initial: f64 = run.initial_water().iter().sum();
    let closure = initial + s.total_throughfall
        - s.total_transpired
        - s.total_drainage_lost
        + s.total_clamped
        - run.final_water().iter().sum::<f64>();
    assert!(closure.abs() < 1e-6, "closure {closure}");
}

#[test]
fn volumetric_report_matches_depths() {
    let column = reference_column(0.9);
    let mut e = engine(column.clone(), InitialState::default());
    let run = e.run(&dry_forcing(3, 3.0));
    let vwc = run.volumetric_water_content();
    for (i, layer) in column.layers().iter().enumerate() {
        let depth = run.water_content().get(DayIndex(2), LayerIndex(i)).unwrap();
        let theta = vwc.get(DayIndex(2), LayerIndex(i)).unwrap();
        assert_relative_eq!(theta, layer.to_volumetric(depth), epsilon = 1e-15);
        assert!(theta <= 0.398 + 1e-12);
    }
}

fn arb_column() -> impl Strategy<Value = SoilColumn> {
    prop::collection::vec((1.0f64..500.0, 0.2f64..0.5, 0.0f64..0.15, 0.01f64..1.0), 1..7).prop_map(
        |params| {
            let weight: f64 = params.iter().map(|s| s.3).sum();
            let layers = params
                .iter()
                .map(|&(thickness, saturation, residual, w)| {
                    Layer::from_volumetric(thickness, saturation, residual, w / weight)
                })
                .collect();
            SoilColumn::new(layers).unwrap()
        },
    )
}

fn arb_forcing() -> impl Strategy<Value = DailyForcing> {
    prop::collection::vec((0.0f64..40.0, 0.0f64..8.0), 0..60).prop_map(|days| {
        let (rain, demand): (Vec<f64>, Vec<f64>) = days.into_iter().unzip();
        DailyForcing::new(rain, demand).unwrap()
    })
}

fn arb_policy() -> impl Strategy<Value = ExtractionPolicy> {
    prop_oneof![
        Just(ExtractionPolicy::CascadingDeficit),
        Just(ExtractionPolicy::IndependentPerLayer),
    ]
}

proptest! {
    #[test]
    fn water_stays_within_layer_bounds(
        column in arb_column(),
        forcing in arb_forcing(),
        policy in arb_policy(),
        start in 0.75f64..=1.0,
    ) {
        let config = BalanceConfig::new(column.clone())
            .with_policy(policy)
            .with_initial(InitialState::SaturationFraction(start));
        let run = WaterBalanceEngine::new(config).unwrap().run(&forcing);
        for row in run.water_content().rows() {
            for (layer, &w) in column.layers().iter().zip(row) {
                prop_assert!(w >= layer.residual_floor && w <= layer.capacity);
            }
        }
        prop_assert!(run.unmet_demand().iter().all(|&u| u >= 0.0));
        prop_assert!(run.drainage_lost().iter().all(|&d| d >= 0.0));
    }

    #[test]
    fn every_day_balances(
        column in arb_column(),
        forcing in arb_forcing(),
        policy in arb_policy(),
    ) {
        let config = BalanceConfig::new(column).with_policy(policy);
        let run = WaterBalanceEngine::new(config).unwrap().run(&forcing);
        prop_assert!(run.verify_conservation(1e-9).is_balanced());
    }

    #[test]
    fn cascading_meets_at_least_as_much_demand_in_a_day(
        column in arb_column(),
        fill in 0.75f64..=1.0,
        rain in 0.0f64..10.0,
        demand in 0.0f64..20.0,
    ) {
        let input = DailyInput::new(rain, demand);
        let base = BalanceConfig::new(column).with_initial(InitialState::SaturationFraction(fill));
        let cascading = WaterBalanceEngine::new(base.clone()).unwrap().step_day(&input).unwrap();
        let independent =
            WaterBalanceEngine::new(base.with_policy(ExtractionPolicy::IndependentPerLayer))
                .unwrap()
                .step_day(&input)
                .unwrap();
        prop_assert!(cascading.unmet_demand <= independent.unmet_demand + 1e-9);
    }
}
