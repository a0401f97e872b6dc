//! One reference year, summarised per layer.
//!
//! Set `RUST_LOG=loam_engine=debug` to see stress days as they happen.

use loam_bench::reference_profile;
use loam_core::{DayIndex, LayerIndex};
use loam_engine::WaterBalanceEngine;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let profile = match reference_profile(0) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "invalid reference profile");
            std::process::exit(1);
        }
    };
    let mut engine = match WaterBalanceEngine::new(profile.config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!(error = %e, "invalid engine configuration");
            std::process::exit(1);
        }
    };
    let run = engine.run(&profile.forcing);
    let summary = run.summary();

    println!("=== Loam Reference Year ===\n");
    println!("days:              {}", summary.days);
    println!("rain reaching soil {:>9.1} mm", summary.total_throughfall);
    println!("transpired         {:>9.1} mm", summary.total_transpired);
    println!("unmet demand       {:>9.1} mm", summary.total_unmet_demand);
    println!("drainage lost      {:>9.1} mm", summary.total_drainage_lost);
    println!("storage change     {:>9.1} mm", summary.storage_change);
    println!("stress days        {:>9}", summary.stress_days);
    println!("demand met         {:>9.1} %", 100.0 * summary.demand_satisfaction());

    println!("\nvolumetric water content by layer (m3/m3):");
    let vwc = run.volumetric_water_content();
    let bottoms = engine.column().bottom_depths();
    println!("{:>8} {:>8} {:>8} {:>8} {:>8}", "bottom", "day 0", "day 90", "day 180", "day 364");
    for (i, bottom) in bottoms.iter().enumerate() {
        let at = |d: usize| vwc.get(DayIndex(d), LayerIndex(i)).unwrap_or(f64::NAN);
        println!(
            "{:>6.0}mm {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
            bottom,
            at(0),
            at(90),
            at(180),
            at(364)
        );
    }

    match run.verify_conservation(1e-9) {
        loam_engine::ConservationResult::Balanced => tracing::info!("water balance closed"),
        loam_engine::ConservationResult::Anomaly(a) => {
            tracing::warn!(message = %a.message, "water balance anomaly")
        }
    }
}
