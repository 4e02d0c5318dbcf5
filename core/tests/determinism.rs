//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two dashboards, same seed, same config.
//! They must produce byte-identical JSON.
//! Any divergence is a blocker. Do not merge until fixed.

use chrono::NaiveDate;
use oceansynth_core::{
    config::{DashboardConfig, ForecastConfig},
    dashboard::DescriptiveDashboard,
    forecast::generate_all_forecasts,
    rng::SeededStream,
    scatter_generator::{generate_ocean_health, Region, TEMP_BAND},
};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
}

fn dashboard_json(seed: i32) -> String {
    let _ = env_logger::builder().is_test(true).try_init();
    DescriptiveDashboard::build(&DashboardConfig::default(), anchor())
        .generate(seed)
        .expect("dashboard")
        .to_json()
        .expect("json")
}

#[test]
fn same_seed_produces_identical_dashboards() {
    const SEED: i32 = 12345;
    let a = dashboard_json(SEED);
    let b = dashboard_json(SEED);
    assert_eq!(a.len(), b.len(), "Snapshot lengths differ: {} vs {}", a.len(), b.len());
    assert_eq!(a, b, "Dashboard snapshots diverged for seed {SEED}");
}

#[test]
fn different_seeds_produce_different_dashboards() {
    assert_ne!(
        dashboard_json(42),
        dashboard_json(99),
        "Different seeds produced identical dashboards; seed is not being used"
    );
}

#[test]
fn scatter_scenario_is_reproducible() {
    let a = generate_ocean_health(&mut SeededStream::new(12345), 120);
    let b = generate_ocean_health(&mut SeededStream::new(12345), 120);
    assert_eq!(a.len(), 120);
    assert_eq!(a, b);
    for p in &a {
        assert!(matches!(p.region, Region::ArabianSea | Region::BayOfBengal));
        assert!(TEMP_BAND.contains(p.temp), "temp {} out of band", p.temp);
        assert!(p.temp >= 26.5 && p.temp <= 29.3);
    }
}

#[test]
fn interleaved_requests_do_not_share_state() {
    // Building a forecast between two dashboards must not disturb either.
    let first = dashboard_json(7);
    generate_all_forecasts(7, &ForecastConfig::default()).expect("forecast");
    let second = dashboard_json(7);
    assert_eq!(first, second);
}

#[test]
fn parallel_requests_match_serial_ones() {
    let serial: Vec<String> = (0..8).map(dashboard_json).collect();
    let parallel: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|seed| scope.spawn(move || dashboard_json(seed)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread"))
            .collect()
    });
    assert_eq!(serial, parallel);
}

#[test]
fn forecasts_are_reproducible() {
    let cfg = ForecastConfig::default();
    let a = generate_all_forecasts(2024, &cfg).expect("a");
    let b = generate_all_forecasts(2024, &cfg).expect("b");
    assert_eq!(
        serde_json::to_string(&a).expect("json a"),
        serde_json::to_string(&b).expect("json b")
    );
}

#[test]
fn snapshot_round_trips_through_json() {
    let snap = DescriptiveDashboard::build(&DashboardConfig::default(), anchor())
        .generate(31)
        .expect("dashboard");
    let json = snap.to_json().expect("json");
    let back = oceansynth_core::snapshot::DashboardSnapshot::from_json(&json).expect("parse");
    assert_eq!(back, snap);
    assert_eq!(back.to_json().expect("json again"), json);
}
