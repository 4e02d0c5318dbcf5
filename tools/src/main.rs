//! synth-runner: headless dataset runner for the ocean synth core.
//!
//! Usage:
//!   synth-runner --mode descriptive --seed 12345 --json
//!   synth-runner --mode forecast --days 50 --horizon 30d --variables temperature,ph
//!   synth-runner --mode series --float ARGO2902300 --parameter salinity
//!   synth-runner --mode sweep --trials 10000

use anyhow::{bail, Context, Result};
use oceansynth_core::{
    catalog::{ForecastVariable, Parameter},
    composition_generator::{generate_composition, COMPOSITION_TOTAL},
    config::{Horizon, SynthConfig},
    dashboard::DescriptiveDashboard,
    dataset::Dataset,
    forecast::generate_all_forecasts,
    parameter_series::{generate_parameter_series, FloatSite},
    ranking_generator::{generate_facility_utilization, generate_tornado},
    rng::SeedBank,
    snapshot::DashboardSnapshot,
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let mode = flag(&args, "--mode").unwrap_or("descriptive");
    let data_dir = flag(&args, "--data-dir").unwrap_or("./data");

    let mut config = load_config(data_dir)?;
    config.seed = parse_arg(&args, "--seed", config.seed);

    if !json {
        println!("Ocean synth: synth-runner");
        println!("  mode:      {mode}");
        println!("  seed:      {}", config.seed);
        println!("  data_dir:  {data_dir}");
        println!();
    }

    match mode {
        "descriptive" => run_descriptive(&config, json),
        "forecast"    => run_forecast(&args, &mut config, json),
        "series"      => run_series(&args, json),
        "sweep"       => run_sweep(&args, config.seed),
        other         => bail!("unknown mode '{other}' (descriptive|forecast|series|sweep)"),
    }
}

fn load_config(data_dir: &str) -> Result<SynthConfig> {
    if Path::new(data_dir).join("synth_config.json").exists() {
        return SynthConfig::load(data_dir);
    }
    log::warn!("no synth_config.json under {data_dir}; using built-in defaults");
    Ok(SynthConfig::default_test())
}

fn run_descriptive(config: &SynthConfig, json: bool) -> Result<()> {
    let snapshot = DescriptiveDashboard::build(&config.dashboard, config.anchor())
        .generate(config.seed)?;
    if json {
        println!("{}", snapshot.to_json_pretty()?);
    } else {
        print_dashboard_summary(&snapshot);
    }
    Ok(())
}

fn run_forecast(args: &[String], config: &mut SynthConfig, json: bool) -> Result<()> {
    config.forecast.training_days = parse_arg(args, "--days", config.forecast.training_days);
    if let Some(raw) = flag(args, "--horizon") {
        config.forecast.horizon = raw.parse::<Horizon>()?;
    }
    if let Some(raw) = flag(args, "--variables") {
        config.forecast.variables = raw
            .split(',')
            .map(|id| id.trim().parse::<ForecastVariable>())
            .collect::<Result<Vec<_>, _>>()?;
    }

    let outcome = generate_all_forecasts(config.seed, &config.forecast)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("=== FORECAST ===");
    println!("  training days: {}", outcome.params.training_days);
    println!("  horizon:       {}", outcome.params.horizon);
    println!();
    for r in &outcome.results {
        let last_width = r
            .forecast()
            .last()
            .and_then(|p| p.confidence_width)
            .unwrap_or(0.0);
        println!(
            "  {:<16} mean {:>10.4} | last {:>10.4} -> {:>10.4} ±{:.4} | {:?}",
            r.variable.id(),
            r.stats.mean,
            r.stats.historical_last,
            r.stats.forecast_last,
            last_width,
            r.stats.trend
        );
    }
    println!();
    println!("{}", outcome.narrative);
    Ok(())
}

fn run_series(args: &[String], json: bool) -> Result<()> {
    let parameter: Parameter = flag(args, "--parameter").unwrap_or("temperature").parse()?;
    let float_id = flag(args, "--float").context("--float <ID> is required in series mode")?;
    let site = FloatSite {
        id:       float_id.to_string(),
        location: String::new(),
        lat:      0.0,
        lng:      0.0,
    };
    let platform_id = site.platform_id()?;
    let series = generate_parameter_series(parameter, platform_id);

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }
    println!("=== {} for float {platform_id} ({}) ===", parameter.label(), parameter.unit());
    for p in &series {
        println!("  cycle {:>2}: {:.4}", p.cycle, p.value);
    }
    Ok(())
}

/// Check the composition sum law and both sort laws over derived seeds.
fn run_sweep(args: &[String], master_seed: i32) -> Result<()> {
    let trials = parse_arg(args, "--trials", 10_000usize);
    let bank = SeedBank::new(master_seed as u32 as u64);
    let mut failures = 0usize;

    for slot in 0..trials as u64 {
        let seed = bank.seed_for(slot);
        let mut stream = bank.stream_for(slot);
        let total: f64 = generate_composition(&mut stream).iter().map(|s| s.value).sum();
        if (total - COMPOSITION_TOTAL).abs() >= 1e-6 {
            log::error!("seed {seed}: composition total {total}");
            failures += 1;
        }
        let tornado = generate_tornado(&mut stream);
        if tornado.windows(2).any(|w| w[0].impact.abs() < w[1].impact.abs()) {
            log::error!("seed {seed}: tornado out of order");
            failures += 1;
        }
        let facilities = generate_facility_utilization(&mut stream);
        if facilities.windows(2).any(|w| w[0].utilization > w[1].utilization) {
            log::error!("seed {seed}: facilities out of order");
            failures += 1;
        }
    }

    if failures == 0 {
        println!("sweep PASS: {trials} seeds from master {}", bank.master_seed());
        Ok(())
    } else {
        bail!("sweep FAIL: {failures} violations across {trials} seeds")
    }
}

fn print_dashboard_summary(snapshot: &DashboardSnapshot) {
    println!("=== DASHBOARD SUMMARY ===");
    println!("  seed:    {}", snapshot.seed);
    println!("  anchor:  {}", snapshot.anchor);
    println!("  draws:   {}", snapshot.draws);
    println!();
    for panel in &snapshot.panels {
        println!("  {:<24} {:>4} records", panel.name, panel.dataset.len());
    }

    if let Some(Dataset::Composition(slices)) = snapshot.panel("co2_drivers") {
        println!();
        println!("=== CO₂ DRIVERS ===");
        for s in slices {
            println!("  {:<20} {:>6.2}%", s.name, s.value);
        }
    }
    if let Some(Dataset::RadialGauges(g)) = snapshot.panel("radial_gauges") {
        println!();
        println!("  gauges: baseline {:.1}% | optimized {:.1}%", g.baseline, g.optimized);
    }
}

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
