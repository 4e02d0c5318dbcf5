//! The descriptive dashboard: nine panels from one request-owned stream.
//!
//! PANEL ORDER (fixed, documented, never reordered):
//!   1. Ocean health scatter
//!   2. KPI bars
//!   3. CO₂ driver composition
//!   4. Monthly chlorophyll / PAR trend
//!   5. Oxygen driver sensitivity (tornado)
//!   6. Facility utilization
//!   7. Daily activity by platform
//!   8. Radial gauges
//!   9. Profile cross-section
//!
//! RULES:
//!   - Generators run in registration order against ONE stream.
//!   - The stream is created inside generate() from the seed argument
//!     and dropped when it returns; nothing survives between calls.
//!   - Reordering panels changes every panel after the moved one.

use crate::{
    activity_generator::DailyActivityGenerator,
    composition_generator::CompositionGenerator,
    config::DashboardConfig,
    error::SynthResult,
    gauge_generator::RadialGaugeGenerator,
    generator::DatasetGenerator,
    kpi_generator::KpiGenerator,
    profile_generator::ProfileCrossSectionGenerator,
    ranking_generator::{FacilityGenerator, TornadoGenerator},
    rng::SeededStream,
    scatter_generator::OceanHealthGenerator,
    snapshot::{DashboardSnapshot, Panel},
    trend_generator::MonthlyTrendGenerator,
    types::Seed,
};
use chrono::NaiveDate;

pub struct DescriptiveDashboard {
    generators: Vec<Box<dyn DatasetGenerator>>,
    anchor:     NaiveDate,
}

impl DescriptiveDashboard {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            generators: Vec::new(),
            anchor,
        }
    }

    /// Build a dashboard with all nine panels registered.
    /// Call this instead of new() + manual register() calls.
    pub fn build(config: &DashboardConfig, anchor: NaiveDate) -> Self {
        let mut dashboard = Self::new(anchor);

        // PANEL ORDER: fixed and documented. Never reorder.
        dashboard.register(Box::new(OceanHealthGenerator { count: config.scatter_count }));
        dashboard.register(Box::new(KpiGenerator));
        dashboard.register(Box::new(CompositionGenerator));
        dashboard.register(Box::new(MonthlyTrendGenerator {
            months: config.trend_months,
            anchor,
        }));
        dashboard.register(Box::new(TornadoGenerator));
        dashboard.register(Box::new(FacilityGenerator));
        dashboard.register(Box::new(DailyActivityGenerator { days: config.activity_days }));
        dashboard.register(Box::new(RadialGaugeGenerator));
        dashboard.register(Box::new(ProfileCrossSectionGenerator {
            cycles: config.profile_cycles,
        }));
        dashboard
    }

    /// Register a generator. Call in the documented panel order.
    pub fn register(&mut self, generator: Box<dyn DatasetGenerator>) {
        self.generators.push(generator);
    }

    pub fn panel_names(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    /// Run every registered generator against a fresh stream.
    pub fn generate(&self, seed: Seed) -> SynthResult<DashboardSnapshot> {
        let mut stream = SeededStream::new(seed);
        let mut panels = Vec::with_capacity(self.generators.len());

        for generator in &self.generators {
            let dataset = generator.generate(&mut stream)?;
            log::debug!(
                "seed={seed} panel={} kind={} records={} draws={}",
                generator.name(),
                dataset.kind(),
                dataset.len(),
                stream.draws()
            );
            panels.push(Panel {
                name: generator.name().to_string(),
                dataset,
            });
        }

        log::info!(
            "descriptive dashboard built: seed={seed} panels={} draws={}",
            panels.len(),
            stream.draws()
        );

        Ok(DashboardSnapshot {
            seed,
            anchor: self.anchor,
            draws: stream.draws(),
            panels,
        })
    }
}
