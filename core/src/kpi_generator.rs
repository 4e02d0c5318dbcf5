//! KPI bars: baseline region against comparison region per metric.

use crate::{
    compose::Band,
    dataset::Dataset,
    error::SynthResult,
    generator::DatasetGenerator,
    rng::SeededStream,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct KpiMetric {
    pub name:     &'static str,
    pub band:     Band,
    /// Expected comparison minus baseline.
    pub sea_diff: f64,
}

pub const KPI_METRICS: [KpiMetric; 5] = [
    KpiMetric { name: "Mean Temp (°C)",      band: Band::new(26.51, 29.27),     sea_diff: 0.2 },
    KpiMetric { name: "Mean Salinity (PSU)", band: Band::new(35.28, 35.70),     sea_diff: -0.1 },
    KpiMetric { name: "Mean Oxygen",         band: Band::new(5.4508, 6.1149),   sea_diff: -0.3 },
    KpiMetric { name: "Mean Chlorophyll",    band: Band::new(0.94599, 1.27193), sea_diff: 0.15 },
    KpiMetric { name: "Mean Nitrate",        band: Band::new(1.63915, 2.08097), sea_diff: 0.2 },
];

/// Jitter around the midpoint, as a share of the half-width.
const BASELINE_JITTER: f64 = 0.1;
/// Relative jitter applied to each metric's sea_diff.
const DELTA_JITTER: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiBar {
    pub name:          String,
    pub arabian_sea:   f64,
    pub bay_of_bengal: f64,
}

/// A KPI bar plus the sampled delta before clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiComparison {
    pub bar:       KpiBar,
    pub raw_delta: f64,
}

pub fn generate_kpi_comparison(stream: &mut SeededStream) -> Vec<KpiComparison> {
    KPI_METRICS
        .iter()
        .map(|kpi| {
            let mid = kpi.band.midpoint();
            let baseline = stream.uniform(
                mid - (mid - kpi.band.min) * BASELINE_JITTER,
                mid + (kpi.band.max - mid) * BASELINE_JITTER,
            );
            let raw_delta = stream.uniform(
                kpi.sea_diff * (1.0 - DELTA_JITTER),
                kpi.sea_diff * (1.0 + DELTA_JITTER),
            );
            KpiComparison {
                bar: KpiBar {
                    name:          kpi.name.to_string(),
                    arabian_sea:   kpi.band.clamp(baseline),
                    bay_of_bengal: kpi.band.clamp(baseline + raw_delta),
                },
                raw_delta,
            }
        })
        .collect()
}

pub fn generate_kpi(stream: &mut SeededStream) -> Vec<KpiBar> {
    generate_kpi_comparison(stream)
        .into_iter()
        .map(|c| c.bar)
        .collect()
}

pub struct KpiGenerator;

impl DatasetGenerator for KpiGenerator {
    fn name(&self) -> &'static str { "kpi_bars" }

    fn generate(&self, stream: &mut SeededStream) -> SynthResult<Dataset> {
        Ok(Dataset::KpiBars(generate_kpi(stream)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bar_per_metric_in_declared_order() {
        let mut s = SeededStream::new(3);
        let bars = generate_kpi(&mut s);
        let names: Vec<_> = bars.iter().map(|b| b.name.as_str()).collect();
        let expected: Vec<_> = KPI_METRICS.iter().map(|k| k.name).collect();
        assert_eq!(names, expected);
        assert_eq!(s.draws(), 10);
    }

    #[test]
    fn raw_delta_stays_within_twenty_percent() {
        let mut s = SeededStream::new(11);
        for _ in 0..200 {
            for (c, kpi) in generate_kpi_comparison(&mut s).iter().zip(KPI_METRICS.iter()) {
                let lo = (kpi.sea_diff * 0.8).min(kpi.sea_diff * 1.2);
                let hi = (kpi.sea_diff * 0.8).max(kpi.sea_diff * 1.2);
                assert!(c.raw_delta >= lo && c.raw_delta <= hi);
            }
        }
    }
}
