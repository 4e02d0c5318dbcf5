//! Ranked bar datasets: oxygen driver sensitivity (tornado) and
//! facility utilization. Output order is part of the contract.

use crate::{
    dataset::Dataset,
    error::SynthResult,
    generator::DatasetGenerator,
    rng::SeededStream,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactSign {
    Negative,
    Positive,
}

/// (driver, sign, magnitude range)
pub const TORNADO_DRIVERS: [(&str, ImpactSign, f64, f64); 5] = [
    ("Temp. Anomaly",  ImpactSign::Negative, 0.08, 0.20),
    ("Stratification", ImpactSign::Negative, 0.05, 0.12),
    ("Mixing Depth",   ImpactSign::Positive, 0.06, 0.18),
    ("Nitrate Supply", ImpactSign::Positive, 0.03, 0.10),
    ("PAR",            ImpactSign::Positive, 0.01, 0.05),
];

/// (facility, utilization range in percent)
pub const FACILITIES: [(&str, f64, f64); 5] = [
    ("Kerala Coastal Ops",   75.0, 88.0),
    ("Andaman Ops",          60.0, 75.0),
    ("Arabian Sea Transect", 85.0, 95.0),
    ("BoB Central Transect", 55.0, 68.0),
    ("Nicobar Leg",          91.0, 96.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoBar {
    pub driver: String,
    pub impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityUtilization {
    pub name:        String,
    pub utilization: f64,
}

/// Sorted by descending |impact|; ties keep declaration order.
pub fn generate_tornado(stream: &mut SeededStream) -> Vec<TornadoBar> {
    let mut bars: Vec<TornadoBar> = TORNADO_DRIVERS
        .iter()
        .map(|&(driver, sign, lo, hi)| {
            let magnitude = stream.uniform(lo, hi);
            TornadoBar {
                driver: driver.to_string(),
                impact: match sign {
                    ImpactSign::Negative => -magnitude,
                    ImpactSign::Positive => magnitude,
                },
            }
        })
        .collect();
    bars.sort_by(|a, b| b.impact.abs().total_cmp(&a.impact.abs()));
    bars
}

/// Sorted by ascending utilization; ties keep declaration order.
pub fn generate_facility_utilization(stream: &mut SeededStream) -> Vec<FacilityUtilization> {
    let mut rows: Vec<FacilityUtilization> = FACILITIES
        .iter()
        .map(|&(name, lo, hi)| FacilityUtilization {
            name:        name.to_string(),
            utilization: stream.uniform(lo, hi),
        })
        .collect();
    rows.sort_by(|a, b| a.utilization.total_cmp(&b.utilization));
    rows
}

pub struct TornadoGenerator;

impl DatasetGenerator for TornadoGenerator {
    fn name(&self) -> &'static str { "oxygen_drivers" }

    fn generate(&self, stream: &mut SeededStream) -> SynthResult<Dataset> {
        Ok(Dataset::Tornado(generate_tornado(stream)))
    }
}

pub struct FacilityGenerator;

impl DatasetGenerator for FacilityGenerator {
    fn name(&self) -> &'static str { "facility_utilization" }

    fn generate(&self, stream: &mut SeededStream) -> SynthResult<Dataset> {
        Ok(Dataset::FacilityUtilization(generate_facility_utilization(stream)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tornado_signs_follow_declared_drivers() {
        let mut s = SeededStream::new(77);
        let bars = generate_tornado(&mut s);
        for bar in &bars {
            let (_, sign, lo, hi) = TORNADO_DRIVERS
                .iter()
                .find(|d| d.0 == bar.driver)
                .copied()
                .unwrap();
            match sign {
                ImpactSign::Negative => assert!(bar.impact < 0.0),
                ImpactSign::Positive => assert!(bar.impact > 0.0),
            }
            assert!(bar.impact.abs() >= lo && bar.impact.abs() <= hi);
        }
    }

    #[test]
    fn facilities_are_each_reported_once() {
        let mut s = SeededStream::new(77);
        let mut names: Vec<_> = generate_facility_utilization(&mut s)
            .into_iter()
            .map(|r| r.name)
            .collect();
        names.sort();
        let mut expected: Vec<_> = FACILITIES.iter().map(|f| f.0.to_string()).collect();
        expected.sort();
        assert_eq!(names, expected);
    }
}
