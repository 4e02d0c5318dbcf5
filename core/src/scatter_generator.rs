//! Ocean-health scatter: thermal stress against nutrient and oxygen load.

use crate::{
    compose::Band,
    dataset::Dataset,
    error::SynthResult,
    generator::DatasetGenerator,
    rng::SeededStream,
};
use serde::{Deserialize, Serialize};

pub const TEMP_BAND: Band    = Band::new(26.5, 29.3);
pub const NITRATE_BAND: Band = Band::new(1.64, 2.08);
pub const OXYGEN_BAND: Band  = Band::new(5.45, 6.11);

/// Temperature the nutrient and oxygen anomalies are measured from.
const REFERENCE_TEMP: f64 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Arabian Sea")]
    ArabianSea,
    #[serde(rename = "Bay of Bengal")]
    BayOfBengal,
}

impl Region {
    fn temp_mean(&self) -> f64 {
        match self {
            Self::ArabianSea  => 28.0,
            Self::BayOfBengal => 28.5,
        }
    }

    fn nitrate_mean(&self) -> f64 {
        match self {
            Self::ArabianSea  => 1.9,
            Self::BayOfBengal => 1.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub profile_id: String,
    pub region:     Region,
    pub temp:       f64,
    pub nitrate:    f64,
    pub oxygen:     f64,
}

pub fn generate_ocean_health(stream: &mut SeededStream, count: usize) -> Vec<ScatterPoint> {
    (0..count)
        .map(|i| {
            let region = if stream.coin() {
                Region::ArabianSea
            } else {
                Region::BayOfBengal
            };
            let temp = stream.gaussian(region.temp_mean(), 0.4);
            let anomaly = temp - REFERENCE_TEMP;
            let nitrate = stream.gaussian(region.nitrate_mean(), 0.1) - anomaly * 0.1;
            let oxygen = stream.gaussian(5.8, 0.2) - anomaly * 0.15;
            ScatterPoint {
                profile_id: format!("P{}", 1000 + i),
                region,
                temp:    TEMP_BAND.clamp(temp),
                nitrate: NITRATE_BAND.clamp(nitrate),
                oxygen:  OXYGEN_BAND.clamp(oxygen),
            }
        })
        .collect()
}

pub struct OceanHealthGenerator {
    pub count: usize,
}

impl DatasetGenerator for OceanHealthGenerator {
    fn name(&self) -> &'static str { "ocean_health" }

    fn generate(&self, stream: &mut SeededStream) -> SynthResult<Dataset> {
        Ok(Dataset::OceanHealthScatter(generate_ocean_health(stream, self.count)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_seven_draws_per_point() {
        let mut s = SeededStream::new(1);
        generate_ocean_health(&mut s, 10);
        assert_eq!(s.draws(), 70);
    }

    #[test]
    fn zero_count_is_empty_and_draws_nothing() {
        let mut s = SeededStream::new(1);
        assert!(generate_ocean_health(&mut s, 0).is_empty());
        assert_eq!(s.draws(), 0);
    }

    #[test]
    fn profile_ids_are_sequential() {
        let mut s = SeededStream::new(5);
        let pts = generate_ocean_health(&mut s, 3);
        let ids: Vec<_> = pts.iter().map(|p| p.profile_id.as_str()).collect();
        assert_eq!(ids, vec!["P1000", "P1001", "P1002"]);
    }

    #[test]
    fn region_serializes_with_display_name() {
        let json = serde_json::to_string(&Region::BayOfBengal).unwrap();
        assert_eq!(json, "\"Bay of Bengal\"");
    }
}
