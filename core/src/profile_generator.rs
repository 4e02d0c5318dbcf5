//! Profile cross-section: temperature and salinity per float cycle.

use crate::{
    dataset::Dataset,
    error::SynthResult,
    generator::DatasetGenerator,
    rng::SeededStream,
};
use serde::{Deserialize, Serialize};

const TEMP_JITTER: f64 = 0.5;
const SALINITY_JITTER: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub cycle:       u32,
    pub temperature: f64,
    pub salinity:    f64,
}

pub fn generate_profile_cross_section(stream: &mut SeededStream, cycles: u32) -> Vec<ProfilePoint> {
    let base_temp = stream.uniform(27.5, 28.5);
    let base_salinity = stream.uniform(35.3, 35.5);
    (1..=cycles)
        .map(|cycle| ProfilePoint {
            cycle,
            temperature: base_temp + stream.uniform(-TEMP_JITTER, TEMP_JITTER),
            salinity:    base_salinity + stream.uniform(-SALINITY_JITTER, SALINITY_JITTER),
        })
        .collect()
}

pub struct ProfileCrossSectionGenerator {
    pub cycles: u32,
}

impl DatasetGenerator for ProfileCrossSectionGenerator {
    fn name(&self) -> &'static str { "profile_cross_section" }

    fn generate(&self, stream: &mut SeededStream) -> SynthResult<Dataset> {
        Ok(Dataset::ProfileCrossSection(generate_profile_cross_section(
            stream,
            self.cycles,
        )))
    }
}
