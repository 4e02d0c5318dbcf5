//! Radial gauge pair: baseline efficiency against an optimized target.

use crate::{
    dataset::Dataset,
    error::SynthResult,
    generator::DatasetGenerator,
    rng::SeededStream,
};
use serde::{Deserialize, Serialize};

pub const GAUGE_CAP: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugePair {
    pub baseline:  f64,
    pub optimized: f64,
}

pub fn generate_radial_gauges(stream: &mut SeededStream) -> GaugePair {
    let baseline = stream.uniform(72.0, 82.0);
    let optimized = (baseline + stream.uniform(5.0, 10.0)).min(GAUGE_CAP);
    GaugePair { baseline, optimized }
}

pub struct RadialGaugeGenerator;

impl DatasetGenerator for RadialGaugeGenerator {
    fn name(&self) -> &'static str { "radial_gauges" }

    fn generate(&self, stream: &mut SeededStream) -> SynthResult<Dataset> {
        Ok(Dataset::RadialGauges(generate_radial_gauges(stream)))
    }
}
