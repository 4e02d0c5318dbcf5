//! CO₂ driver composition: four shares that always total 100.

use crate::{
    compose::{normalize_to_total, Band},
    dataset::Dataset,
    error::SynthResult,
    generator::DatasetGenerator,
    rng::SeededStream,
};
use serde::{Deserialize, Serialize};

pub const COMPOSITION_TOTAL: f64 = 100.0;

pub const TEMP_SENSITIVITY_BAND: Band   = Band::new(30.0, 40.0);
pub const SALINITY_STRAT_BAND: Band     = Band::new(15.0, 25.0);
pub const NITRATE_LIMITATION_BAND: Band = Band::new(15.0, 25.0);
/// Residual share; derived, never sampled.
pub const LIGHT_AVAILABILITY_BAND: Band = Band::new(10.0, 20.0);

pub const SLICE_NAMES: [&str; 4] = [
    "Temp. sensitivity",
    "Salinity strat.",
    "Nitrate limitation",
    "Light (PAR) avail.",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSlice {
    pub name:  String,
    pub value: f64,
}

pub fn generate_composition(stream: &mut SeededStream) -> Vec<CompositionSlice> {
    let sampled = [
        stream.uniform(TEMP_SENSITIVITY_BAND.min, TEMP_SENSITIVITY_BAND.max),
        stream.uniform(SALINITY_STRAT_BAND.min, SALINITY_STRAT_BAND.max),
        stream.uniform(NITRATE_LIMITATION_BAND.min, NITRATE_LIMITATION_BAND.max),
    ];
    let composed = normalize_to_total(&sampled, LIGHT_AVAILABILITY_BAND, COMPOSITION_TOTAL);

    composed
        .parts
        .iter()
        .copied()
        .chain(std::iter::once(composed.residual))
        .zip(SLICE_NAMES)
        .map(|(value, name)| CompositionSlice {
            name: name.to_string(),
            value,
        })
        .collect()
}

pub struct CompositionGenerator;

impl DatasetGenerator for CompositionGenerator {
    fn name(&self) -> &'static str { "co2_drivers" }

    fn generate(&self, stream: &mut SeededStream) -> SynthResult<Dataset> {
        Ok(Dataset::Composition(generate_composition(stream)))
    }
}
