//! Stacked daily profile counts per platform, with occasional spikes.

use crate::{
    dataset::Dataset,
    error::SynthResult,
    generator::DatasetGenerator,
    rng::SeededStream,
};
use serde::{Deserialize, Serialize};

pub const PLATFORM_COUNT: usize = 4;

/// Chance a platform reports nothing on a given day.
const IDLE_PROBABILITY: f64 = 0.3;
/// Chance a day gets a spike on one platform.
const SPIKE_PROBABILITY: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub day: String,
    #[serde(rename = "P1")]
    pub p1: u32,
    #[serde(rename = "P2")]
    pub p2: u32,
    #[serde(rename = "P3")]
    pub p3: u32,
    #[serde(rename = "P4")]
    pub p4: u32,
}

impl DailyActivity {
    pub fn counts(&self) -> [u32; PLATFORM_COUNT] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    pub fn total(&self) -> u32 {
        self.counts().iter().sum()
    }

    fn from_counts(day: String, c: [u32; PLATFORM_COUNT]) -> Self {
        Self { day, p1: c[0], p2: c[1], p3: c[2], p4: c[3] }
    }
}

pub fn generate_daily_activity(stream: &mut SeededStream, days: usize) -> Vec<DailyActivity> {
    (0..days)
        .map(|i| {
            let mut counts = [0u32; PLATFORM_COUNT];
            for c in counts.iter_mut() {
                *c = if stream.next_f64() > IDLE_PROBABILITY {
                    stream.index_in(0, 3)
                } else {
                    0
                };
            }
            if stream.chance(SPIKE_PROBABILITY) {
                let platform = stream.index_in(1, PLATFORM_COUNT as u32 + 1) as usize;
                counts[platform - 1] += stream.index_in(2, 4);
            }
            DailyActivity::from_counts(format!("Day {}", i + 1), counts)
        })
        .collect()
}

pub struct DailyActivityGenerator {
    pub days: usize,
}

impl DatasetGenerator for DailyActivityGenerator {
    fn name(&self) -> &'static str { "daily_activity" }

    fn generate(&self, stream: &mut SeededStream) -> SynthResult<Dataset> {
        Ok(Dataset::DailyActivity(generate_daily_activity(stream, self.days)))
    }
}
