//! Monthly seasonal trend of chlorophyll and downwelling PAR.

use crate::{
    compose::Band,
    dataset::Dataset,
    error::{SynthError, SynthResult},
    generator::DatasetGenerator,
    rng::SeededStream,
};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const CHLOROPHYLL_BAND: Band = Band::new(0.95, 1.27);
pub const PAR_BAND: Band         = Band::new(169.0, 227.0);

const CHLOROPHYLL_MEAN: f64 = 1.11;
const CHLOROPHYLL_AMPLITUDE: f64 = 0.16;
const CHLOROPHYLL_JITTER: f64 = 0.05;
const PAR_MEAN: f64 = 198.0;
const PAR_AMPLITUDE: f64 = 29.0;
const PAR_JITTER: f64 = 10.0;
/// Maximum random phase shift, in radians.
const PHASE_JITTER: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    /// e.g. "Mar '25"
    pub month:       String,
    pub chlorophyll: f64,
    pub par:         f64,
}

/// `months` points ending at the month containing `anchor`, oldest first.
pub fn generate_monthly_trend(
    stream: &mut SeededStream,
    months: u32,
    anchor: NaiveDate,
) -> SynthResult<Vec<MonthlyTrendPoint>> {
    let first_of_anchor = anchor.with_day(1).ok_or_else(|| SynthError::InvalidConfig {
        reason: format!("cannot take first day of month for {anchor}"),
    })?;

    (0..months)
        .rev()
        .map(|back| {
            let date = first_of_anchor
                .checked_sub_months(Months::new(back))
                .ok_or_else(|| SynthError::InvalidConfig {
                    reason: format!("{back} months before {anchor} is out of range"),
                })?;
            let season = date.month0() as f64 / 12.0 * 2.0 * PI;

            let chl_factor = (season + stream.next_f64() * PHASE_JITTER).sin();
            let par_factor = (season + PI / 4.0 + stream.next_f64() * PHASE_JITTER).sin();

            let chlorophyll = CHLOROPHYLL_MEAN
                + chl_factor * CHLOROPHYLL_AMPLITUDE
                + stream.uniform(-CHLOROPHYLL_JITTER, CHLOROPHYLL_JITTER);
            let par = PAR_MEAN
                + par_factor * PAR_AMPLITUDE
                + stream.uniform(-PAR_JITTER, PAR_JITTER);

            Ok(MonthlyTrendPoint {
                month:       date.format("%b '%y").to_string(),
                chlorophyll: CHLOROPHYLL_BAND.clamp(chlorophyll),
                par:         PAR_BAND.clamp(par),
            })
        })
        .collect()
}

pub struct MonthlyTrendGenerator {
    pub months: u32,
    pub anchor: NaiveDate,
}

impl DatasetGenerator for MonthlyTrendGenerator {
    fn name(&self) -> &'static str { "monthly_trends" }

    fn generate(&self, stream: &mut SeededStream) -> SynthResult<Dataset> {
        generate_monthly_trend(stream, self.months, self.anchor).map(Dataset::MonthlyTrend)
    }
}
