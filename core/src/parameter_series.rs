//! Per-float parameter series for the float detail drill-down.
//!
//! The seed is the float's platform number times the character sum of
//! the parameter id, in wrapping i32 arithmetic. Same float and
//! parameter, same 50 points; a different parameter, a different series.

use crate::{
    catalog::Parameter,
    error::{SynthError, SynthResult},
    rng::SeededStream,
    types::{PlatformId, Seed},
};
use serde::{Deserialize, Serialize};

pub const SERIES_LENGTH: u32 = 50;
/// Values are reported to this many decimal places.
const REPORTED_DECIMALS: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub cycle: u32,
    pub value: f64,
}

/// Sum of the id's characters as code points.
pub fn parameter_checksum(id: &str) -> i32 {
    id.chars().fold(0i32, |acc, c| acc.wrapping_add(c as i32))
}

pub fn series_seed(parameter: Parameter, platform_id: PlatformId) -> Seed {
    platform_id.wrapping_mul(parameter_checksum(parameter.id()))
}

fn round_reported(value: f64) -> f64 {
    let scale = 10f64.powi(REPORTED_DECIMALS);
    (value * scale).round() / scale
}

pub fn generate_parameter_series(parameter: Parameter, platform_id: PlatformId) -> Vec<SeriesPoint> {
    let band = parameter.band();
    let mut stream = SeededStream::new(series_seed(parameter, platform_id));

    let series: Vec<SeriesPoint> = (1..=SERIES_LENGTH)
        .map(|cycle| {
            let value = if band.is_degenerate() {
                band.min
            } else {
                band.clamp(round_reported(stream.uniform(band.min, band.max)))
            };
            SeriesPoint { cycle, value }
        })
        .collect();

    log::debug!(
        "parameter series {parameter} float={platform_id} seed={} points={}",
        series_seed(parameter, platform_id),
        series.len()
    );
    series
}

/// String-keyed entry point; unknown ids are a domain error.
pub fn parameter_series(parameter_id: &str, platform_id: PlatformId) -> SynthResult<Vec<SeriesPoint>> {
    let parameter: Parameter = parameter_id.parse()?;
    Ok(generate_parameter_series(parameter, platform_id))
}

/// A profiling float as placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatSite {
    pub id:       String,
    pub location: String,
    pub lat:      f64,
    pub lng:      f64,
}

impl FloatSite {
    /// Platform number from the id: leading non-digits are stripped,
    /// then the leading run of digits is parsed ("ARGO2902300" -> 2902300).
    pub fn platform_id(&self) -> SynthResult<PlatformId> {
        let invalid = || SynthError::InvalidPlatformId { id: self.id.clone() };
        let rest = self.id.trim_start_matches(|c: char| !c.is_ascii_digit());
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(invalid());
        }
        digits.parse().map_err(|_| invalid())
    }

    pub fn parameter_series(&self, parameter: Parameter) -> SynthResult<Vec<SeriesPoint>> {
        Ok(generate_parameter_series(parameter, self.platform_id()?))
    }
}
