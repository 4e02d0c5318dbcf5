//! Forecast generation: a seasonal historical window per variable,
//! extrapolated along its fitted trend with a widening confidence band.
//!
//! SERIES LAYOUT:
//!   index 0 ..= training_days - 1   historical (no confidence width)
//!   index training_days ..          forecast   (confidence width >= 0)
//!
//! The seam is exact: the last historical value is the anchor of the
//! extrapolation, and nothing is sampled on the forecast side. Summary
//! statistics are computed from the series itself, never drawn.

use crate::{
    catalog::ForecastVariable,
    compose::Band,
    config::{ForecastConfig, Horizon},
    error::SynthResult,
    rng::SeededStream,
    types::{DayIndex, Seed},
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const SEASONAL_PERIOD_DAYS: f64 = 90.0;
/// Seasonal amplitude as a share of the variable's band width.
const SEASONAL_AMPLITUDE: f64 = 0.35;
/// Maximum drift across the training window, as a share of band width.
const DRIFT_SHARE: f64 = 0.15;
/// Daily jitter half-width, as a share of band width.
const JITTER_SHARE: f64 = 0.04;
/// Two-sided 95% normal quantile.
const Z_95: f64 = 1.96;
/// Floor on the residual spread, as a share of band width.
const MIN_SIGMA_SHARE: f64 = 0.01;
/// Total forecast change below this share of band width reads as stable.
const STABLE_SHARE: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Historical,
    Forecast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub index:   DayIndex,
    pub value:   f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_width: Option<f64>,
    pub segment: Segment,
}

impl ForecastPoint {
    pub fn lower(&self) -> Option<f64> {
        self.confidence_width.map(|w| self.value - w)
    }

    pub fn upper(&self) -> Option<f64> {
        self.confidence_width.map(|w| self.value + w)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastStats {
    /// Mean of the historical segment.
    pub mean:            f64,
    pub historical_last: f64,
    pub forecast_last:   f64,
    pub slope_per_day:   f64,
    /// Residual spread of the trend fit, before the floor.
    pub residual_std:    f64,
    pub trend:           TrendDirection,
    pub narrative:       String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub variable: ForecastVariable,
    pub series:   Vec<ForecastPoint>,
    pub range:    [f64; 2],
    pub stats:    ForecastStats,
}

impl ForecastResult {
    fn split(&self) -> usize {
        self.series
            .partition_point(|p| p.segment == Segment::Historical)
    }

    pub fn historical(&self) -> &[ForecastPoint] {
        &self.series[..self.split()]
    }

    pub fn forecast(&self) -> &[ForecastPoint] {
        &self.series[self.split()..]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastParams {
    pub seed:          Seed,
    pub training_days: usize,
    pub horizon:       Horizon,
    pub variables:     Vec<ForecastVariable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOutcome {
    pub params:    ForecastParams,
    pub results:   Vec<ForecastResult>,
    /// Markdown summary across all variables.
    pub narrative: String,
}

/// Least-squares line through (i, values[i]).
struct TrendFit {
    slope:        f64,
    residual_std: f64,
}

fn fit_trend(values: &[f64]) -> TrendFit {
    let n = values.len();
    if n < 2 {
        return TrendFit { slope: 0.0, residual_std: 0.0 };
    }
    let mean_x = (n - 1) as f64 / 2.0;
    let mean_y = values.iter().sum::<f64>() / n as f64;

    let (sxy, sxx) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sxy, sxx), (i, y)| {
            let dx = i as f64 - mean_x;
            (sxy + dx * (y - mean_y), sxx + dx * dx)
        });
    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let sse: f64 = values
        .iter()
        .enumerate()
        .map(|(i, y)| (y - (intercept + slope * i as f64)).powi(2))
        .sum();
    let dof = n.saturating_sub(2).max(1) as f64;

    TrendFit {
        slope,
        residual_std: (sse / dof).sqrt(),
    }
}

fn decimals_for(band: &Band) -> usize {
    match band.width() {
        w if w >= 10.0 => 1,
        w if w >= 0.1 => 2,
        _ => 4,
    }
}

fn describe(
    variable: ForecastVariable,
    stats: &ForecastStats,
    horizon_days: usize,
) -> String {
    let param = variable.parameter();
    let p = decimals_for(&variable.band());
    let unit = match param.unit() {
        "" => String::new(),
        u => format!(" {u}"),
    };
    let outlook = match stats.trend {
        TrendDirection::Rising => format!(
            "is expected to rise from {:.p$} to {:.p$}{unit}",
            stats.historical_last, stats.forecast_last
        ),
        TrendDirection::Falling => format!(
            "is expected to fall from {:.p$} to {:.p$}{unit}",
            stats.historical_last, stats.forecast_last
        ),
        TrendDirection::Stable => format!(
            "is expected to hold steady near {:.p$}{unit}",
            stats.forecast_last
        ),
    };
    format!(
        "{} {outlook} over the next {horizon_days} days (training mean {:.p$}{unit}).",
        param.label(),
        stats.mean
    )
}

/// One variable's historical window plus forecast, drawing only for the
/// historical side.
pub fn generate_forecast(
    stream: &mut SeededStream,
    variable: ForecastVariable,
    training_days: usize,
    horizon_days: usize,
) -> ForecastResult {
    let band = variable.band();
    let width = band.width();
    let mid = band.midpoint();

    let phase = stream.uniform(0.0, 2.0 * PI);
    let drift = stream.uniform(-1.0, 1.0) * DRIFT_SHARE * width;

    let historical: Vec<f64> = (0..training_days)
        .map(|d| {
            let season = (2.0 * PI * d as f64 / SEASONAL_PERIOD_DAYS + phase).sin();
            let value = mid
                + SEASONAL_AMPLITUDE * width * season
                + drift * d as f64 / training_days as f64
                + stream.uniform(-JITTER_SHARE, JITTER_SHARE) * width;
            band.clamp(value)
        })
        .collect();

    let fit = fit_trend(&historical);
    let anchor = historical.last().copied().unwrap_or(mid);
    let sigma = fit.residual_std.max(MIN_SIGMA_SHARE * width);

    let mut series: Vec<ForecastPoint> = historical
        .iter()
        .enumerate()
        .map(|(index, &value)| ForecastPoint {
            index,
            value,
            confidence_width: None,
            segment: Segment::Historical,
        })
        .collect();

    series.extend((0..horizon_days).map(|k| {
        let step = (k + 1) as f64;
        ForecastPoint {
            index:            training_days + k,
            value:            band.clamp(anchor + fit.slope * step),
            confidence_width: Some(Z_95 * sigma * step.sqrt()),
            segment:          Segment::Forecast,
        }
    }));

    let mean = if historical.is_empty() {
        mid
    } else {
        historical.iter().sum::<f64>() / historical.len() as f64
    };
    let forecast_last = series.last().map(|p| p.value).unwrap_or(anchor);
    let change = forecast_last - anchor;
    let trend = if change.abs() < STABLE_SHARE * width {
        TrendDirection::Stable
    } else if change > 0.0 {
        TrendDirection::Rising
    } else {
        TrendDirection::Falling
    };

    let mut stats = ForecastStats {
        mean,
        historical_last: anchor,
        forecast_last,
        slope_per_day: fit.slope,
        residual_std: fit.residual_std,
        trend,
        narrative: String::new(),
    };
    stats.narrative = describe(variable, &stats, horizon_days);

    log::debug!(
        "forecast {variable}: hist={training_days} horizon={horizon_days} slope={:.5} trend={trend:?}",
        fit.slope
    );

    ForecastResult {
        variable,
        series,
        range: [band.min, band.max],
        stats,
    }
}

fn summarize(results: &[ForecastResult], horizon: Horizon) -> String {
    let count = |t: TrendDirection| results.iter().filter(|r| r.stats.trend == t).count();
    let mut out = format!(
        "### Outlook for the next {} days\n\n",
        horizon.in_days()
    );
    for r in results {
        out.push_str(&format!(
            "- **{}**: {}\n",
            r.variable.parameter().label(),
            r.stats.narrative
        ));
    }
    out.push_str(&format!(
        "\n{} rising, {} falling, {} stable.",
        count(TrendDirection::Rising),
        count(TrendDirection::Falling),
        count(TrendDirection::Stable)
    ));
    out
}

/// Forecast every requested variable from one fresh stream.
/// Duplicate variables are dropped; the first occurrence keeps its slot.
pub fn generate_all_forecasts(seed: Seed, config: &ForecastConfig) -> SynthResult<ForecastOutcome> {
    config.validate()?;

    let mut variables: Vec<ForecastVariable> = Vec::with_capacity(config.variables.len());
    for v in &config.variables {
        if variables.contains(v) {
            log::warn!("duplicate forecast variable '{v}' ignored");
        } else {
            variables.push(*v);
        }
    }

    let horizon_days = config.horizon.in_days() as usize;
    let mut stream = SeededStream::new(seed);
    let results: Vec<ForecastResult> = variables
        .iter()
        .map(|&v| generate_forecast(&mut stream, v, config.training_days, horizon_days))
        .collect();

    let narrative = summarize(&results, config.horizon);
    log::info!(
        "forecast built: seed={seed} variables={} training={} horizon={}",
        results.len(),
        config.training_days,
        config.horizon
    );

    Ok(ForecastOutcome {
        params: ForecastParams {
            seed,
            training_days: config.training_days,
            horizon: config.horizon,
            variables,
        },
        results,
        narrative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_recovers_exact_line() {
        let values: Vec<f64> = (0..10).map(|i| 3.0 + 0.5 * i as f64).collect();
        let fit = fit_trend(&values);
        assert!((fit.slope - 0.5).abs() < 1e-12);
        assert!(fit.residual_std < 1e-9);
    }

    #[test]
    fn fit_of_single_point_is_flat() {
        let fit = fit_trend(&[4.2]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.residual_std, 0.0);
    }

    #[test]
    fn draws_two_plus_one_per_training_day() {
        let mut s = SeededStream::new(5);
        generate_forecast(&mut s, ForecastVariable::Oxygen, 20, 30);
        assert_eq!(s.draws(), 22);
    }

    #[test]
    fn single_training_day_still_forecasts() {
        let mut s = SeededStream::new(5);
        let r = generate_forecast(&mut s, ForecastVariable::Ph, 1, 10);
        assert_eq!(r.historical().len(), 1);
        assert_eq!(r.forecast().len(), 10);
        assert_eq!(r.stats.trend, TrendDirection::Stable);
        assert!(r.forecast().iter().all(|p| p.value == r.stats.historical_last));
    }

    #[test]
    fn bounds_bracket_value() {
        let mut s = SeededStream::new(5);
        let r = generate_forecast(&mut s, ForecastVariable::Salinity, 50, 30);
        for p in r.forecast() {
            assert!(p.lower().unwrap() <= p.value && p.value <= p.upper().unwrap());
        }
        assert!(r.historical().iter().all(|p| p.lower().is_none()));
    }

    #[test]
    fn historical_points_omit_width_in_json() {
        let mut s = SeededStream::new(5);
        let r = generate_forecast(&mut s, ForecastVariable::Cdom, 2, 1);
        let json = serde_json::to_value(&r).unwrap();
        assert!(json["series"][0].get("confidenceWidth").is_none());
        assert_eq!(json["series"][0]["segment"], "historical");
        assert_eq!(json["series"][2]["segment"], "forecast");
        assert!(json["series"][2]["confidenceWidth"].as_f64().unwrap() >= 0.0);
    }
}
