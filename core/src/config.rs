use crate::{
    catalog::ForecastVariable,
    error::{SynthError, SynthResult},
    types::Seed,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Days in the "1 month" horizon option.
pub const MONTH_HORIZON_DAYS: u32 = 30;

// ── Descriptive dashboard ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub scatter_count:  usize,
    pub trend_months:   u32,
    pub activity_days:  usize,
    pub profile_cycles: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            scatter_count:  120,
            trend_months:   16,
            activity_days:  30,
            profile_cycles: 10,
        }
    }
}

// ── Forecast ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HorizonLabel {
    Days,
    Month,
}

/// Forecast horizon in days. Parses "10d", "30d", "1 month".
///
/// Displays the way it was chosen, so "1 month" echoes back as "1 month".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Horizon {
    days:  u32,
    label: HorizonLabel,
}

impl Horizon {
    pub fn in_days(&self) -> u32 {
        self.days
    }
}

impl FromStr for Horizon {
    type Err = SynthError;

    fn from_str(s: &str) -> SynthResult<Self> {
        let raw = s.trim();
        let invalid = || SynthError::InvalidHorizon { raw: s.to_string() };

        if raw.eq_ignore_ascii_case("1 month") {
            return Ok(Self {
                days:  MONTH_HORIZON_DAYS,
                label: HorizonLabel::Month,
            });
        }
        let days: u32 = raw
            .strip_suffix('d')
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?;
        if days == 0 {
            return Err(invalid());
        }
        Ok(Self {
            days,
            label: HorizonLabel::Days,
        })
    }
}

impl TryFrom<String> for Horizon {
    type Error = SynthError;

    fn try_from(s: String) -> SynthResult<Self> {
        s.parse()
    }
}

impl From<Horizon> for String {
    fn from(h: Horizon) -> Self {
        h.to_string()
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            HorizonLabel::Month => f.write_str("1 month"),
            HorizonLabel::Days  => write!(f, "{}d", self.days),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastConfig {
    pub training_days: usize,
    pub horizon:       Horizon,
    pub variables:     Vec<ForecastVariable>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            training_days: 50,
            horizon:       Horizon {
                days:  30,
                label: HorizonLabel::Days,
            },
            variables:     ForecastVariable::ALL.to_vec(),
        }
    }
}

impl ForecastConfig {
    pub fn validate(&self) -> SynthResult<()> {
        if self.training_days == 0 {
            return Err(SynthError::InvalidConfig {
                reason: "training_days must be at least 1".into(),
            });
        }
        if self.variables.is_empty() {
            return Err(SynthError::InvalidConfig {
                reason: "at least one forecast variable is required".into(),
            });
        }
        Ok(())
    }
}

// ── Top level ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    pub seed: Seed,
    /// Month the trend panel ends on. None means today.
    #[serde(default)]
    pub anchor_date: Option<NaiveDate>,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

impl SynthConfig {
    /// Load from the data/ directory.
    /// In tests, use SynthConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/synth_config.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: SynthConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config
            .forecast
            .validate()
            .map_err(|e| anyhow::anyhow!("{path}: {e}"))?;
        log::debug!("loaded config from {path}: seed={}", config.seed);
        Ok(config)
    }

    pub fn default_test() -> Self {
        Self {
            seed:        12345,
            anchor_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            dashboard:   DashboardConfig::default(),
            forecast:    ForecastConfig::default(),
        }
    }

    /// The configured anchor, or today's local date.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
