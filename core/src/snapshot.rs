//! Snapshot serialization: a full dashboard to and from JSON.
//!
//! Two snapshots built from the same seed, anchor and config serialize
//! to identical bytes. Determinism tests compare these strings.

use crate::{dataset::Dataset, error::SynthResult, types::Seed};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub name:    String,
    pub dataset: Dataset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub seed:   Seed,
    pub anchor: NaiveDate,
    /// Stream draws consumed across all panels.
    pub draws:  u64,
    pub panels: Vec<Panel>,
}

impl DashboardSnapshot {
    pub fn panel(&self, name: &str) -> Option<&Dataset> {
        self.panels
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.dataset)
    }

    pub fn to_json(&self) -> SynthResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> SynthResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> SynthResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge_generator::GaugePair;

    #[test]
    fn floats_parse_back_bit_exact() {
        let snap = DashboardSnapshot {
            seed:   31,
            anchor: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            draws:  2,
            panels: vec![Panel {
                name:    "radial_gauges".into(),
                dataset: Dataset::RadialGauges(GaugePair {
                    baseline:  27.778204272119954,
                    optimized: 0.1 + 0.2,
                }),
            }],
        };
        let back = DashboardSnapshot::from_json(&snap.to_json().unwrap()).unwrap();
        assert_eq!(back, snap);
    }
}
