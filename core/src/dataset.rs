//! The tagged union of every descriptive dataset.

use crate::{
    activity_generator::DailyActivity,
    composition_generator::CompositionSlice,
    gauge_generator::GaugePair,
    kpi_generator::KpiBar,
    profile_generator::ProfilePoint,
    ranking_generator::{FacilityUtilization, TornadoBar},
    scatter_generator::ScatterPoint,
    trend_generator::MonthlyTrendPoint,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Dataset {
    OceanHealthScatter(Vec<ScatterPoint>),
    KpiBars(Vec<KpiBar>),
    Composition(Vec<CompositionSlice>),
    MonthlyTrend(Vec<MonthlyTrendPoint>),
    Tornado(Vec<TornadoBar>),
    FacilityUtilization(Vec<FacilityUtilization>),
    DailyActivity(Vec<DailyActivity>),
    RadialGauges(GaugePair),
    ProfileCrossSection(Vec<ProfilePoint>),
}

impl Dataset {
    /// Number of records; a gauge pair counts as one.
    pub fn len(&self) -> usize {
        match self {
            Self::OceanHealthScatter(v)  => v.len(),
            Self::KpiBars(v)             => v.len(),
            Self::Composition(v)         => v.len(),
            Self::MonthlyTrend(v)        => v.len(),
            Self::Tornado(v)             => v.len(),
            Self::FacilityUtilization(v) => v.len(),
            Self::DailyActivity(v)       => v.len(),
            Self::RadialGauges(_)        => 1,
            Self::ProfileCrossSection(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::OceanHealthScatter(_)  => "ocean_health_scatter",
            Self::KpiBars(_)             => "kpi_bars",
            Self::Composition(_)         => "composition",
            Self::MonthlyTrend(_)        => "monthly_trend",
            Self::Tornado(_)             => "tornado",
            Self::FacilityUtilization(_) => "facility_utilization",
            Self::DailyActivity(_)       => "daily_activity",
            Self::RadialGauges(_)        => "radial_gauges",
            Self::ProfileCrossSection(_) => "profile_cross_section",
        }
    }
}
