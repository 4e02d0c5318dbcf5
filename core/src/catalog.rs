//! Declared sensor parameters and their value bands.
//!
//! Lookups go through the enums below. Unknown string ids are rejected
//! with a domain error; nothing here returns an empty default.

use crate::{
    compose::Band,
    error::{SynthError, SynthResult},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Temperature,
    Salinity,
    Pressure,
    Ph,
    Oxygen,
    Nitrate,
    Bbp700,
    Chlorophyll,
    Cdom,
    DownwellingPar,
}

impl Parameter {
    pub const ALL: [Parameter; 10] = [
        Self::Temperature,
        Self::Salinity,
        Self::Pressure,
        Self::Oxygen,
        Self::Nitrate,
        Self::Ph,
        Self::Bbp700,
        Self::Chlorophyll,
        Self::Cdom,
        Self::DownwellingPar,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Temperature    => "temperature",
            Self::Salinity       => "salinity",
            Self::Pressure       => "pressure",
            Self::Ph             => "ph",
            Self::Oxygen         => "oxygen",
            Self::Nitrate        => "nitrate",
            Self::Bbp700         => "bbp700",
            Self::Chlorophyll    => "chlorophyll",
            Self::Cdom           => "cdom",
            Self::DownwellingPar => "downwelling_par",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Temperature    => "Temperature",
            Self::Salinity       => "Salinity",
            Self::Pressure       => "Pressure",
            Self::Ph             => "pH",
            Self::Oxygen         => "Oxygen",
            Self::Nitrate        => "Nitrate",
            Self::Bbp700         => "BBP700",
            Self::Chlorophyll    => "Chlorophyll",
            Self::Cdom           => "CDOM",
            Self::DownwellingPar => "Downwelling PAR",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Temperature    => "°C",
            Self::Salinity       => "PSU",
            Self::Pressure       => "dbar",
            Self::Ph             => "",
            Self::Oxygen         => "mg/L",
            Self::Nitrate        => "µmol/kg",
            Self::Bbp700         => "m⁻¹",
            Self::Chlorophyll    => "mg/m³",
            Self::Cdom           => "m⁻¹",
            Self::DownwellingPar => "µmol/m²/s",
        }
    }

    pub fn band(&self) -> Band {
        match self {
            Self::Temperature    => Band::new(26.51, 29.27),
            Self::Salinity       => Band::new(35.28, 35.70),
            Self::Pressure       => Band::new(20.0, 20.0),
            Self::Ph             => Band::new(7.9297, 8.0356),
            Self::Oxygen         => Band::new(5.4508, 6.1149),
            Self::Nitrate        => Band::new(1.63915, 2.08097),
            Self::Bbp700         => Band::new(0.003708, 0.024895),
            Self::Chlorophyll    => Band::new(0.94599, 1.27193),
            Self::Cdom           => Band::new(0.25337, 0.31673),
            Self::DownwellingPar => Band::new(168.58, 226.57),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Parameter {
    type Err = SynthError;

    fn from_str(s: &str) -> SynthResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.id() == s)
            .ok_or_else(|| SynthError::UnknownParameter { id: s.to_string() })
    }
}

/// Parameters that can be forecast. Pressure is a fixed-depth reading
/// and has no forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastVariable {
    Temperature,
    Salinity,
    Ph,
    Oxygen,
    Chlorophyll,
    Nitrate,
    Bbp700,
    Cdom,
    DownwellingPar,
}

impl ForecastVariable {
    pub const ALL: [ForecastVariable; 9] = [
        Self::Temperature,
        Self::Salinity,
        Self::Ph,
        Self::Oxygen,
        Self::Chlorophyll,
        Self::Nitrate,
        Self::Bbp700,
        Self::Cdom,
        Self::DownwellingPar,
    ];

    pub fn parameter(&self) -> Parameter {
        match self {
            Self::Temperature    => Parameter::Temperature,
            Self::Salinity       => Parameter::Salinity,
            Self::Ph             => Parameter::Ph,
            Self::Oxygen         => Parameter::Oxygen,
            Self::Chlorophyll    => Parameter::Chlorophyll,
            Self::Nitrate        => Parameter::Nitrate,
            Self::Bbp700         => Parameter::Bbp700,
            Self::Cdom           => Parameter::Cdom,
            Self::DownwellingPar => Parameter::DownwellingPar,
        }
    }

    pub fn id(&self) -> &'static str {
        self.parameter().id()
    }

    pub fn band(&self) -> Band {
        self.parameter().band()
    }
}

impl fmt::Display for ForecastVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ForecastVariable {
    type Err = SynthError;

    fn from_str(s: &str) -> SynthResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.id() == s)
            .ok_or_else(|| SynthError::UnknownVariable { id: s.to_string() })
    }
}
