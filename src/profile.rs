//! Risk profile catalog
//!
//! Three named risk postures, each bounding the risk taken per trade and
//! how much of full Kelly the sizing engine is allowed to use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::sizing::SizingError;

/// Name of a risk posture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfileName {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfileName {
    /// All profile names in ascending order of risk
    pub const ALL: [RiskProfileName; 3] = [
        RiskProfileName::Conservative,
        RiskProfileName::Moderate,
        RiskProfileName::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfileName::Conservative => "conservative",
            RiskProfileName::Moderate => "moderate",
            RiskProfileName::Aggressive => "aggressive",
        }
    }

    fn index(self) -> usize {
        match self {
            RiskProfileName::Conservative => 0,
            RiskProfileName::Moderate => 1,
            RiskProfileName::Aggressive => 2,
        }
    }
}

impl fmt::Display for RiskProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfileName {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(RiskProfileName::Conservative),
            "moderate" => Ok(RiskProfileName::Moderate),
            "aggressive" => Ok(RiskProfileName::Aggressive),
            other => Err(SizingError::UnknownProfile(other.to_string())),
        }
    }
}

/// Risk-per-trade band, in percent of account balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBand {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// A named risk posture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub name: RiskProfileName,
    /// Risk per trade, percent
    pub risk_per_trade: RiskBand,
    /// Share of full Kelly applied (0-1)
    pub kelly_fraction_multiplier: f64,
    /// Drawdown ceiling as a fraction of peak equity
    pub max_drawdown: f64,
    pub description: String,
}

/// Read-only lookup of the three risk profiles
#[derive(Debug, Clone, PartialEq)]
pub struct RiskProfileCatalog {
    profiles: [RiskProfile; 3],
}

impl RiskProfileCatalog {
    /// Build the standard catalog
    pub fn standard() -> Self {
        Self {
            profiles: [
                RiskProfile {
                    name: RiskProfileName::Conservative,
                    risk_per_trade: RiskBand {
                        min: 0.5,
                        max: 1.0,
                        default: 0.75,
                    },
                    kelly_fraction_multiplier: 0.25,
                    max_drawdown: 0.10,
                    description: "Capital preservation first: quarter Kelly, at most 1% per trade"
                        .to_string(),
                },
                RiskProfile {
                    name: RiskProfileName::Moderate,
                    risk_per_trade: RiskBand {
                        min: 1.0,
                        max: 2.0,
                        default: 1.5,
                    },
                    kelly_fraction_multiplier: 0.35,
                    max_drawdown: 0.15,
                    description: "Balanced growth: 35% of Kelly, at most 2% per trade".to_string(),
                },
                RiskProfile {
                    name: RiskProfileName::Aggressive,
                    risk_per_trade: RiskBand {
                        min: 1.5,
                        max: 3.0,
                        default: 2.0,
                    },
                    kelly_fraction_multiplier: 0.5,
                    max_drawdown: 0.25,
                    description: "Growth focused: half Kelly, at most 3% per trade".to_string(),
                },
            ],
        }
    }

    /// Look up a profile by name
    pub fn get(&self, name: RiskProfileName) -> &RiskProfile {
        &self.profiles[name.index()]
    }

    /// Iterate profiles from least to most aggressive
    pub fn iter(&self) -> impl Iterator<Item = &RiskProfile> {
        self.profiles.iter()
    }
}

impl Default for RiskProfileCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
