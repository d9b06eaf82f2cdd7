use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// The closed set of asset classes with a historical return series.
/// Anything else is a validation error at the parse boundary, never a
/// runtime fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Bonds,
    Sp500,
    Nikkei,
    Gold,
}

impl AssetClass {
    pub const ALL: [AssetClass; 4] =
        [AssetClass::Bonds, AssetClass::Sp500, AssetClass::Nikkei, AssetClass::Gold];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetClass::Bonds => "bonds",
            AssetClass::Sp500 => "sp500",
            AssetClass::Nikkei => "nikkei",
            AssetClass::Gold => "gold",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bonds" => Ok(AssetClass::Bonds),
            "sp500" => Ok(AssetClass::Sp500),
            "nikkei" => Ok(AssetClass::Nikkei),
            "gold" => Ok(AssetClass::Gold),
            other => Err(SimError::UnknownAssetClass(other.to_string())),
        }
    }
}

/// Parameters of one simulation run. Immutable for its duration.
///
/// Balances and withdrawals are whole currency units; the transport layer
/// guarantees they arrive non-negative. Duration bounds are validated by
/// [`crate::duration::DurationBounds`] before any trial runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub asset_class: AssetClass,
    pub starting_balance: i64,
    pub annual_withdrawal: i64,
    pub min_years: u32,
    pub mode_years: u32,
    pub max_years: u32,
}
