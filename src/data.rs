use std::path::Path;

use crate::error::SimError;
use crate::types::AssetClass;

/// Annual US 10-year treasury bond returns, percent per line.
pub const BOND_RETURNS_FILE: &str = "10yrUSBondReturns1969to2021.txt";
pub const SP500_RETURNS_FILE: &str = "SP500Returns1969to2021.txt";
pub const NIKKEI_RETURNS_FILE: &str = "NIKKEIReturns1969to2021.txt";
pub const GOLD_RETURNS_FILE: &str = "GOLDReturns1969to2021.txt";
pub const INFLATION_FILE: &str = "annualUSInflation1969to2021.txt";

/// Immutable historical series, one return sequence per asset class plus one
/// inflation sequence, all as decimal fractions in chronological order.
///
/// Built once at process start and read-only afterwards; every simulation
/// call borrows it.
#[derive(Debug, Clone)]
pub struct HistoricalSeriesStore {
    bonds: Vec<f64>,
    sp500: Vec<f64>,
    nikkei: Vec<f64>,
    gold: Vec<f64>,
    inflation: Vec<f64>,
}

impl HistoricalSeriesStore {
    /// Build from raw percentage values (e.g. `7.26` meaning 7.26%).
    /// Each value is divided by 100 and rounded to 5 decimal places.
    pub fn from_percentages(
        bonds: Vec<f64>,
        sp500: Vec<f64>,
        nikkei: Vec<f64>,
        gold: Vec<f64>,
        inflation: Vec<f64>,
    ) -> Result<Self, SimError> {
        let convert = |name: &str, raw: Vec<f64>| -> Result<Vec<f64>, SimError> {
            if raw.is_empty() {
                return Err(SimError::DataLoad {
                    path: name.to_string(),
                    reason: "series is empty".to_string(),
                });
            }
            raw.iter()
                .map(|&pct| {
                    if pct.is_finite() {
                        Ok(to_fraction(pct))
                    } else {
                        Err(SimError::DataLoad {
                            path: name.to_string(),
                            reason: format!("non-finite value {pct}"),
                        })
                    }
                })
                .collect()
        };

        Ok(HistoricalSeriesStore {
            bonds: convert("bonds", bonds)?,
            sp500: convert("sp500", sp500)?,
            nikkei: convert("nikkei", nikkei)?,
            gold: convert("gold", gold)?,
            inflation: convert("inflation", inflation)?,
        })
    }

    /// Load the five canonical source files from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, SimError> {
        let dir = dir.as_ref();
        Self::from_percentages(
            read_percent_file(&dir.join(BOND_RETURNS_FILE))?,
            read_percent_file(&dir.join(SP500_RETURNS_FILE))?,
            read_percent_file(&dir.join(NIKKEI_RETURNS_FILE))?,
            read_percent_file(&dir.join(GOLD_RETURNS_FILE))?,
            read_percent_file(&dir.join(INFLATION_FILE))?,
        )
    }

    /// The return series backing the given asset class.
    pub fn returns(&self, asset_class: AssetClass) -> &[f64] {
        match asset_class {
            AssetClass::Bonds => &self.bonds,
            AssetClass::Sp500 => &self.sp500,
            AssetClass::Nikkei => &self.nikkei,
            AssetClass::Gold => &self.gold,
        }
    }

    pub fn inflation(&self) -> &[f64] {
        &self.inflation
    }
}

/// Percentage to decimal fraction, rounded to 5 decimal places.
fn to_fraction(pct: f64) -> f64 {
    (pct / 100.0 * 100_000.0).round() / 100_000.0
}

/// Read one percentage value per line. Sources may carry a UTF-8 BOM.
/// Any malformed line fails the whole load.
fn read_percent_file(path: &Path) -> Result<Vec<f64>, SimError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|e| SimError::DataLoad {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    let text = text.trim_start_matches('\u{feff}');

    let mut values = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: f64 = line.parse().map_err(|_| SimError::DataLoad {
            path: display.clone(),
            reason: format!("line {}: not a number: {line:?}", i + 1),
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(SimError::DataLoad { path: display, reason: "no values".to_string() });
    }
    Ok(values)
}
