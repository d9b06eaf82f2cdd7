use crate::types::{AssetClass, SimulationRequest};

/// Reference trial count; kept for compatibility testing against other
/// implementations of the same model.
pub const DEFAULT_TRIALS: u32 = 50_000;

/// Everything one simulation invocation needs besides the historical data.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub seed: u64,
    pub trials: u32,
    pub data_dir: String,
    pub request: SimulationRequest,
}

impl RunConfig {
    /// Canonical run: a 1.5M portfolio drawing 60k a year for an 18–40 year
    /// retirement, most likely 25, against the S&P 500 record.
    pub fn canonical() -> Self {
        RunConfig {
            seed: 42,
            trials: DEFAULT_TRIALS,
            data_dir: "data".to_string(),
            request: SimulationRequest {
                asset_class: AssetClass::Sp500,
                starting_balance: 1_500_000,
                annual_withdrawal: 60_000,
                min_years: 18,
                mode_years: 25,
                max_years: 40,
            },
        }
    }
}
