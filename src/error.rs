use thiserror::Error;

/// Failures the simulator reports to its caller.
///
/// All four are detected eagerly, before any trial runs; none of them ever
/// terminates the hosting process from inside the library. Invalid input is
/// a caller bug, not a transient condition, so nothing here is retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A historical source file is missing, empty, or malformed.
    /// Fatal at startup: no simulation is possible without the data.
    #[error("failed to load historical data from {path}: {reason}")]
    DataLoad {
        /// Source file the loader was reading.
        path: String,
        /// What went wrong, including the line number for parse failures.
        reason: String,
    },

    /// The request named an asset class outside the closed enumeration.
    #[error("unknown asset class '{0}' (expected bonds, sp500, nikkei or gold)")]
    UnknownAssetClass(String),

    /// Retirement duration bounds are not ordered `0 < min <= mode <= max`.
    #[error("invalid duration bounds: need 0 < min <= mode <= max, got ({min}, {mode}, {max})")]
    InvalidDurationBounds { min: u32, mode: u32, max: u32 },

    /// A simulation was requested with zero trials; mean/min/max would be
    /// undefined.
    #[error("trial count must be positive")]
    InvalidTrialCount,
}
