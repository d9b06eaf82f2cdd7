//! Historical-bootstrap retirement simulator.
//!
//! Each trial replays a retirement of randomly drawn length against the
//! historical record, starting from a random year and wrapping cyclically,
//! with a fixed real withdrawal that is inflation-adjusted from year two
//! onward. Aggregating tens of thousands of independent trials gives the
//! probability the portfolio depletes before the retirement ends.

pub mod aggregate;
pub mod config;
pub mod data;
pub mod duration;
pub mod error;
pub mod scenario;
pub mod types;
