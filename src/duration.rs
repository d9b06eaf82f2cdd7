use rand::Rng;
use rand_distr::{Distribution, Triangular};

use crate::error::SimError;

/// Validated retirement-length bounds for the triangular duration draw.
///
/// Constructed once per simulation run so invalid ordering is rejected
/// before any trial consumes entropy.
#[derive(Debug, Clone)]
pub struct DurationBounds {
    min: u32,
    max: u32,
    /// `None` when `min == max`; the draw is then degenerate.
    dist: Option<Triangular<f64>>,
}

impl DurationBounds {
    pub fn new(min: u32, mode: u32, max: u32) -> Result<Self, SimError> {
        if min == 0 || min > mode || mode > max {
            return Err(SimError::InvalidDurationBounds { min, mode, max });
        }
        let dist = if min == max {
            None
        } else {
            Some(
                Triangular::new(min as f64, max as f64, mode as f64)
                    .map_err(|_| SimError::InvalidDurationBounds { min, mode, max })?,
            )
        };
        Ok(DurationBounds { min, max, dist })
    }

    /// Draw one retirement length in whole years.
    ///
    /// The continuous triangular draw lies in `[min, max]` and is truncated
    /// toward zero, so the result always satisfies `min <= years <= max`.
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        match &self.dist {
            Some(dist) => dist.sample(rng) as u32,
            None => self.min,
        }
    }

    pub fn min_years(&self) -> u32 {
        self.min
    }

    pub fn max_years(&self) -> u32 {
        self.max
    }
}
