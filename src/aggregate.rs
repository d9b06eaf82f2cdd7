use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Value, json};

use crate::data::HistoricalSeriesStore;
use crate::duration::DurationBounds;
use crate::error::SimError;
use crate::scenario::{self, ScenarioOutcome};
use crate::types::SimulationRequest;

/// How many leading trial outcomes are kept for downstream charting.
pub const SAMPLE_LIMIT: usize = 200;

/// Trials per rayon task in [`simulate_parallel`]. Chunk boundaries (and
/// each chunk's RNG stream) are fixed by trial index, so the result does not
/// depend on how many worker threads execute them.
const TRIALS_PER_CHUNK: u32 = 1_000;

/// Statistics over all completed trials of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    /// Share of trials that depleted, in percent, rounded to 1 decimal place.
    pub depletion_probability_pct: f64,
    /// Truncating mean of all outcome values.
    pub mean_outcome: i64,
    pub min_outcome: i64,
    pub max_outcome: i64,
    /// The first `min(trials, 200)` outcomes in trial order.
    pub sample_outcomes: Vec<i64>,
}

impl SimulationSummary {
    /// The flat row consumed by the transport layer:
    /// `[odds, mean, min, max, outcome_1, ..]`. Order and field count are a
    /// compatibility contract.
    pub fn wire_row(&self) -> Vec<Value> {
        let mut row = Vec::with_capacity(4 + self.sample_outcomes.len());
        row.push(json!(self.depletion_probability_pct));
        row.push(json!(self.mean_outcome));
        row.push(json!(self.min_outcome));
        row.push(json!(self.max_outcome));
        row.extend(self.sample_outcomes.iter().map(|&v| json!(v)));
        row
    }
}

/// Running reduction over trial outcomes. The merge is commutative in the
/// counters; only the bounded sample depends on trial order, which the
/// parallel driver preserves by merging chunks in index order.
#[derive(Debug)]
struct TrialTally {
    trials: u32,
    depleted: u32,
    sum: i128,
    min: i64,
    max: i64,
    sample: Vec<i64>,
}

impl TrialTally {
    fn new() -> Self {
        TrialTally {
            trials: 0,
            depleted: 0,
            sum: 0,
            min: i64::MAX,
            max: i64::MIN,
            sample: Vec::new(),
        }
    }

    fn record(&mut self, outcome: ScenarioOutcome) {
        let value = outcome.value();
        self.trials += 1;
        if value == 0 {
            self.depleted += 1;
        }
        self.sum += value as i128;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        if self.sample.len() < SAMPLE_LIMIT {
            self.sample.push(value);
        }
    }

    fn merge(&mut self, other: TrialTally) {
        self.trials += other.trials;
        self.depleted += other.depleted;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        let take = SAMPLE_LIMIT - self.sample.len();
        self.sample.extend(other.sample.into_iter().take(take));
    }

    fn into_summary(self) -> SimulationSummary {
        let pct = 100.0 * self.depleted as f64 / self.trials as f64;
        SimulationSummary {
            depletion_probability_pct: (pct * 10.0).round() / 10.0,
            mean_outcome: (self.sum / self.trials as i128) as i64,
            min_outcome: self.min,
            max_outcome: self.max,
            sample_outcomes: self.sample,
        }
    }
}

fn validate(
    request: &SimulationRequest,
    trials: u32,
) -> Result<DurationBounds, SimError> {
    if trials == 0 {
        return Err(SimError::InvalidTrialCount);
    }
    DurationBounds::new(request.min_years, request.mode_years, request.max_years)
}

/// Run `trials` independent scenarios on the caller's RNG stream.
///
/// Component failures (duration bounds, trial count) surface before any
/// trial consumes entropy.
pub fn simulate(
    request: &SimulationRequest,
    store: &HistoricalSeriesStore,
    trials: u32,
    rng: &mut impl Rng,
) -> Result<SimulationSummary, SimError> {
    let bounds = validate(request, trials)?;
    let returns = store.returns(request.asset_class);
    let inflation = store.inflation();

    let mut tally = TrialTally::new();
    for _ in 0..trials {
        tally.record(scenario::run(request, &bounds, returns, inflation, rng));
    }
    Ok(tally.into_summary())
}

/// Fan-out/fan-in variant: fixed-size trial chunks run on the rayon pool,
/// each with its own ChaCha stream seeded from `seed` plus the chunk index,
/// then the partial tallies merge in chunk order. Identical `(request,
/// seed, trials)` always produces an identical summary, regardless of
/// thread count.
pub fn simulate_parallel(
    request: &SimulationRequest,
    store: &HistoricalSeriesStore,
    trials: u32,
    seed: u64,
) -> Result<SimulationSummary, SimError> {
    let bounds = validate(request, trials)?;
    let returns = store.returns(request.asset_class);
    let inflation = store.inflation();

    let chunks = trials.div_ceil(TRIALS_PER_CHUNK);
    let tallies: Vec<TrialTally> = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let chunk_trials =
                TRIALS_PER_CHUNK.min(trials - chunk * TRIALS_PER_CHUNK);
            let mut rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(chunk as u64));
            let mut tally = TrialTally::new();
            for _ in 0..chunk_trials {
                tally.record(scenario::run(request, &bounds, returns, inflation, &mut rng));
            }
            tally
        })
        .collect();

    let mut merged = TrialTally::new();
    for tally in tallies {
        merged.merge(tally);
    }
    Ok(merged.into_summary())
}
