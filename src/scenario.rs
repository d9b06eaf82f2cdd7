use rand::Rng;

use crate::duration::DurationBounds;
use crate::types::SimulationRequest;

/// Terminal state of one retirement trajectory. Produced once per trial,
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioOutcome {
    /// The balance hit zero (or below) before the drawn duration ended.
    Depleted,
    /// The full duration elapsed with this balance left.
    Survived(i64),
}

impl ScenarioOutcome {
    /// Outcome as recorded by the aggregator: depletion is the sentinel `0`.
    pub fn value(self) -> i64 {
        match self {
            ScenarioOutcome::Depleted => 0,
            ScenarioOutcome::Survived(balance) => balance,
        }
    }
}

/// Run one retirement trajectory.
///
/// Picks a uniform random starting point in history, draws a duration from
/// `bounds`, then advances year by year. Simulated year `i` reads
/// `returns[i % returns.len()]` and `inflation[i % inflation.len()]`; the
/// two series may have different lengths, so their wrap points differ.
///
/// The withdrawal is the request's `annual_withdrawal` in year one and is
/// inflated by `(1 + inflation)` each later year. Every balance and
/// withdrawal update truncates toward zero; the truncation is part of the
/// integer-currency accounting contract and the cumulative rounding must not
/// be "fixed".
pub fn run(
    request: &SimulationRequest,
    bounds: &DurationBounds,
    returns: &[f64],
    inflation: &[f64],
    rng: &mut impl Rng,
) -> ScenarioOutcome {
    let start_year = rng.random_range(0..returns.len());
    let duration = bounds.sample(rng) as usize;

    let mut balance = request.starting_balance;
    let mut withdrawal = request.annual_withdrawal;

    for k in 0..duration {
        let year = start_year + k;
        let ret = returns[year % returns.len()];
        let infl = inflation[year % inflation.len()];

        if k > 0 {
            withdrawal = (withdrawal as f64 * (1.0 + infl)) as i64;
        }
        balance -= withdrawal;
        balance = (balance as f64 * (1.0 + ret)) as i64;

        // Remaining years are never simulated once the money is gone.
        if balance <= 0 {
            return ScenarioOutcome::Depleted;
        }
    }

    ScenarioOutcome::Survived(balance)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::types::AssetClass;

    fn request(balance: i64, withdrawal: i64, years: u32) -> SimulationRequest {
        SimulationRequest {
            asset_class: AssetClass::Sp500,
            starting_balance: balance,
            annual_withdrawal: withdrawal,
            min_years: years,
            mode_years: years,
            max_years: years,
        }
    }

    fn fixed_bounds(years: u32) -> DurationBounds {
        DurationBounds::new(years, years, years).unwrap()
    }

    // Length-one series pin the start index to 0 and a degenerate duration
    // pins the length, making the arithmetic fully deterministic.

    #[test]
    fn withdrawal_exceeding_balance_depletes_in_year_one() {
        let req = request(100_000, 1_000_000, 5);
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..100 {
            let outcome = run(&req, &fixed_bounds(5), &[0.05], &[0.02], &mut rng);
            assert_eq!(outcome, ScenarioOutcome::Depleted);
        }
    }

    #[test]
    fn zero_withdrawal_only_compounds() {
        // 10000 * 1.1 three times, truncating each year.
        let req = request(10_000, 0, 3);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let outcome = run(&req, &fixed_bounds(3), &[0.1], &[0.02], &mut rng);
        assert_eq!(outcome, ScenarioOutcome::Survived(13_310));
    }

    #[test]
    fn first_year_withdrawal_is_not_inflation_adjusted() {
        // Year 1: (10000 - 1000) * 1.0 = 9000. With one year there is no
        // inflation step at all, even at 100% inflation.
        let req = request(10_000, 1_000, 1);
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let outcome = run(&req, &fixed_bounds(1), &[0.0], &[1.0], &mut rng);
        assert_eq!(outcome, ScenarioOutcome::Survived(9_000));
    }

    #[test]
    fn later_withdrawals_compound_with_inflation_truncating() {
        // Flat returns, 3% inflation:
        //   year 1: w=1000, balance 9000
        //   year 2: w=int(1000*1.03)=1030, balance 7970
        //   year 3: w=int(1030*1.03)=int(1060.9)=1060, balance 6910
        let req = request(10_000, 1_000, 3);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let outcome = run(&req, &fixed_bounds(3), &[0.0], &[0.03], &mut rng);
        assert_eq!(outcome, ScenarioOutcome::Survived(6_910));
    }

    #[test]
    fn balance_growth_truncates_each_year() {
        // (999 - 0) * 1.5 = 1498.5 -> 1498.
        let req = request(999, 0, 1);
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let outcome = run(&req, &fixed_bounds(1), &[0.5], &[0.0], &mut rng);
        assert_eq!(outcome, ScenarioOutcome::Survived(1_498));
    }

    #[test]
    fn return_and_inflation_series_wrap_independently() {
        // A length-one return series pins the start index to 0 and wraps
        // every year, while the length-three inflation series wraps on its
        // own period:
        //   year 1: w=1000, b=9000
        //   year 2: infl=0.1 -> w=1100, b=7900
        //   year 3: infl=0.0 -> w=1100, b=6800
        //   year 4: infl=0.0 (wrapped to index 0) -> w=1100, b=5700
        //   year 5: infl=0.1 -> w=1210, b=4490
        let req = request(10_000, 1_000, 5);
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let outcome = run(&req, &fixed_bounds(5), &[0.0], &[0.0, 0.1, 0.0], &mut rng);
        assert_eq!(outcome, ScenarioOutcome::Survived(4_490));
    }

    #[test]
    fn exact_zero_balance_counts_as_depleted() {
        // (1000 - 1000) * anything = 0 -> depleted, not survived.
        let req = request(1_000, 1_000, 1);
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let outcome = run(&req, &fixed_bounds(1), &[0.5], &[0.0], &mut rng);
        assert_eq!(outcome, ScenarioOutcome::Depleted);
    }

    #[test]
    fn depletion_short_circuits_remaining_years() {
        // Year 1 wipes the balance; a later +1000% return year must never
        // resurrect it.
        let req = request(1_000, 2_000, 10);
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let outcome = run(&req, &fixed_bounds(10), &[0.0, 10.0], &[0.0], &mut rng);
        assert_eq!(outcome, ScenarioOutcome::Depleted);
    }

    #[test]
    fn outcome_value_uses_zero_sentinel_for_depletion() {
        assert_eq!(ScenarioOutcome::Depleted.value(), 0);
        assert_eq!(ScenarioOutcome::Survived(123).value(), 123);
    }
}
