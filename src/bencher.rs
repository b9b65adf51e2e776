use std::{
    fmt,
    time::{Duration, Instant},
};

use log::{debug, info, warn};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    algorithms::Algorithm,
    checks::is_sorted,
    error::BenchError,
    probe::OpCounter,
    sequence::{Floats, Sortable},
};

pub(crate) fn time_sort<S: Sortable + ?Sized>(alg: Algorithm, a: &mut S) -> Duration {
    let start = Instant::now();
    alg.sort(a);
    start.elapsed()
}

/// Sort `a` with `alg` and return the wall-clock time of the sort alone.
/// The result is verified afterwards.
pub fn measure_time<S: Sortable + ?Sized>(
    alg: Algorithm,
    a: &mut S,
) -> Result<Duration, BenchError> {
    let elapsed = time_sort(alg, a);
    if !is_sorted(a) {
        return Err(BenchError::NotSorted(alg));
    }
    Ok(elapsed)
}

fn check_counts(n: usize, trials: usize) -> Result<(), BenchError> {
    if n == 0 {
        return Err(BenchError::InvalidCount { what: "N", value: n });
    }
    if trials == 0 {
        return Err(BenchError::InvalidCount {
            what: "T",
            value: trials,
        });
    }
    Ok(())
}

/// Accumulated result of running one algorithm for a number of trials.
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub algorithm: Algorithm,
    pub n: usize,
    pub trials: usize,
    /// Sum over all timed trials. Warmups are excluded.
    pub elapsed: Duration,
    pub comparisons: Option<u64>,
    pub exchanges: Option<u64>,
}

impl Trial {
    pub fn mean(&self) -> Duration {
        if self.trials == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((self.elapsed.as_nanos() / self.trials as u128) as u64)
    }
}

/// Outcome of [`Bencher::compare`].
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub n: usize,
    pub first: Trial,
    pub second: Trial,
}

impl Comparison {
    /// Total time of the second algorithm over the first.
    pub fn ratio(&self) -> f64 {
        self.second.elapsed.as_secs_f64() / self.first.elapsed.as_secs_f64()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "For {} random floats", self.n)?;
        write!(
            f,
            "{} is faster than {} {:.3}",
            self.first.algorithm,
            self.second.algorithm,
            self.ratio()
        )
    }
}

/// Runs timed trials over freshly generated random floats.
pub struct Bencher {
    rng: SmallRng,
    warmup: usize,
    count_ops: bool,
}

impl Default for Bencher {
    fn default() -> Self {
        Self::new()
    }
}

impl Bencher {
    fn from_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            warmup: 0,
            count_ops: false,
        }
    }

    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    /// Run `warmup` untimed trials before the timed ones.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Count comparisons and exchanges. Adds the counting overhead to the timings.
    pub fn with_op_counts(mut self, count_ops: bool) -> Self {
        self.count_ops = count_ops;
        self
    }

    fn random_floats(&mut self, n: usize) -> Floats {
        (0..n).map(|_| self.rng.gen::<f64>()).collect()
    }

    fn run_trial(
        &mut self,
        alg: Algorithm,
        n: usize,
    ) -> Result<(Duration, Option<(u64, u64)>), BenchError> {
        let mut floats = self.random_floats(n);
        if !self.count_ops {
            return Ok((measure_time(alg, &mut floats)?, None));
        }
        let mut counted = OpCounter::new(floats);
        let elapsed = time_sort(alg, &mut counted);
        let counts = (counted.comparisons(), counted.exchanges());
        if !is_sorted(counted.inner()) {
            return Err(BenchError::NotSorted(alg));
        }
        Ok((elapsed, Some(counts)))
    }

    /// Time `trials` runs of `alg`, each over `n` new uniform floats in `[0, 1)`.
    pub fn measure_random_floats(
        &mut self,
        alg: Algorithm,
        n: usize,
        trials: usize,
    ) -> Result<Trial, BenchError> {
        check_counts(n, trials)?;
        for i in 0..self.warmup {
            let (elapsed, _) = self.run_trial(alg, n)?;
            debug!("{} warmup {} completed in {:?}", alg, i + 1, elapsed);
        }
        info!("{}: {} trials over {} random floats", alg, trials, n);
        let mut total = Duration::ZERO;
        let mut counts: Option<(u64, u64)> = None;
        for t in 0..trials {
            let (elapsed, trial_counts) = self.run_trial(alg, n)?;
            debug!("{} trial {} completed in {:?}", alg, t + 1, elapsed);
            total += elapsed;
            if let Some((c, e)) = trial_counts {
                let (sc, se) = counts.unwrap_or_default();
                counts = Some((sc + c, se + e));
            }
        }
        info!("{}: PASSED in {:?}", alg, total);
        Ok(Trial {
            algorithm: alg,
            n,
            trials,
            elapsed: total,
            comparisons: counts.map(|(c, _)| c),
            exchanges: counts.map(|(_, e)| e),
        })
    }

    /// Time `alg1` and then `alg2` under identical trial settings.
    pub fn compare(
        &mut self,
        alg1: Algorithm,
        alg2: Algorithm,
        n: usize,
        trials: usize,
    ) -> Result<Comparison, BenchError> {
        check_counts(n, trials)?;
        let first = self.measure_random_floats(alg1, n, trials)?;
        let second = self.measure_random_floats(alg2, n, trials)?;
        if first.elapsed.is_zero() {
            warn!("{} total time is zero, the ratio is not meaningful", alg1);
        }
        Ok(Comparison { n, first, second })
    }
}
