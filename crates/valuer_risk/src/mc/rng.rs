//! Per-trial random number sub-streams.
//!
//! Each trial gets its own [`TrialRng`], deterministically derived from
//! the run seed and the trial index. Because no generator state is
//! shared between trials, results are bit-identical for a given seed
//! regardless of how the trials are scheduled across worker threads.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// SplitMix64 finaliser, used to decorrelate per-trial seeds.
///
/// Consecutive trial indices would otherwise produce correlated seed
/// values; the finaliser's avalanche behaviour spreads them across the
/// full 64-bit space.
#[inline]
pub(crate) fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Seeded random number source for one Monte Carlo trial.
///
/// # Examples
///
/// ```rust
/// use valuer_risk::mc::TrialRng;
///
/// let mut a = TrialRng::for_trial(42, 7);
/// let mut b = TrialRng::for_trial(42, 7);
///
/// // Same (seed, trial) pair produces identical draws.
/// assert_eq!(a.standard_normal(), b.standard_normal());
/// ```
pub struct TrialRng {
    inner: StdRng,
}

impl TrialRng {
    /// Derives the sub-stream for `trial_index` under `run_seed`.
    ///
    /// The derivation mixes the run seed and trial index through
    /// [`splitmix64`] so that neighbouring trials receive unrelated
    /// generator states.
    #[inline]
    pub fn for_trial(run_seed: u64, trial_index: u64) -> Self {
        let mixed = splitmix64(run_seed ^ splitmix64(trial_index.wrapping_add(1)));
        Self {
            inner: StdRng::seed_from_u64(mixed),
        }
    }

    /// Draws a single standard normal variate (mean 0, std 1).
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }
}
