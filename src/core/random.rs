//! Randomized break delays.
//!
//! Delays between breathing breaks are drawn uniformly from a configured
//! window. The generator is seedable so scenario tests can pin the exact
//! delay sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default lower bound of the break delay window, in seconds.
pub const DEFAULT_MIN_DELAY_SECS: u64 = 180;
/// Default upper bound of the break delay window, in seconds.
pub const DEFAULT_MAX_DELAY_SECS: u64 = 300;

/// Uniform sampler for break delays.
#[derive(Debug)]
pub struct BreakDelays {
    rng: StdRng,
    min_secs: u64,
    max_secs: u64,
}

impl BreakDelays {
    /// Create a sampler over `[min_secs, max_secs]` seeded from the OS.
    ///
    /// The bounds are swapped if given in the wrong order.
    #[must_use]
    pub fn new(min_secs: u64, max_secs: u64) -> Self {
        Self::with_rng(StdRng::from_entropy(), min_secs, max_secs)
    }

    /// Create a deterministic sampler from a seed.
    #[must_use]
    pub fn seeded(seed: u64, min_secs: u64, max_secs: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), min_secs, max_secs)
    }

    fn with_rng(rng: StdRng, min_secs: u64, max_secs: u64) -> Self {
        let (min_secs, max_secs) = if min_secs <= max_secs {
            (min_secs, max_secs)
        } else {
            (max_secs, min_secs)
        };

        Self {
            rng,
            min_secs,
            max_secs,
        }
    }

    /// Draw the delay until the next break, in seconds.
    pub fn next_delay(&mut self) -> u64 {
        self.rng.gen_range(self.min_secs..=self.max_secs)
    }

    /// The configured delay window.
    #[must_use]
    pub const fn window(&self) -> (u64, u64) {
        (self.min_secs, self.max_secs)
    }
}

impl Default for BreakDelays {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY_SECS, DEFAULT_MAX_DELAY_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_stay_within_window() {
        let mut delays = BreakDelays::seeded(7, 180, 300);
        for _ in 0..1000 {
            let d = delays.next_delay();
            assert!((180..=300).contains(&d), "delay {d} out of window");
        }
    }

    #[test]
    fn test_degenerate_window_is_exact() {
        let mut delays = BreakDelays::seeded(0, 200, 200);
        for _ in 0..10 {
            assert_eq!(delays.next_delay(), 200);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = BreakDelays::seeded(42, 180, 300);
        let mut b = BreakDelays::seeded(42, 180, 300);

        for _ in 0..20 {
            assert_eq!(a.next_delay(), b.next_delay());
        }
    }

    #[test]
    fn test_swapped_bounds_are_normalized() {
        let delays = BreakDelays::seeded(1, 300, 180);
        assert_eq!(delays.window(), (180, 300));
    }
}
