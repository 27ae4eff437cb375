//! Random source injection
//!
//! Every resolution function takes an explicit random source instead of
//! reaching for ambient global randomness, so a fixed draw sequence
//! reproduces a byte-identical result. Production code wraps any
//! `rand::Rng` in [`RngSource`]; tests replay literal draw sequences
//! through [`ScriptedSource`].

use rand::Rng;

/// The randomness the engine consumes: unit draws, integer ranges and
/// symmetric variance rolls.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform integer draw in `[lo, hi]`
    fn range_inclusive(&mut self, lo: i64, hi: i64) -> i64;

    /// Uniform draw in `[-spread, +spread]`; zero spread draws nothing
    fn symmetric(&mut self, spread: f64) -> f64;
}

/// Adapts any `rand::Rng` into a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn range_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        if lo >= hi {
            return hi;
        }
        self.0.gen_range(lo..=hi)
    }

    fn symmetric(&mut self, spread: f64) -> f64 {
        if spread <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-spread..=spread)
    }
}

/// Replays a fixed sequence of unit draws
///
/// Range and symmetric draws consume one unit draw each and map it onto
/// the requested interval, so a scripted scenario can state every roll
/// as a literal in `[0, 1)`. Panics when the script runs dry; scenarios
/// are expected to provide exactly the draws they consume.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that yields `draws` in order
    pub fn new(draws: Vec<f64>) -> Self {
        ScriptedSource { draws, cursor: 0 }
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Number of draws left in the script
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.cursor
    }

    fn next_draw(&mut self) -> f64 {
        let value = *self
            .draws
            .get(self.cursor)
            .unwrap_or_else(|| panic!("scripted source exhausted after {} draws", self.cursor));
        self.cursor += 1;
        value
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        self.next_draw()
    }

    fn range_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        if lo >= hi {
            return hi;
        }
        let r = self.next_draw();
        let span = (hi - lo + 1) as f64;
        lo + ((r * span) as i64).min(hi - lo)
    }

    fn symmetric(&mut self, spread: f64) -> f64 {
        if spread <= 0.0 {
            return 0.0;
        }
        let r = self.next_draw();
        -spread + r * 2.0 * spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_source_unit_range() {
        let mut rng = RngSource(StdRng::seed_from_u64(42));
        for _ in 0..100 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_rng_source_bounds() {
        let mut rng = RngSource(StdRng::seed_from_u64(42));
        for _ in 0..100 {
            let v = rng.range_inclusive(40, 60);
            assert!((40..=60).contains(&v));
            let s = rng.symmetric(0.1);
            assert!((-0.1..=0.1).contains(&s));
        }
        // Degenerate spans never draw outside the bound
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert!((rng.symmetric(0.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scripted_replay() {
        let mut src = ScriptedSource::new(vec![0.1, 0.9, 0.5]);
        assert!((src.unit() - 0.1).abs() < f64::EPSILON);
        assert!((src.unit() - 0.9).abs() < f64::EPSILON);
        // 0.5 over [0, 9] lands on 5
        assert_eq!(src.range_inclusive(0, 9), 5);
        assert_eq!(src.consumed(), 3);
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn test_scripted_symmetric() {
        let mut src = ScriptedSource::new(vec![0.0, 1.0, 0.5]);
        assert!((src.symmetric(0.2) + 0.2).abs() < f64::EPSILON);
        assert!((src.symmetric(0.2) - 0.2).abs() < f64::EPSILON);
        assert!((src.symmetric(0.2) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "scripted source exhausted")]
    fn test_scripted_exhaustion_panics() {
        let mut src = ScriptedSource::new(vec![0.1]);
        src.unit();
        src.unit();
    }

    #[test]
    fn test_determinism_same_seed() {
        let mut a = RngSource(StdRng::seed_from_u64(7));
        let mut b = RngSource(StdRng::seed_from_u64(7));
        for _ in 0..20 {
            assert!((a.unit() - b.unit()).abs() < f64::EPSILON);
        }
    }
}
