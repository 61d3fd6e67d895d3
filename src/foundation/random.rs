//! Injectable random sources.
//!
//! Recipe generation never touches a global random number generator. Callers hand in a
//! [`RandomSource`]: [`EntropyRandom`] for fresh output on every render, [`SplitMix64`] for
//! reproducible output, and [`SequenceRandom`] to script exact draws in tests.

use rand::Rng as _;

/// A stream of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[min, max)`.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// `floor` of [`RandomSource::range`]; `max` is exclusive.
    fn range_int(&mut self, min: i64, max: i64) -> i64 {
        self.range(min as f64, max as f64).floor() as i64
    }

    /// Count in `[min, max)`, for loop bounds.
    fn count(&mut self, min: usize, max: usize) -> usize {
        self.range_int(min as i64, max as i64).max(0) as usize
    }

    /// Uniform index into a collection of `len` items; `len` must be > 0.
    fn index(&mut self, len: usize) -> usize {
        let i = (self.next_f64() * len as f64).floor() as usize;
        i.min(len.saturating_sub(1))
    }

    /// Fair coin: `true` when the draw is above one half.
    fn coin(&mut self) -> bool {
        self.next_f64() > 0.5
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Unseeded, OS-entropy backed source. Two renders never match.
pub struct EntropyRandom {
    rng: rand::rngs::ThreadRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Seeded SplitMix64 generator: identical seeds yield identical draws on every platform.
#[derive(Clone, Copy, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for SplitMix64 {
    fn next_f64(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// Values are clamped into `[0, 1)`; an empty list always yields `0.0`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
