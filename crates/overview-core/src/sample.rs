// File: crates/overview-core/src/sample.rs
// Summary: Deterministic linear-congruential sample generator for demo/test data.
// Notes:
// - The generator is an explicit value; nothing here reads a process-wide seed.
// - `with_thread_rng` offers a clock-seeded generator per thread for callers that
//   just want "some numbers" without threading a `SampleRng` around.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MULTIPLIER: u64 = 9301;
pub const INCREMENT: u64 = 49297;
pub const MODULUS: u64 = 233_280;

/// Linear congruential generator: `seed = (seed * 9301 + 49297) mod 233280`.
///
/// Not cryptographically random. Two generators with the same seed produce the
/// same sequence; `seed()`/`set_seed()` snapshot and restore a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleRng {
    seed: u64,
}

impl SampleRng {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the wall clock (Unix milliseconds).
    pub fn from_clock() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self::new(u64::try_from(millis).unwrap_or_default())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Advance once and return the new state scaled into `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        // Reducing first keeps the product in range for clock-sized seeds;
        // the result is congruent to the unreduced formula.
        self.seed = ((self.seed % MODULUS) * MULTIPLIER + INCREMENT) % MODULUS;
        self.seed as f64 / MODULUS as f64
    }

    /// Uniform-ish draw in `[min, max)`.
    pub fn rand(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }

    /// `rand(0, 0)`: always `0.0`, but still advances the state.
    pub fn rand_default(&mut self) -> f64 {
        self.rand(0.0, 0.0)
    }
}

impl Iterator for SampleRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_unit())
    }
}

/// How `numbers` decides whether a sample is emitted or left as a gap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContinuityGate {
    /// Draws `rand_default()` (always 0) and emits iff `0 <= continuity`.
    /// Any non-negative continuity therefore never produces a gap.
    #[default]
    Literal,
    /// Draws `rand(0, 1)` and emits iff the draw is `<= continuity`.
    Uniform,
}

/// Parameters for `numbers`. Missing JSON fields take the defaults
/// `{min: 0, max: 100, from: [], count: 8, decimals: 8, continuity: 1}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub min: f64,
    pub max: f64,
    /// Baseline added to each draw; missing or `None` entries count as 0.
    pub from: Vec<Option<f64>>,
    pub count: usize,
    pub decimals: i32,
    pub continuity: f64,
    pub gate: ContinuityGate,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            from: Vec::new(),
            count: 8,
            decimals: 8,
            continuity: 1.0,
            gate: ContinuityGate::Literal,
        }
    }
}

impl SampleConfig {
    /// Continue from a previous series, e.g. an earlier `numbers` result.
    pub fn continuing_from(mut self, from: impl IntoIterator<Item = Option<f64>>) -> Self {
        self.from = from.into_iter().collect();
        self
    }

    /// `10^decimals`, rejected when it is not a usable divisor.
    pub fn rounding_factor(&self) -> Result<f64, ConfigError> {
        let dfactor = 10f64.powi(self.decimals);
        if !dfactor.is_finite() || dfactor == 0.0 {
            return Err(ConfigError::NonFiniteScale { decimals: self.decimals });
        }
        Ok(dfactor)
    }

    pub fn validate(&self) -> Result<f64, ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFiniteBounds { min: self.min, max: self.max });
        }
        self.rounding_factor()
    }

    fn baseline(&self, i: usize) -> f64 {
        self.from
            .get(i)
            .copied()
            .flatten()
            .filter(|v| !v.is_nan())
            .unwrap_or(0.0)
    }
}

/// Generate `config.count` samples, each `from[i] + rand(min, max)` rounded to
/// `decimals`, or `None` when the continuity gate rejects it.
///
/// Every sample consumes exactly two draws from `rng`: the value, then the gate.
pub fn numbers(rng: &mut SampleRng, config: &SampleConfig) -> Result<Vec<Option<f64>>, ConfigError> {
    let dfactor = config.validate()?;
    let mut data = Vec::with_capacity(config.count);

    for i in 0..config.count {
        let value = config.baseline(i) + rng.rand(config.min, config.max);
        let gate_draw = match config.gate {
            ContinuityGate::Literal => rng.rand_default(),
            ContinuityGate::Uniform => rng.rand(0.0, 1.0),
        };
        if gate_draw <= config.continuity {
            data.push(Some(round_half_up(dfactor * value) / dfactor));
        } else {
            data.push(None);
        }
    }
    Ok(data)
}

/// Round to nearest integer with ties toward positive infinity (-2.5 -> -2).
fn round_half_up(x: f64) -> f64 {
    // `x - floor(x)` is exact for every finite x.
    let f = x.floor();
    if x - f >= 0.5 { f + 1.0 } else { f }
}

thread_local! {
    static THREAD_RNG: RefCell<SampleRng> = RefCell::new(SampleRng::from_clock());
}

/// Run `f` with this thread's clock-seeded generator.
pub fn with_thread_rng<R>(f: impl FnOnce(&mut SampleRng) -> R) -> R {
    THREAD_RNG.with(|rng| f(&mut rng.borrow_mut()))
}

/// `rand(min, max)` on the thread-local generator.
pub fn rand(min: f64, max: f64) -> f64 {
    with_thread_rng(|rng| rng.rand(min, max))
}

/// `numbers` on the thread-local generator.
pub fn numbers_default(config: &SampleConfig) -> Result<Vec<Option<f64>>, ConfigError> {
    with_thread_rng(|rng| numbers(rng, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_draw_from_zero_seed() {
        let mut rng = SampleRng::new(0);
        assert_eq!(rng.next_unit(), 49_297.0 / 233_280.0);
        assert_eq!(rng.seed(), 49_297);
    }

    #[test]
    fn large_seed_matches_unreduced_formula() {
        let seed = 1_700_000_000_000u64;
        let mut rng = SampleRng::new(seed);
        rng.next_unit();
        let expected = ((seed as u128 * MULTIPLIER as u128 + INCREMENT as u128) % MODULUS as u128) as u64;
        assert_eq!(rng.seed(), expected);
    }

    #[test]
    fn round_half_up_ties() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(4_503_599_627_370_497.0), 4_503_599_627_370_497.0);
    }

    #[test]
    fn thread_rng_stays_on_its_thread() {
        with_thread_rng(|rng| rng.set_seed(7));
        let handle = std::thread::spawn(|| with_thread_rng(|rng| rng.seed()));
        let other = handle.join().unwrap();
        assert_eq!(with_thread_rng(|rng| rng.seed()), 7);
        assert_ne!(other, 7);
    }
}
