//! Injectable randomness.
//!
//! Game logic never calls an ambient RNG; every random draw goes through a
//! [`RandomSource`] handed in by the caller, so tests can script the exact
//! sequence of draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Return an integer in `[min, max)`. Callers guarantee `min < max`.
    fn next_in(&mut self, min: i32, max: i32) -> i32;
}

/// Production source backed by a `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Same seed, same session.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..max)
    }
}

/// Replays a fixed script of raw draws, cycling when exhausted.
///
/// Each raw value `v` is reduced to `min + v % (max - min)`, so a script
/// entry always lands inside whatever range the caller asks for. A script of
/// `[0, 0, 1]` therefore yields the first gem kind, column 0 and row 2 when
/// fed to a pickup spawn (kind in `[0,3)`, column in `[0,5)`, row in `[1,6)`).
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    /// An empty script behaves like `[0]`.
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        let mut script = script.into();
        if script.is_empty() {
            script.push(0);
        }
        Self { script, cursor: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_in(&mut self, min: i32, max: i32) -> i32 {
        let raw = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        let span = (max - min).max(1) as u32;
        min + (raw % span) as i32
    }
}
