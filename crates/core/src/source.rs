//! Random sample sources.
//!
//! Controllers only ever see [`RandomSource`], so tests can script outcomes
//! with [`FixedSource`] while the application uses [`ThreadRngSource`].

use crate::outcome::{DiceOutcome, Outcome, SpinnerOutcome};
use rand::Rng;

/// Uniform, independent outcome generator.
///
/// Implementations keep whatever internal state they need; nothing about
/// that state is exposed or seeded from outside.
pub trait RandomSource: std::fmt::Debug {
    /// A fair die face in `1..=6`.
    fn sample_die(&mut self) -> DiceOutcome;

    /// A uniform real in `[0, 1)`.
    fn sample_spinner(&mut self) -> SpinnerOutcome;
}

/// An outcome type that knows which [`RandomSource`] method produces it.
pub trait Sample: Outcome {
    fn sample(source: &mut (impl RandomSource + ?Sized)) -> Self;
}

impl Sample for DiceOutcome {
    fn sample(source: &mut (impl RandomSource + ?Sized)) -> Self {
        source.sample_die()
    }
}

impl Sample for SpinnerOutcome {
    fn sample(source: &mut (impl RandomSource + ?Sized)) -> Self {
        source.sample_spinner()
    }
}

/// Production source backed by `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn sample_die(&mut self) -> DiceOutcome {
        DiceOutcome::clamped(rand::thread_rng().gen_range(1..=6))
    }

    fn sample_spinner(&mut self) -> SpinnerOutcome {
        SpinnerOutcome::clamped(rand::thread_rng().gen::<f64>())
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// The same sequence feeds both outcome kinds: dice draws round and clamp
/// the value into `1..=6`, spinner draws clamp it into `[0, 1)`.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<f64>,
    index:  usize,
}

impl FixedSource {
    /// An empty `values` behaves like `constant(0.0)`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, index: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Convenience for scripting dice faces.
    pub fn faces(faces: &[u8]) -> Self {
        Self::new(faces.iter().map(|&f| f64::from(f)).collect::<Vec<_>>())
    }

    fn next(&mut self) -> f64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

impl RandomSource for FixedSource {
    fn sample_die(&mut self) -> DiceOutcome {
        DiceOutcome::clamped(self.next().round() as i64)
    }

    fn sample_spinner(&mut self) -> SpinnerOutcome {
        SpinnerOutcome::clamped(self.next())
    }
}
