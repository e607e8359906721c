use crate::source::{RandomSource, Sample};

/// Append-only log of one widget's outcomes, oldest first.
///
/// Only [`History::clear`] ever shrinks it.
#[derive(Debug, Clone)]
pub struct History<T> {
    outcomes: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self { outcomes: Vec::new() }
    }
}

impl<T: Copy> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, outcome: T) {
        self.outcomes.push(outcome);
    }

    /// Draw `n` fresh outcomes from `source` and append them in order.
    pub fn append_batch(&mut self, n: usize, source: &mut (impl RandomSource + ?Sized))
    where
        T: Sample,
    {
        self.outcomes.reserve(n);
        for _ in 0..n {
            self.outcomes.push(T::sample(source));
        }
    }

    pub fn clear(&mut self) {
        self.outcomes.clear();
    }

    pub fn all(&self) -> &[T] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn last(&self) -> Option<T> {
        self.outcomes.last().copied()
    }

    /// The most recent `n` outcomes in their original order.
    pub fn window(&self, n: usize) -> &[T] {
        let start = self.outcomes.len().saturating_sub(n);
        &self.outcomes[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{DiceOutcome, Outcome, SpinnerOutcome};
    use crate::source::FixedSource;

    #[test]
    fn append_batch_matches_sequential_appends() {
        let mut batched = History::<DiceOutcome>::new();
        batched.append_batch(4, &mut FixedSource::faces(&[3, 1, 4, 1]));

        let mut src = FixedSource::faces(&[3, 1, 4, 1]);
        let mut sequential = History::new();
        for _ in 0..4 {
            sequential.append(src.sample_die());
        }

        assert_eq!(batched.all(), sequential.all());
    }

    #[test]
    fn clear_empties() {
        let mut h = History::<DiceOutcome>::new();
        h.append_batch(100, &mut FixedSource::constant(2.0));
        assert_eq!(h.len(), 100);
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.last(), None);
    }

    #[test]
    fn window_keeps_tail_in_order() {
        let mut h = History::<SpinnerOutcome>::new();
        let values: Vec<f64> = (0..10).map(|i| f64::from(i) / 10.0).collect();
        h.append_batch(10, &mut FixedSource::new(values));

        let tail: Vec<f64> = h.window(3).iter().map(|o| o.value()).collect();
        assert_eq!(tail, [0.7, 0.8, 0.9]);
        assert_eq!(h.window(50).len(), 10);
        assert!(h.window(0).is_empty());
    }
}
