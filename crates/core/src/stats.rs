//! Aggregate views derived from a [`History`](crate::history::History).
//!
//! Nothing here is cached: every view is rebuilt from the history slice it
//! is handed, so it can never drift out of sync with the log.

use crate::outcome::{DiceOutcome, Outcome, SpinnerOutcome};

/// Shown wherever a mean is undefined (empty history).
pub const PLACEHOLDER: &str = "-";

/// Count and arithmetic mean of a run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    /// `0.0` when `count == 0`; check the count before displaying it.
    pub mean:  f64,
}

impl Summary {
    pub fn of<T: Outcome>(outcomes: &[T]) -> Self {
        let count = outcomes.len();
        if count == 0 {
            return Self::default();
        }
        let sum: f64 = outcomes.iter().map(|o| o.value()).sum();
        Self { count, mean: sum / count as f64 }
    }

    /// Mean rounded to `decimals` places, or [`PLACEHOLDER`] for an empty run.
    pub fn format_mean(&self, decimals: usize) -> String {
        if self.count == 0 {
            return PLACEHOLDER.to_string();
        }
        format!("{:.*}", decimals, self.mean)
    }
}

/// Per-face frequency table plus summary for a dice run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiceAggregate {
    /// `frequencies[i]` counts outcomes equal to `i + 1`.
    pub frequencies: [usize; 6],
    pub summary:     Summary,
}

impl DiceAggregate {
    /// Builds the table and the sum in a single pass.
    pub fn of(outcomes: &[DiceOutcome]) -> Self {
        let mut frequencies = [0usize; 6];
        let mut sum = 0u64;
        for outcome in outcomes {
            frequencies[outcome.bucket()] += 1;
            sum += u64::from(outcome.face());
        }

        let count = outcomes.len();
        let mean = if count == 0 { 0.0 } else { sum as f64 / count as f64 };

        Self { frequencies, summary: Summary { count, mean } }
    }

    pub fn total(&self) -> usize {
        self.frequencies.iter().sum()
    }
}

/// Summary over the whole run plus the tail shown on the chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpinnerAggregate {
    pub summary: Summary,
    /// Last `window` values, oldest first.
    pub recent:  Vec<f64>,
}

impl SpinnerAggregate {
    /// `recent` is the chart window, typically [`History::window`].
    ///
    /// [`History::window`]: crate::history::History::window
    pub fn of(outcomes: &[SpinnerOutcome], recent: &[SpinnerOutcome]) -> Self {
        Self {
            summary: Summary::of(outcomes),
            recent:  recent.iter().map(|o| o.value()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(faces: &[u8]) -> Vec<DiceOutcome> {
        faces.iter().filter_map(|&f| DiceOutcome::new(f)).collect()
    }

    #[test]
    fn empty_summary_uses_placeholder() {
        let s = Summary::of::<DiceOutcome>(&[]);
        assert_eq!(s.count, 0);
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.format_mean(2), PLACEHOLDER);
    }

    #[test]
    fn single_sample_mean_is_that_sample() {
        let v = SpinnerOutcome::new(0.375).unwrap();
        let s = Summary::of(&[v]);
        assert_eq!(s.mean, 0.375);
        assert_eq!(s.format_mean(3), "0.375");
    }

    #[test]
    fn dice_table_for_known_rolls() {
        let agg = DiceAggregate::of(&faces(&[2, 2, 5]));
        assert_eq!(agg.frequencies, [0, 2, 0, 0, 1, 0]);
        assert_eq!(agg.summary.count, 3);
        assert_eq!(agg.summary.format_mean(2), "3.00");
    }

    #[test]
    fn dice_table_sums_to_count() {
        let rolls = faces(&[1, 6, 6, 3, 4, 2, 5, 5, 1, 6, 2]);
        let agg = DiceAggregate::of(&rolls);
        assert_eq!(agg.total(), rolls.len());
        assert_eq!(agg.summary, Summary::of(&rolls));
    }

    #[test]
    fn spinner_window_is_tail_but_summary_is_whole_run() {
        let run: Vec<SpinnerOutcome> = (0..60)
            .map(|i| SpinnerOutcome::clamped(f64::from(i) / 100.0))
            .collect();
        let agg = SpinnerAggregate::of(&run, &run[10..]);

        assert_eq!(agg.summary.count, 60);
        assert_eq!(agg.recent.len(), 50);
        assert_eq!(agg.recent.first().copied(), Some(0.10));
        assert_eq!(agg.recent.last().copied(), Some(0.59));
        assert!((agg.summary.mean - 0.295).abs() < 1e-12);
    }
}
