//! Test doubles for the capability traits.

use crate::{
    animation::CueQueue,
    chart::{Dataset, SeriesRenderer},
    state::SurfaceState,
    widget::Ports,
};

/// Keeps the last dataset and counts redraws.
#[derive(Debug, Default)]
pub struct RecordingChart {
    pub current: Option<Dataset>,
    pub redraws: usize,
}

impl RecordingChart {
    pub fn values(&self) -> &[f64] {
        self.current.as_ref().map(|d| d.values.as_slice()).unwrap_or(&[])
    }

    pub fn labels(&self) -> Vec<&str> {
        self.current
            .as_ref()
            .map(|d| d.labels.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl SeriesRenderer for RecordingChart {
    fn replace(&mut self, dataset: Dataset) {
        self.current = Some(dataset);
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }
}

/// A surface, a chart, and a cue queue wired together for one simulator.
#[derive(Debug, Default)]
pub struct Harness {
    pub surface: SurfaceState,
    pub chart:   RecordingChart,
    pub cues:    CueQueue,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ports(&mut self) -> Ports<'_> {
        Ports::new(&mut self.surface, &mut self.chart, &mut self.cues)
    }

    /// Fire every pending timer now.
    pub fn fast_forward(&mut self) {
        self.cues.fast_forward(&mut self.surface);
    }
}
