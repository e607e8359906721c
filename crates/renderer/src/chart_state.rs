use iced::widget::canvas;
use randvar_core::chart::{Dataset, SeriesRenderer};

/// Chart sink owned by the window; the canvas programs read it when drawing.
///
/// `replace` only stages data. The cached geometry is thrown away on
/// `redraw`, which is what makes the new data visible.
pub struct ChartState {
    dataset: Option<Dataset>,
    pub(crate) cache: canvas::Cache,
}

impl Default for ChartState {
    fn default() -> Self {
        Self { dataset: None, cache: canvas::Cache::new() }
    }
}

impl std::fmt::Debug for ChartState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartState")
            .field("dataset", &self.dataset)
            .finish_non_exhaustive()
    }
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Discard cached geometry without new data, e.g. after a theme change.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }
}

impl SeriesRenderer for ChartState {
    fn replace(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
    }

    fn redraw(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randvar_core::chart::{Axis, SeriesStyle};

    #[test]
    fn replace_then_redraw() {
        let mut chart = ChartState::new();
        assert!(chart.dataset().is_none());

        chart.replace(Dataset {
            title:  "t".into(),
            series: "s".into(),
            labels: vec!["1".into()],
            values: vec![1.0],
            style:  SeriesStyle::Bars { fill: vec![], border: vec![], border_width: 0.0 },
            y_axis: Axis::default(),
        });
        chart.redraw();

        assert_eq!(chart.dataset().map(|d| d.values.len()), Some(1));
    }
}
