//! Dataset shapes handed to an external chart.
//!
//! The core only describes what to draw. Whatever implements
//! [`SeriesRenderer`] owns the drawing and is never queried back.

/// An `rgba(r, g, b, a)` style hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// How the series should be drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesStyle {
    Bars {
        /// One fill per bar; cycled if shorter than the data.
        fill:         Vec<Rgba>,
        border:       Vec<Rgba>,
        border_width: f32,
    },
    Line {
        stroke:       Rgba,
        /// Area under the curve, if filled.
        fill:         Option<Rgba>,
        /// Curve smoothing, `0.0` = straight segments.
        tension:      f32,
        point_radius: f32,
    },
}

/// Value-axis hints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min:           f64,
    /// `None` = fit to the data.
    pub max:           Option<f64>,
    /// `None` = let the renderer pick.
    pub step:          Option<f64>,
    pub integer_ticks: bool,
    /// Upper bound on how many category labels get drawn.
    pub max_labels:    Option<usize>,
}

impl Default for Axis {
    fn default() -> Self {
        Self { min: 0.0, max: None, step: None, integer_ticks: false, max_labels: None }
    }
}

/// Everything a chart needs for one redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub title:  String,
    /// Legend label for the series.
    pub series: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub style:  SeriesStyle,
    pub y_axis: Axis,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A chart that accepts whole-dataset replacement.
pub trait SeriesRenderer {
    /// Swap in new data; takes effect on the next [`SeriesRenderer::redraw`].
    fn replace(&mut self, dataset: Dataset);

    fn redraw(&mut self);
}
