//! Canvas drawing for the simulators and the page background.
//!
//! - [`ChartState`]: the chart sink simulators write datasets into
//! - [`BarChart`] / [`LineChart`]: canvas programs that draw a `ChartState`
//! - [`Dial`]: the rotating spinner face and pointer
//! - [`ParticleField`]: the animated particle background

mod axes;
pub mod bar_chart;
pub mod chart_state;
pub mod dial;
pub mod line_chart;
pub mod particles;
pub mod plot;

pub use bar_chart::BarChart;
pub use chart_state::ChartState;
pub use dial::Dial;
pub use line_chart::LineChart;
pub use particles::{Particle, ParticleField};
