use crate::{axes, chart_state::ChartState, plot::Scale};
use iced::widget::canvas::{self, Path, Stroke};
use iced::{mouse, Point, Rectangle, Renderer, Size};
use randvar_core::chart::SeriesStyle;
use randvar_theme::{Color, Theme};

/// Fraction of each category slot taken by its bar.
const BAR_FILL: f32 = 0.7;

/// Canvas program drawing a categorical bar chart from a [`ChartState`].
#[derive(Debug)]
pub struct BarChart<'a> {
    chart: &'a ChartState,
    theme: &'a Theme,
}

impl<'a> BarChart<'a> {
    pub fn new(chart: &'a ChartState, theme: &'a Theme) -> Self {
        Self { chart, theme }
    }
}

impl<Message> canvas::Program<Message> for BarChart<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.chart.cache.draw(renderer, bounds.size(), |frame| {
            let Some(data) = self.chart.dataset() else {
                return;
            };

            let scale = Scale::fit(&data.y_axis, &data.values);
            let area = axes::draw_frame(
                frame,
                bounds.size(),
                &data.title,
                &scale,
                data.y_axis.integer_ticks,
                self.theme,
            );

            let slots = data.labels.len().max(data.values.len()).max(1);
            let slot = area.width / slots as f32;
            let centres: Vec<f32> =
                (0..slots).map(|i| area.x + slot * (i as f32 + 0.5)).collect();

            let (fills, borders, border_width) = match &data.style {
                SeriesStyle::Bars { fill, border, border_width } => {
                    (fill.as_slice(), border.as_slice(), *border_width)
                }
                SeriesStyle::Line { .. } => (&[][..], &[][..], 0.0),
            };

            for (i, &value) in data.values.iter().enumerate() {
                let h = area.height * scale.unit(value) as f32;
                if h <= 0.0 {
                    continue;
                }
                let w = slot * BAR_FILL;
                let top_left = Point::new(centres[i] - w / 2.0, area.y + area.height - h);

                let fill = fills
                    .get(i % fills.len().max(1))
                    .map_or(self.theme.accent.with_alpha(0.6), |&c| Color::from(c));
                frame.fill_rectangle(top_left, Size::new(w, h), fill.to_iced());

                if border_width > 0.0 {
                    let border = borders
                        .get(i % borders.len().max(1))
                        .map_or(self.theme.accent, |&c| Color::from(c));
                    frame.stroke(
                        &Path::rectangle(top_left, Size::new(w, h)),
                        Stroke::default().with_color(border.to_iced()).with_width(border_width),
                    );
                }
            }

            axes::draw_x_labels(
                frame,
                area,
                &data.labels,
                &centres,
                data.y_axis.max_labels,
                self.theme,
            );
        });

        vec![geometry]
    }
}
