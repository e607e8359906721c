use crate::{axes, chart_state::ChartState, plot::{spline_controls, Scale}};
use iced::widget::canvas::{self, path::Builder, Path, Stroke};
use iced::{mouse, Point, Rectangle, Renderer};
use randvar_core::chart::SeriesStyle;
use randvar_theme::{Color, Theme};

/// Canvas program drawing a smoothed time series from a [`ChartState`].
#[derive(Debug)]
pub struct LineChart<'a> {
    chart: &'a ChartState,
    theme: &'a Theme,
}

impl<'a> LineChart<'a> {
    pub fn new(chart: &'a ChartState, theme: &'a Theme) -> Self {
        Self { chart, theme }
    }
}

/// Append the (possibly smoothed) polyline through `points` to `b`.
fn trace(b: &mut Builder, points: &[(f32, f32)], tension: f32) {
    let Some(&(x0, y0)) = points.first() else {
        return;
    };
    b.move_to(Point::new(x0, y0));

    if tension <= 0.0 {
        for &(x, y) in &points[1..] {
            b.line_to(Point::new(x, y));
        }
        return;
    }

    for (seg, (c1, c2)) in spline_controls(points, tension).into_iter().enumerate() {
        let (x, y) = points[seg + 1];
        b.bezier_curve_to(Point::new(c1.0, c1.1), Point::new(c2.0, c2.1), Point::new(x, y));
    }
}

impl<Message> canvas::Program<Message> for LineChart<'_> {
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

            if data.is_empty() {
                axes::draw_empty(frame, area, self.theme);
                return;
            }

            let (stroke, fill, tension, point_radius) = match &data.style {
                SeriesStyle::Line { stroke, fill, tension, point_radius } => (
                    Color::from(*stroke),
                    fill.map(Color::from),
                    *tension,
                    *point_radius,
                ),
                SeriesStyle::Bars { .. } => (self.theme.secondary, None, 0.0, 0.0),
            };

            // One slot per point; a lone point sits in the middle.
            let n = data.values.len();
            let x_at = |i: usize| {
                if n == 1 {
                    area.x + area.width / 2.0
                } else {
                    area.x + area.width * i as f32 / (n - 1) as f32
                }
            };
            let points: Vec<(f32, f32)> = data
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| (x_at(i), area.y + area.height * (1.0 - scale.unit(v) as f32)))
                .collect();

            if let Some(fill) = fill {
                let baseline = area.y + area.height;
                let area_path = Path::new(|b| {
                    trace(b, &points, tension);
                    if let (Some(&(last_x, _)), Some(&(first_x, _))) = (points.last(), points.first()) {
                        b.line_to(Point::new(last_x, baseline));
                        b.line_to(Point::new(first_x, baseline));
                    }
                    b.close();
                });
                frame.fill(&area_path, fill.to_iced());
            }

            let line = Path::new(|b| trace(b, &points, tension));
            frame.stroke(&line, Stroke::default().with_color(stroke.to_iced()).with_width(2.0));

            if point_radius > 0.0 {
                for &(x, y) in &points {
                    frame.fill(&Path::circle(Point::new(x, y), point_radius), stroke.to_iced());
                }
            }

            let centres: Vec<f32> = (0..n).map(x_at).collect();
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
