use crate::plot::{label_stride, Scale};
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Point, Rectangle, Size};
use randvar_theme::Theme;

const TITLE_BAND: f32 = 32.0;
const LEFT_GUTTER: f32 = 44.0;
const BOTTOM_GUTTER: f32 = 26.0;
const RIGHT_PAD: f32 = 12.0;

/// Rough glyph advance as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.56;

/// Width a label takes on screen, near enough to centre it.
pub(crate) fn text_width(content: &str, size: f32) -> f32 {
    content.chars().count() as f32 * size * GLYPH_WIDTH
}

/// Draw `content` centred on `center`.
pub(crate) fn centered_text(frame: &mut Frame, content: &str, center: Point, size: f32, color: iced::Color) {
    frame.fill_text(canvas::Text {
        content:  content.to_string(),
        position: Point::new(center.x - text_width(content, size) / 2.0, center.y - size / 2.0),
        color,
        size: size.into(),
        ..canvas::Text::default()
    });
}

/// Title band, gridlines and tick labels; returns the inner plotting area.
pub(crate) fn draw_frame(
    frame: &mut Frame,
    size: Size,
    title: &str,
    scale: &Scale,
    integer_ticks: bool,
    theme: &Theme,
) -> Rectangle {
    let title_size = theme.font_size * 1.05;
    centered_text(
        frame,
        title,
        Point::new(size.width / 2.0, TITLE_BAND / 2.0),
        title_size,
        theme.foreground.to_iced(),
    );

    let area = Rectangle {
        x:      LEFT_GUTTER,
        y:      TITLE_BAND,
        width:  (size.width - LEFT_GUTTER - RIGHT_PAD).max(1.0),
        height: (size.height - TITLE_BAND - BOTTOM_GUTTER).max(1.0),
    };

    let grid = Stroke::default().with_color(theme.grid().to_iced()).with_width(1.0);
    let tick_size = theme.font_size * 0.8;

    for &tick in &scale.ticks {
        let y = area.y + area.height * (1.0 - scale.unit(tick) as f32);
        frame.stroke(
            &Path::line(Point::new(area.x, y), Point::new(area.x + area.width, y)),
            grid,
        );

        let label = if integer_ticks { format!("{tick:.0}") } else { format!("{tick:.1}") };
        frame.fill_text(canvas::Text {
            content:  label.clone(),
            position: Point::new(
                area.x - 8.0 - text_width(&label, tick_size),
                y - tick_size / 2.0,
            ),
            color: theme.muted.to_iced(),
            size: tick_size.into(),
            ..canvas::Text::default()
        });
    }

    area
}

/// Category labels under the plotting area at the given x-centres.
pub(crate) fn draw_x_labels(
    frame: &mut Frame,
    area: Rectangle,
    labels: &[String],
    centres: &[f32],
    max_labels: Option<usize>,
    theme: &Theme,
) {
    let tick_size = theme.font_size * 0.8;
    let stride = label_stride(labels.len(), max_labels);
    let y = area.y + area.height + BOTTOM_GUTTER / 2.0;

    for (i, (label, &x)) in labels.iter().zip(centres).enumerate() {
        if i % stride != 0 {
            continue;
        }
        centered_text(frame, label, Point::new(x, y), tick_size, theme.muted.to_iced());
    }
}

/// Placeholder text drawn when a chart has nothing to show yet.
pub(crate) fn draw_empty(frame: &mut Frame, area: Rectangle, theme: &Theme) {
    centered_text(
        frame,
        "No data yet",
        area.center(),
        theme.font_size * 0.9,
        theme.muted.with_alpha(0.6).to_iced(),
    );
}
