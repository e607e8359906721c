use crate::axes::centered_text;
use iced::widget::canvas::{self, path::Arc, Frame, Path, Stroke};
use iced::{mouse, Point, Radians, Rectangle, Renderer, Vector};
use randvar_core::{element::ElementId, SurfaceState};
use randvar_theme::Theme;
use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Instant;

/// Number of labelled sectors on the dial face.
const SECTORS: usize = 10;

/// Canvas program for the probability spinner: a rotating dial plus a pointer.
///
/// Angles are read from the surface on every frame, so tweens started by
/// the spinner controller play without any extra state here.
#[derive(Debug)]
pub struct Dial<'a> {
    surface: &'a SurfaceState,
    theme:   &'a Theme,
}

impl<'a> Dial<'a> {
    pub fn new(surface: &'a SurfaceState, theme: &'a Theme) -> Self {
        Self { surface, theme }
    }

    fn draw_face(&self, frame: &mut Frame, radius: f32) {
        let sector = TAU / SECTORS as f32;
        let colors = [self.theme.accent, self.theme.secondary];

        for i in 0..SECTORS {
            // Sector i spans [i/10, (i+1)/10) clockwise from 12 o'clock.
            let start = i as f32 * sector - FRAC_PI_2;
            let wedge = Path::new(|b| {
                b.move_to(Point::ORIGIN);
                b.arc(Arc {
                    center: Point::ORIGIN,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + sector),
                });
                b.close();
            });
            let alpha = if i % 2 == 0 { 0.55 } else { 0.35 };
            frame.fill(&wedge, colors[i % 2].with_alpha(alpha).to_iced());
        }

        frame.stroke(
            &Path::circle(Point::ORIGIN, radius),
            Stroke::default().with_color(self.theme.foreground.with_alpha(0.4).to_iced()).with_width(2.0),
        );

        let label_size = self.theme.font_size * 0.75;
        for i in 0..SECTORS {
            let theta = i as f32 * sector;
            let r = radius * 0.78;
            let at = Point::new(r * theta.sin(), -r * theta.cos());
            centered_text(
                frame,
                &format!("{:.1}", i as f32 / SECTORS as f32),
                at,
                label_size,
                self.theme.foreground.to_iced(),
            );
        }
    }

    fn draw_pointer(&self, frame: &mut Frame, radius: f32) {
        let tip = Point::new(0.0, -radius * 0.92);
        let half = radius * 0.06;
        let arrow = Path::new(|b| {
            b.move_to(tip);
            b.line_to(Point::new(half, 0.0));
            b.line_to(Point::new(0.0, half * 1.5));
            b.line_to(Point::new(-half, 0.0));
            b.close();
        });
        frame.fill(&arrow, self.theme.warm.to_iced());
        frame.fill(&Path::circle(Point::ORIGIN, half * 1.2), self.theme.foreground.to_iced());
    }
}

impl<Message> canvas::Program<Message> for Dial<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let now = Instant::now();
        let mut frame = Frame::new(renderer, bounds.size());
        let radius = bounds.width.min(bounds.height) / 2.0 - 4.0;
        if radius <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let centre = Vector::new(bounds.width / 2.0, bounds.height / 2.0);
        let dial = self.surface.rotation_at(ElementId::Spinner, now) as f32;
        let pointer = self.surface.rotation_at(ElementId::SpinnerArrow, now) as f32;

        frame.with_save(|frame| {
            frame.translate(centre);
            frame.rotate(Radians(dial.to_radians()));
            self.draw_face(frame, radius);
        });

        frame.with_save(|frame| {
            frame.translate(centre);
            frame.rotate(Radians(pointer.to_radians()));
            self.draw_pointer(frame, radius);
        });

        vec![frame.into_geometry()]
    }
}
