//! Drifting particle field drawn behind the page.
//!
//! Purely decorative: it has its own RNG and never touches simulator state.

use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{mouse, Point, Rectangle, Renderer, Size};
use rand::Rng;
use randvar_config::ParticleConfig;

/// `rgba(99, 102, 241, ·)`, the page's indigo.
const PARTICLE_RGB: (f32, f32, f32) = (99.0 / 255.0, 102.0 / 255.0, 241.0 / 255.0);
const PARTICLE_ALPHA: f32 = 0.5;
const LINK_ALPHA: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x:    f32,
    pub y:    f32,
    pub vx:   f32,
    pub vy:   f32,
    /// Radius in `[1, 3)`.
    pub size: f32,
}

impl Particle {
    fn random(rng: &mut impl Rng, bounds: Size, max_speed: f32) -> Self {
        Self {
            x:    rng.gen::<f32>() * bounds.width,
            y:    rng.gen::<f32>() * bounds.height,
            vx:   (rng.gen::<f32>() - 0.5) * max_speed,
            vy:   (rng.gen::<f32>() - 0.5) * max_speed,
            size: rng.gen::<f32>() * 2.0 + 1.0,
        }
    }

    /// Move one frame, reversing any velocity component that left the bounds.
    fn step(&mut self, bounds: Size) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > bounds.width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > bounds.height {
            self.vy = -self.vy;
        }
    }
}

/// A pair of particles close enough to be joined, with the line's alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a:     usize,
    pub b:     usize,
    pub alpha: f32,
}

pub struct ParticleField {
    particles:     Vec<Particle>,
    bounds:        Size,
    link_distance: f32,
    max_speed:     f32,
    cache:         canvas::Cache,
}

impl std::fmt::Debug for ParticleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleField")
            .field("particles", &self.particles.len())
            .field("bounds", &self.bounds)
            .field("link_distance", &self.link_distance)
            .finish_non_exhaustive()
    }
}

impl ParticleField {
    pub fn new(config: &ParticleConfig, bounds: Size) -> Self {
        Self::with_rng(config, bounds, &mut rand::thread_rng())
    }

    pub fn with_rng(config: &ParticleConfig, bounds: Size, rng: &mut impl Rng) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle::random(rng, bounds, config.max_speed))
            .collect();
        Self {
            particles,
            bounds,
            link_distance: config.link_distance,
            max_speed: config.max_speed,
            cache: canvas::Cache::new(),
        }
    }

    /// Build from explicit particles (tests, replays).
    pub fn from_particles(particles: Vec<Particle>, bounds: Size, link_distance: f32) -> Self {
        Self { particles, bounds, link_distance, max_speed: 0.0, cache: canvas::Cache::new() }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Track a new canvas size; existing particles are scaled along.
    pub fn resize(&mut self, bounds: Size) {
        if self.bounds.width > 0.0 && self.bounds.height > 0.0 {
            let sx = bounds.width / self.bounds.width;
            let sy = bounds.height / self.bounds.height;
            for p in &mut self.particles {
                p.x *= sx;
                p.y *= sy;
            }
        }
        self.bounds = bounds;
        self.cache.clear();
    }

    /// Apply a new config: count changes add or drop particles.
    pub fn reconfigure(&mut self, config: &ParticleConfig) {
        self.link_distance = config.link_distance;
        self.max_speed = config.max_speed;
        let mut rng = rand::thread_rng();
        self.particles.truncate(config.count);
        while self.particles.len() < config.count {
            self.particles.push(Particle::random(&mut rng, self.bounds, self.max_speed));
        }
        self.cache.clear();
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.step(self.bounds);
        }
        self.cache.clear();
    }

    /// Every pair closer than the link distance. Alpha fades linearly to 0.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (a, p1) in self.particles.iter().enumerate() {
            for (offset, p2) in self.particles[a + 1..].iter().enumerate() {
                let d = ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt();
                if d < self.link_distance {
                    links.push(Link {
                        a,
                        b: a + 1 + offset,
                        alpha: LINK_ALPHA * (1.0 - d / self.link_distance),
                    });
                }
            }
        }
        links
    }
}

impl<Message> canvas::Program<Message> for ParticleField {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let (r, g, b) = PARTICLE_RGB;
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let dot = iced::Color::from_rgba(r, g, b, PARTICLE_ALPHA);
            for p in &self.particles {
                frame.fill(&Path::circle(Point::new(p.x, p.y), p.size), dot);
            }

            for link in self.links() {
                let (p1, p2) = (self.particles[link.a], self.particles[link.b]);
                frame.stroke(
                    &Path::line(Point::new(p1.x, p1.y), Point::new(p2.x, p2.y)),
                    Stroke::default()
                        .with_color(iced::Color::from_rgba(r, g, b, link.alpha))
                        .with_width(1.0),
                );
            }
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle { x, y, vx, vy, size: 1.0 }
    }

    #[test]
    fn random_particles_respect_ranges() {
        let cfg = ParticleConfig::default();
        let field = ParticleField::new(&cfg, Size::new(800.0, 600.0));
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x) && (0.0..600.0).contains(&p.y));
            assert!(p.vx >= -0.25 && p.vx < 0.25);
            assert!(p.size >= 1.0 && p.size < 3.0);
        }
    }

    #[test]
    fn bounces_off_edges() {
        let mut field = ParticleField::from_particles(
            vec![particle(0.1, 50.0, -0.5, 0.0), particle(99.9, 50.0, 0.5, 0.0)],
            Size::new(100.0, 100.0),
            150.0,
        );
        field.step();
        assert!(field.particles()[0].vx > 0.0);
        assert!(field.particles()[1].vx < 0.0);
    }

    #[test]
    fn links_only_close_pairs_with_fading_alpha() {
        let field = ParticleField::from_particles(
            vec![particle(0.0, 0.0, 0.0, 0.0), particle(75.0, 0.0, 0.0, 0.0), particle(500.0, 0.0, 0.0, 0.0)],
            Size::new(1000.0, 100.0),
            150.0,
        );
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].alpha - 0.1).abs() < 1e-6);
    }

    #[test]
    fn resize_scales_positions() {
        let mut field = ParticleField::from_particles(
            vec![particle(50.0, 50.0, 0.0, 0.0)],
            Size::new(100.0, 100.0),
            150.0,
        );
        field.resize(Size::new(200.0, 50.0));
        assert_eq!(field.particles()[0], particle(100.0, 25.0, 0.0, 0.0));
    }

    #[test]
    fn reconfigure_changes_count() {
        let mut cfg = ParticleConfig::default();
        let mut field = ParticleField::new(&cfg, Size::new(100.0, 100.0));
        cfg.count = 10;
        field.reconfigure(&cfg);
        assert_eq!(field.particles().len(), 10);
        cfg.count = 12;
        field.reconfigure(&cfg);
        assert_eq!(field.particles().len(), 12);
    }
}
