use crate::easing::CubicBezier;
use crate::element::{Class, ElementId, ElementUpdater};
use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};

/// In-memory presentation surface that the window reads when drawing.
///
/// Rotations behave like a CSS `transform` with an optional `transition`:
/// setting a new angle while a transition is armed starts a tween from the
/// angle currently on screen.
#[derive(Debug, Clone, Default)]
pub struct SurfaceState {
    elements: HashMap<ElementId, ElementState>,
}

/// Everything written to a single element so far.
#[derive(Debug, Clone, Default)]
struct ElementState {
    text:       String,
    classes:    BTreeSet<Class>,
    rotation:   Rotation,
    transition: Option<Duration>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Rotation {
    from:     f64,
    to:       f64,
    /// `None` once the angle was set without a transition.
    started:  Option<Instant>,
    duration: Duration,
}

impl Rotation {
    fn angle_at(&self, now: Instant) -> f64 {
        let Some(started) = self.started else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let t = now.saturating_duration_since(started).as_secs_f64() / self.duration.as_secs_f64();
        let eased = CubicBezier::EASE.at(t);
        self.from + (self.to - self.from) * eased
    }

    fn is_running(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) < self.duration)
    }
}

impl SurfaceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text, empty if never written.
    pub fn text(&self, id: ElementId) -> &str {
        self.elements.get(&id).map_or("", |e| e.text.as_str())
    }

    pub fn has_class(&self, id: ElementId, class: Class) -> bool {
        self.elements.get(&id).is_some_and(|e| e.classes.contains(&class))
    }

    pub fn transition(&self, id: ElementId) -> Option<Duration> {
        self.elements.get(&id).and_then(|e| e.transition)
    }

    /// Angle the element is heading to, ignoring any running tween.
    pub fn target_rotation(&self, id: ElementId) -> f64 {
        self.elements.get(&id).map_or(0.0, |e| e.rotation.to)
    }

    /// Angle on screen at `now`.
    pub fn rotation_at(&self, id: ElementId, now: Instant) -> f64 {
        self.elements.get(&id).map_or(0.0, |e| e.rotation.angle_at(now))
    }

    /// `true` while any rotation tween is still in flight.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.elements.values().any(|e| e.rotation.is_running(now))
    }

    /// [`ElementUpdater::set_rotation`] with an explicit clock.
    pub fn set_rotation_at(&mut self, id: ElementId, degrees: f64, now: Instant) {
        let element = self.elements.entry(id).or_default();
        element.rotation = match element.transition {
            Some(duration) => Rotation {
                from: element.rotation.angle_at(now),
                to: degrees,
                started: Some(now),
                duration,
            },
            None => Rotation { from: degrees, to: degrees, started: None, duration: Duration::ZERO },
        };
    }
}

impl ElementUpdater for SurfaceState {
    fn set_text(&mut self, id: ElementId, text: &str) {
        let element = self.elements.entry(id).or_default();
        element.text.clear();
        element.text.push_str(text);
    }

    fn add_class(&mut self, id: ElementId, class: Class) {
        self.elements.entry(id).or_default().classes.insert(class);
    }

    fn remove_class(&mut self, id: ElementId, class: Class) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.classes.remove(&class);
        }
    }

    fn set_rotation(&mut self, id: ElementId, degrees: f64) {
        self.set_rotation_at(id, degrees, Instant::now());
    }

    fn set_transition(&mut self, id: ElementId, transition: Option<Duration>) {
        self.elements.entry(id).or_default().transition = transition;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_without_transition_is_immediate() {
        let mut s = SurfaceState::new();
        s.set_rotation(ElementId::SpinnerArrow, 90.0);
        assert_eq!(s.rotation_at(ElementId::SpinnerArrow, Instant::now()), 90.0);
        assert!(!s.is_animating(Instant::now()));
    }

    #[test]
    fn transition_tweens_from_current_angle() {
        let mut s = SurfaceState::new();
        let t0 = Instant::now();
        s.set_transition(ElementId::Spinner, Some(Duration::from_secs(2)));
        s.set_rotation_at(ElementId::Spinner, 1_260.0, t0);

        assert_eq!(s.rotation_at(ElementId::Spinner, t0), 0.0);
        let mid = s.rotation_at(ElementId::Spinner, t0 + Duration::from_secs(1));
        assert!(mid > 0.0 && mid < 1_260.0);
        assert!(s.is_animating(t0 + Duration::from_secs(1)));

        let end = t0 + Duration::from_secs(2);
        assert_eq!(s.rotation_at(ElementId::Spinner, end), 1_260.0);
        assert!(!s.is_animating(end));
    }

    #[test]
    fn retarget_mid_flight_starts_from_screen_angle() {
        let mut s = SurfaceState::new();
        let t0 = Instant::now();
        s.set_transition(ElementId::Spinner, Some(Duration::from_secs(2)));
        s.set_rotation_at(ElementId::Spinner, 1_000.0, t0);

        let t1 = t0 + Duration::from_millis(500);
        let on_screen = s.rotation_at(ElementId::Spinner, t1);
        s.set_rotation_at(ElementId::Spinner, 0.0, t1);
        assert!((s.rotation_at(ElementId::Spinner, t1) - on_screen).abs() < 1e-9);
    }

    #[test]
    fn classes_toggle() {
        let mut s = SurfaceState::new();
        s.add_class(ElementId::DiceDisplay, Class::Rolling);
        assert!(s.has_class(ElementId::DiceDisplay, Class::Rolling));
        s.remove_class(ElementId::DiceDisplay, Class::Rolling);
        assert!(!s.has_class(ElementId::DiceDisplay, Class::Rolling));
        // Removing from an untouched element is a no-op.
        s.remove_class(ElementId::Spinner, Class::Rolling);
    }

    #[test]
    fn text_defaults_to_empty() {
        let mut s = SurfaceState::new();
        assert_eq!(s.text(ElementId::TotalRolls), "");
        s.set_text(ElementId::TotalRolls, "12");
        assert_eq!(s.text(ElementId::TotalRolls), "12");
    }
}
