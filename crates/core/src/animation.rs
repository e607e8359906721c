use crate::element::{Class, ElementId, ElementUpdater};
use std::time::Duration;

/// A deferred, purely visual write to the presentation surface.
///
/// Cues never carry sample data; firing them late, early, or twice only
/// changes what is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    /// Drop a transient class, e.g. end the dice "rolling" pulse.
    RemoveClass { id: ElementId, class: Class },
    /// Disarm the transition and jump straight to `degrees`.
    Snap { id: ElementId, degrees: f64 },
    /// Re-arm the rotation transition after a snap.
    Rearm { id: ElementId, transition: Duration },
}

impl Cue {
    pub fn apply(self, elements: &mut (impl ElementUpdater + ?Sized)) {
        match self {
            Cue::RemoveClass { id, class } => elements.remove_class(id, class),
            Cue::Snap { id, degrees } => {
                elements.set_transition(id, None);
                elements.set_rotation(id, degrees);
            }
            Cue::Rearm { id, transition } => elements.set_transition(id, Some(transition)),
        }
    }
}

/// Fire-and-forget timer service.
///
/// There is no cancellation: every scheduled cue eventually fires.
pub trait AnimationScheduler {
    fn schedule(&mut self, delay: Duration, cue: Cue);
}

/// Collects cues until the host drains them into real timers.
#[derive(Debug, Default)]
pub struct CueQueue {
    pending: Vec<(Duration, Cue)>,
}

impl CueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, (Duration, Cue)> {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every pending cue immediately, shortest delay first.
    ///
    /// Stands in for waiting on real timers.
    pub fn fast_forward(&mut self, elements: &mut (impl ElementUpdater + ?Sized)) {
        self.pending.sort_by_key(|(delay, _)| *delay);
        for (_, cue) in self.pending.drain(..) {
            cue.apply(elements);
        }
    }
}

impl AnimationScheduler for CueQueue {
    fn schedule(&mut self, delay: Duration, cue: Cue) {
        self.pending.push((delay, cue));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SurfaceState;

    #[test]
    fn fast_forward_runs_in_delay_order() {
        let mut surface = SurfaceState::new();
        let mut queue = CueQueue::new();

        // Scheduled out of order on purpose: the rearm must land last.
        queue.schedule(
            Duration::from_millis(2_050),
            Cue::Rearm { id: ElementId::Spinner, transition: Duration::from_secs(2) },
        );
        queue.schedule(
            Duration::from_millis(2_000),
            Cue::Snap { id: ElementId::Spinner, degrees: 0.0 },
        );
        queue.fast_forward(&mut surface);

        assert!(queue.is_empty());
        assert_eq!(surface.transition(ElementId::Spinner), Some(Duration::from_secs(2)));
        assert_eq!(surface.target_rotation(ElementId::Spinner), 0.0);
    }

    #[test]
    fn remove_class_cue() {
        let mut surface = SurfaceState::new();
        surface.add_class(ElementId::DiceDisplay, Class::Rolling);
        Cue::RemoveClass { id: ElementId::DiceDisplay, class: Class::Rolling }.apply(&mut surface);
        assert!(!surface.has_class(ElementId::DiceDisplay, Class::Rolling));
    }
}
