use crate::{
    animation::AnimationScheduler, chart::SeriesRenderer, element::ElementUpdater, event::Action,
};

/// Borrowed capability handles for one controller call.
///
/// Built fresh by the host for every action so a controller never holds on
/// to the surface, the chart, or the timer service between calls.
pub struct Ports<'a> {
    pub elements:  &'a mut dyn ElementUpdater,
    pub chart:     &'a mut dyn SeriesRenderer,
    pub scheduler: &'a mut dyn AnimationScheduler,
}

impl<'a> Ports<'a> {
    pub fn new(
        elements: &'a mut dyn ElementUpdater,
        chart: &'a mut dyn SeriesRenderer,
        scheduler: &'a mut dyn AnimationScheduler,
    ) -> Self {
        Self { elements, chart, scheduler }
    }
}

/// Every interactive sampling widget implements this trait.
///
/// A simulator owns its history exclusively. Each action runs to completion:
/// sample, aggregate, present, chart. Nothing ever blocks a new action, not
/// even an animation that is still playing.
pub trait Simulator: std::fmt::Debug {
    /// Unique string identifier, e.g. `"dice"` or `"spinner"`.
    fn id(&self) -> &str;

    /// Called once after the window is up. Paints the initial placeholders.
    fn init(&mut self, ports: &mut Ports<'_>) {
        self.reset(ports);
    }

    /// Draw one sample and show it.
    fn single(&mut self, ports: &mut Ports<'_>);

    /// Draw a full batch; only the last sample is animated.
    fn batch(&mut self, ports: &mut Ports<'_>);

    /// Clear history and restore every display to its placeholder.
    fn reset(&mut self, ports: &mut Ports<'_>);

    /// Number of samples since the last reset.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dispatch a user action.
    fn handle(&mut self, action: Action, ports: &mut Ports<'_>) {
        match action {
            Action::Single => self.single(ports),
            Action::Batch  => self.batch(ports),
            Action::Reset  => self.reset(ports),
        }
    }
}
