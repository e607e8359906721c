use std::time::Duration;

/// Stable identifiers for every presentation element the simulators write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    // ── Dice ──────────────────────────────────────────────────────────────────
    /// Large die glyph showing the latest roll.
    DiceDisplay,
    /// "Total rolls" counter.
    TotalRolls,
    /// "Average" readout for the dice run.
    AvgRoll,

    // ── Spinner ───────────────────────────────────────────────────────────────
    /// The dial face that sweeps on every spin.
    Spinner,
    /// The pointer that rests on the sampled value.
    SpinnerArrow,
    /// Latest spin value readout.
    SpinnerValue,
    /// "Total spins" counter.
    TotalSpins,
    /// "Average" readout for the spinner run.
    AvgSpin,
}

/// Transient visual states toggled on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    /// Die is mid-roll; cleared by a timed cue.
    Rolling,
}

/// Write-only handle onto the presentation surface.
///
/// Controllers never read back through this trait, so the same logic drives
/// the real window and the recording doubles used in tests.
pub trait ElementUpdater {
    fn set_text(&mut self, id: ElementId, text: &str);

    fn add_class(&mut self, id: ElementId, class: Class);

    fn remove_class(&mut self, id: ElementId, class: Class);

    /// Rotate the element to `degrees`, animating if a transition is armed.
    fn set_rotation(&mut self, id: ElementId, degrees: f64);

    /// Arm (`Some`) or disarm (`None`) the rotation transition.
    fn set_transition(&mut self, id: ElementId, transition: Option<Duration>);
}
