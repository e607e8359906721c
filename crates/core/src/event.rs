use crate::animation::Cue;

/// What a user can ask a simulator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one sample.
    Single,
    /// Draw a whole batch (100 by default) in one go.
    Batch,
    /// Throw the history away.
    Reset,
}

/// Lesson sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    SampleSpace,
    RandomVariables,
    Discrete,
    Continuous,
    Simulators,
    Challenges,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::SampleSpace,
        SectionId::RandomVariables,
        SectionId::Discrete,
        SectionId::Continuous,
        SectionId::Simulators,
        SectionId::Challenges,
    ];

    /// Label used for the navigation link.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home            => "Home",
            SectionId::SampleSpace     => "Sample Spaces",
            SectionId::RandomVariables => "Random Variables",
            SectionId::Discrete        => "Discrete",
            SectionId::Continuous      => "Continuous",
            SectionId::Simulators      => "Try It",
            SectionId::Challenges      => "Challenges",
        }
    }
}

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Buttons            → `Dice`, `Spinner`, `ToggleAnswer`, `Navigate`
/// - Animation timers   → `Cue`
/// - Config watcher     → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Simulators ────────────────────────────────────────────────────────────
    /// Button press on the dice card.
    Dice(Action),
    /// Button press on the spinner card.
    Spinner(Action),

    // ── Page ──────────────────────────────────────────────────────────────────
    /// Reveal / hide the answer to challenge question `n` (zero-based).
    ToggleAnswer(usize),
    /// Navigation link pressed: scroll to the section.
    Navigate(SectionId),

    // ── Internal ──────────────────────────────────────────────────────────────
    /// A scheduled animation timer fired.
    Cue(Cue),
    /// Config file changed on disk; triggers a live reload.
    ConfigReloaded,
}
