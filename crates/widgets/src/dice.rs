use crate::card::{action_row, card, stat};
use iced::{
    widget::{canvas, column, row, text},
    Alignment, Element, Length,
};
use randvar_config::DiceConfig;
use randvar_core::{
    animation::Cue,
    chart::{Axis, Dataset, Rgba, SeriesStyle},
    element::{Class, ElementId},
    history::History,
    stats::{DiceAggregate, PLACEHOLDER},
    DiceOutcome, Message, Ports, RandomSource, Simulator, SurfaceState, ThreadRngSource,
};
use randvar_renderer::{BarChart, ChartState};
use randvar_theme::Theme;
use std::time::Duration;
use tracing::debug;

/// Unicode die faces, indexed by `face - 1`.
pub const FACES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

/// Shown before the first roll and after a reset.
pub const IDLE_GLYPH: &str = "🎲";

const MEAN_DECIMALS: usize = 2;

/// One colour per face: indigo, light indigo, cyan, light cyan, amber, light amber.
const PALETTE: [Rgba; 6] = [
    Rgba::new(99, 102, 241, 1.0),
    Rgba::new(129, 140, 248, 1.0),
    Rgba::new(6, 182, 212, 1.0),
    Rgba::new(34, 211, 238, 1.0),
    Rgba::new(245, 158, 11, 1.0),
    Rgba::new(251, 191, 36, 1.0),
];

/// Glyph for a die face.
pub fn glyph(outcome: DiceOutcome) -> &'static str {
    FACES[outcome.bucket()]
}

/// Bar-chart dataset for a frequency table.
pub fn dataset(aggregate: &DiceAggregate) -> Dataset {
    Dataset {
        title:  "Dice Roll Distribution".to_string(),
        series: "Frequency".to_string(),
        labels: (1..=6).map(|f: u8| f.to_string()).collect(),
        values: aggregate.frequencies.iter().map(|&n| n as f64).collect(),
        style:  SeriesStyle::Bars {
            fill:         PALETTE.iter().map(|c| c.with_alpha(0.6)).collect(),
            border:       PALETTE.to_vec(),
            border_width: 2.0,
        },
        y_axis: Axis { integer_ticks: true, ..Axis::default() },
    }
}

/// Fair six-sided die with a running frequency chart.
#[derive(Debug)]
pub struct DiceSimulator {
    source:     Box<dyn RandomSource>,
    history:    History<DiceOutcome>,
    batch_size: usize,
    rolling:    Duration,
}

impl DiceSimulator {
    pub fn new(config: &DiceConfig) -> Self {
        Self::with_source(config, Box::new(ThreadRngSource::new()))
    }

    pub fn with_source(config: &DiceConfig, source: Box<dyn RandomSource>) -> Self {
        Self {
            source,
            history: History::new(),
            batch_size: config.batch_size,
            rolling: config.rolling(),
        }
    }

    /// Pick up new timings from a reloaded config; history is kept.
    pub fn configure(&mut self, config: &DiceConfig) {
        self.batch_size = config.batch_size;
        self.rolling = config.rolling();
    }

    pub fn history(&self) -> &History<DiceOutcome> {
        &self.history
    }

    pub fn aggregate(&self) -> DiceAggregate {
        DiceAggregate::of(self.history.all())
    }

    /// Stats, chart, then the latest roll, in that order.
    fn refresh(&self, latest: Option<DiceOutcome>, ports: &mut Ports<'_>) {
        let aggregate = self.aggregate();

        ports.elements.set_text(ElementId::TotalRolls, &aggregate.summary.count.to_string());
        ports
            .elements
            .set_text(ElementId::AvgRoll, &aggregate.summary.format_mean(MEAN_DECIMALS));

        ports.chart.replace(dataset(&aggregate));
        ports.chart.redraw();

        if let Some(outcome) = latest {
            ports.elements.set_text(ElementId::DiceDisplay, glyph(outcome));
            ports.elements.add_class(ElementId::DiceDisplay, Class::Rolling);
            ports.scheduler.schedule(
                self.rolling,
                Cue::RemoveClass { id: ElementId::DiceDisplay, class: Class::Rolling },
            );
        }
    }

    pub fn view<'a>(
        &'a self,
        surface: &'a SurfaceState,
        chart: &'a ChartState,
        theme: &'a Theme,
        alpha: f32,
    ) -> Element<'a, Message> {
        let rolling = surface.has_class(ElementId::DiceDisplay, Class::Rolling);
        let (glyph_size, glyph_color) = if rolling {
            (theme.font_size * 6.4, theme.accent)
        } else {
            (theme.font_size * 5.6, theme.foreground)
        };

        let display = text(surface.text(ElementId::DiceDisplay))
            .size(glyph_size)
            .color(glyph_color.to_iced());

        let stats = row![
            stat("Total Rolls", surface.text(ElementId::TotalRolls), theme),
            stat("Average", surface.text(ElementId::AvgRoll), theme),
        ]
        .spacing(theme.gap as f32);

        let body = column![
            text("Dice Roll Simulator").size(theme.heading_size(3)),
            text("Each roll is one draw of X, the face showing on a fair die.")
                .size(theme.font_size * 0.9)
                .color(theme.muted.to_iced()),
            display,
            stats,
            action_row(["Roll Dice", "Roll 100 Times", "Reset"], Message::Dice, theme.accent, theme),
            canvas(BarChart::new(chart, theme))
                .width(Length::Fill)
                .height(Length::Fixed(260.0)),
        ]
        .spacing(theme.gap as f32)
        .align_x(Alignment::Center);

        card(body, theme, alpha)
    }
}

impl Simulator for DiceSimulator {
    fn id(&self) -> &str {
        "dice"
    }

    fn single(&mut self, ports: &mut Ports<'_>) {
        let outcome = self.source.sample_die();
        self.history.append(outcome);
        debug!(face = outcome.face(), total = self.history.len(), "dice: single roll");
        self.refresh(Some(outcome), ports);
    }

    fn batch(&mut self, ports: &mut Ports<'_>) {
        self.history.append_batch(self.batch_size, self.source.as_mut());
        debug!(n = self.batch_size, total = self.history.len(), "dice: batch roll");
        // A zero-sized batch leaves nothing new to animate.
        let latest = if self.batch_size > 0 { self.history.last() } else { None };
        self.refresh(latest, ports);
    }

    fn reset(&mut self, ports: &mut Ports<'_>) {
        self.history.clear();
        debug!("dice: reset");

        ports.elements.set_text(ElementId::DiceDisplay, IDLE_GLYPH);
        ports.elements.set_text(ElementId::TotalRolls, "0");
        ports.elements.set_text(ElementId::AvgRoll, PLACEHOLDER);

        ports.chart.replace(dataset(&DiceAggregate::default()));
        ports.chart.redraw();
    }

    fn len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randvar_core::{testing::Harness, Action, FixedSource};

    fn scripted(faces: &[u8]) -> DiceSimulator {
        DiceSimulator::with_source(&DiceConfig::default(), Box::new(FixedSource::faces(faces)))
    }

    fn started(sim: &mut DiceSimulator) -> Harness {
        let mut h = Harness::new();
        sim.init(&mut h.ports());
        h
    }

    #[test]
    fn init_shows_placeholders() {
        let mut sim = scripted(&[1]);
        let h = started(&mut sim);
        assert_eq!(h.surface.text(ElementId::DiceDisplay), IDLE_GLYPH);
        assert_eq!(h.surface.text(ElementId::TotalRolls), "0");
        assert_eq!(h.surface.text(ElementId::AvgRoll), PLACEHOLDER);
        assert_eq!(h.chart.values(), [0.0; 6]);
    }

    #[test]
    fn n_single_rolls_give_history_of_n() {
        let mut sim = scripted(&[1, 2, 3, 4, 5, 6, 6]);
        let mut h = started(&mut sim);
        for n in 1..=25 {
            sim.handle(Action::Single, &mut h.ports());
            assert_eq!(sim.len(), n);
            assert_eq!(sim.aggregate().total(), n);
        }
    }

    #[test]
    fn three_known_rolls() {
        let mut sim = scripted(&[2, 2, 5]);
        let mut h = started(&mut sim);
        for _ in 0..3 {
            sim.single(&mut h.ports());
        }

        assert_eq!(sim.aggregate().frequencies, [0, 2, 0, 0, 1, 0]);
        assert_eq!(h.surface.text(ElementId::TotalRolls), "3");
        assert_eq!(h.surface.text(ElementId::AvgRoll), "3.00");
        assert_eq!(h.chart.values(), [0.0, 2.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(h.chart.labels(), ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(h.surface.text(ElementId::DiceDisplay), "⚄");
    }

    #[test]
    fn one_roll_mean_is_that_roll() {
        let mut sim = scripted(&[4]);
        let mut h = started(&mut sim);
        sim.single(&mut h.ports());
        assert_eq!(h.surface.text(ElementId::AvgRoll), "4.00");
    }

    #[test]
    fn rolling_pulse_clears_after_timer() {
        let mut sim = scripted(&[3]);
        let mut h = started(&mut sim);
        sim.single(&mut h.ports());

        assert!(h.surface.has_class(ElementId::DiceDisplay, Class::Rolling));
        let pending: Vec<_> = h.cues.drain().collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].0, Duration::from_millis(500));

        pending[0].1.apply(&mut h.surface);
        assert!(!h.surface.has_class(ElementId::DiceDisplay, Class::Rolling));
    }

    #[test]
    fn batch_adds_exactly_batch_size_and_animates_last() {
        let mut sim = scripted(&[1, 2, 3, 4, 5, 6, 2]);
        let mut h = started(&mut sim);
        sim.single(&mut h.ports());
        h.cues.drain();

        sim.batch(&mut h.ports());
        assert_eq!(sim.len(), 101);
        assert_eq!(h.surface.text(ElementId::TotalRolls), "101");
        // Only one pulse, for the final roll.
        assert_eq!(h.cues.len(), 1);
        let last = sim.history().last().unwrap();
        assert_eq!(h.surface.text(ElementId::DiceDisplay), glyph(last));
        assert_eq!(h.chart.values().iter().sum::<f64>(), 101.0);
    }

    #[test]
    fn batch_then_reset_clears_everything() {
        let mut sim = scripted(&[6, 1, 3]);
        let mut h = started(&mut sim);
        sim.batch(&mut h.ports());
        sim.reset(&mut h.ports());

        assert_eq!(sim.len(), 0);
        assert_eq!(sim.aggregate().frequencies, [0; 6]);
        assert_eq!(h.surface.text(ElementId::TotalRolls), "0");
        assert_eq!(h.surface.text(ElementId::AvgRoll), PLACEHOLDER);
        assert_eq!(h.surface.text(ElementId::DiceDisplay), IDLE_GLYPH);
        assert_eq!(h.chart.values(), [0.0; 6]);
    }

    #[test]
    fn every_action_redraws_the_chart() {
        let mut sim = scripted(&[1]);
        let mut h = started(&mut sim);
        let before = h.chart.redraws;
        for action in [Action::Single, Action::Batch, Action::Reset] {
            sim.handle(action, &mut h.ports());
        }
        assert_eq!(h.chart.redraws, before + 3);
    }

    #[test]
    fn actions_are_not_blocked_by_a_running_pulse() {
        let mut sim = scripted(&[2]);
        let mut h = started(&mut sim);
        sim.single(&mut h.ports());
        sim.single(&mut h.ports());
        // Both timers stay queued; neither cancels the other.
        assert_eq!(h.cues.len(), 2);
        h.fast_forward();
        assert!(!h.surface.has_class(ElementId::DiceDisplay, Class::Rolling));
        assert_eq!(sim.len(), 2);
    }

    #[test]
    fn configure_keeps_history_and_applies_batch_size() {
        let mut sim = scripted(&[1, 4, 6]);
        let mut h = started(&mut sim);
        sim.batch(&mut h.ports());
        let before = sim.aggregate();

        let changed = DiceConfig { batch_size: 10, rolling_ms: 200 };
        sim.configure(&changed);
        assert_eq!(sim.len(), 100);
        assert_eq!(sim.aggregate(), before);

        h.cues.drain();
        sim.batch(&mut h.ports());
        assert_eq!(sim.len(), 110);
        let pending: Vec<_> = h.cues.drain().collect();
        assert_eq!(pending[0].0, Duration::from_millis(200));
    }

    #[test]
    fn glyphs_cover_all_faces() {
        for face in 1..=6u8 {
            let outcome = DiceOutcome::new(face).unwrap();
            assert_eq!(glyph(outcome), FACES[usize::from(face) - 1]);
        }
    }
}
