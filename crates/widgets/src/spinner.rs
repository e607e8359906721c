use crate::card::{action_row, card, stat};
use iced::{
    widget::{canvas, column, row, text},
    Alignment, Element, Length,
};
use randvar_config::SpinnerConfig;
use randvar_core::{
    animation::Cue,
    chart::{Axis, Dataset, Rgba, SeriesStyle},
    element::ElementId,
    history::History,
    stats::{SpinnerAggregate, PLACEHOLDER},
    Message, Outcome, Ports, RandomSource, Simulator, SpinnerOutcome, SurfaceState,
    ThreadRngSource,
};
use randvar_renderer::{ChartState, Dial, LineChart};
use randvar_theme::Theme;
use std::time::Duration;
use tracing::debug;

const DECIMALS: usize = 3;

/// Spinner value readout before the first spin.
pub const IDLE_VALUE: &str = "0.000";

const LINE: Rgba = Rgba::new(6, 182, 212, 1.0);

/// Line-chart dataset for the visible window: labels are 1-based positions
/// within the window, not global spin numbers.
pub fn dataset(aggregate: &SpinnerAggregate) -> Dataset {
    Dataset {
        title:  "Spinner Values Over Time".to_string(),
        series: "Value".to_string(),
        labels: (1..=aggregate.recent.len()).map(|i| i.to_string()).collect(),
        values: aggregate.recent.clone(),
        style:  SeriesStyle::Line {
            stroke:       LINE,
            fill:         Some(LINE.with_alpha(0.1)),
            tension:      0.4,
            point_radius: 3.0,
        },
        y_axis: Axis {
            min:           0.0,
            max:           Some(1.0),
            step:          Some(0.2),
            integer_ticks: false,
            max_labels:    Some(10),
        },
    }
}

/// Uniform `[0, 1)` spinner with a windowed time-series chart.
#[derive(Debug)]
pub struct SpinnerSimulator {
    source:     Box<dyn RandomSource>,
    history:    History<SpinnerOutcome>,
    batch_size: usize,
    window:     usize,
    sweep:      Duration,
    rearm:      Duration,
    turns:      u32,
}

impl SpinnerSimulator {
    pub fn new(config: &SpinnerConfig) -> Self {
        Self::with_source(config, Box::new(ThreadRngSource::new()))
    }

    pub fn with_source(config: &SpinnerConfig, source: Box<dyn RandomSource>) -> Self {
        Self {
            source,
            history: History::new(),
            batch_size: config.batch_size,
            window: config.window,
            sweep: config.sweep(),
            rearm: config.rearm(),
            turns: config.sweep_turns,
        }
    }

    /// Pick up new settings from a reloaded config; history is kept.
    pub fn configure(&mut self, config: &SpinnerConfig) {
        self.batch_size = config.batch_size;
        self.window = config.window;
        self.sweep = config.sweep();
        self.rearm = config.rearm();
        self.turns = config.sweep_turns;
    }

    pub fn history(&self) -> &History<SpinnerOutcome> {
        &self.history
    }

    pub fn aggregate(&self) -> SpinnerAggregate {
        SpinnerAggregate::of(self.history.all(), self.history.window(self.window))
    }

    /// Pointer to the value, then the dial sweep with its snap-back timers.
    fn animate(&self, outcome: SpinnerOutcome, ports: &mut Ports<'_>) {
        let rotation = outcome.degrees();

        ports.elements.set_rotation(ElementId::SpinnerArrow, rotation);
        ports
            .elements
            .set_text(ElementId::SpinnerValue, &format!("{:.*}", DECIMALS, outcome.value()));

        let sweep_to = f64::from(self.turns) * 360.0 + rotation;
        ports.elements.set_rotation(ElementId::Spinner, sweep_to);

        ports.scheduler.schedule(self.sweep, Cue::Snap { id: ElementId::Spinner, degrees: 0.0 });
        ports.scheduler.schedule(
            self.sweep + self.rearm,
            Cue::Rearm { id: ElementId::Spinner, transition: self.sweep },
        );
    }

    fn refresh(&self, latest: Option<SpinnerOutcome>, ports: &mut Ports<'_>) {
        let aggregate = self.aggregate();

        ports.elements.set_text(ElementId::TotalSpins, &aggregate.summary.count.to_string());
        ports.elements.set_text(ElementId::AvgSpin, &aggregate.summary.format_mean(DECIMALS));

        ports.chart.replace(dataset(&aggregate));
        ports.chart.redraw();

        if let Some(outcome) = latest {
            self.animate(outcome, ports);
        }
    }

    pub fn view<'a>(
        &'a self,
        surface: &'a SurfaceState,
        chart: &'a ChartState,
        theme: &'a Theme,
        alpha: f32,
    ) -> Element<'a, Message> {
        let stats = row![
            stat("Total Spins", surface.text(ElementId::TotalSpins), theme),
            stat("Average", surface.text(ElementId::AvgSpin), theme),
        ]
        .spacing(theme.gap as f32);

        let body = column![
            text("Probability Spinner").size(theme.heading_size(3)),
            text("Each spin is one draw of Y, uniform on [0, 1).")
                .size(theme.font_size * 0.9)
                .color(theme.muted.to_iced()),
            canvas(Dial::new(surface, theme))
                .width(Length::Fixed(200.0))
                .height(Length::Fixed(200.0)),
            text(surface.text(ElementId::SpinnerValue))
                .size(theme.font_size * 2.0)
                .color(theme.secondary.to_iced()),
            stats,
            action_row(["Spin", "Spin 100 Times", "Reset"], Message::Spinner, theme.secondary, theme),
            canvas(LineChart::new(chart, theme))
                .width(Length::Fill)
                .height(Length::Fixed(260.0)),
        ]
        .spacing(theme.gap as f32)
        .align_x(Alignment::Center);

        card(body, theme, alpha)
    }
}

impl Simulator for SpinnerSimulator {
    fn id(&self) -> &str {
        "spinner"
    }

    /// Arms the dial's sweep transition, then paints placeholders.
    fn init(&mut self, ports: &mut Ports<'_>) {
        ports.elements.set_transition(ElementId::Spinner, Some(self.sweep));
        self.reset(ports);
    }

    fn single(&mut self, ports: &mut Ports<'_>) {
        let outcome = self.source.sample_spinner();
        self.history.append(outcome);
        debug!(value = outcome.value(), total = self.history.len(), "spinner: single spin");
        self.refresh(Some(outcome), ports);
    }

    fn batch(&mut self, ports: &mut Ports<'_>) {
        self.history.append_batch(self.batch_size, self.source.as_mut());
        debug!(n = self.batch_size, total = self.history.len(), "spinner: batch spin");
        let latest = if self.batch_size > 0 { self.history.last() } else { None };
        self.refresh(latest, ports);
    }

    fn reset(&mut self, ports: &mut Ports<'_>) {
        self.history.clear();
        debug!("spinner: reset");

        ports.elements.set_text(ElementId::SpinnerValue, IDLE_VALUE);
        ports.elements.set_text(ElementId::TotalSpins, "0");
        ports.elements.set_text(ElementId::AvgSpin, PLACEHOLDER);
        ports.elements.set_rotation(ElementId::SpinnerArrow, 0.0);
        ports.elements.set_rotation(ElementId::Spinner, 0.0);

        ports.chart.replace(dataset(&SpinnerAggregate::default()));
        ports.chart.redraw();
    }

    fn len(&self) -> usize {
        self.history.len()
    }
}
