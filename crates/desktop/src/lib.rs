//! Desktop window for `randvar`.
//!
//! Owns the Iced application loop and wires the simulators to their ports:
//! - `SurfaceState` as the element surface both simulators write into
//! - one `ChartState` per simulator as its chart sink
//! - a `CueQueue` drained into delayed `Task`s after every update
//!
//! Background work: a ~60 Hz frame tick while anything moves, window resize
//! events, and the config file watcher (live reload on change).

use futures::channel::mpsc::Sender;
use iced::{
    widget::{canvas, column, row, scrollable, stack, Column, Id},
    widget::scrollable::{AbsoluteOffset, Viewport},
    window, Element, Length, Size, Subscription, Task,
};
use randvar_config::{default_path, load as load_config, AppConfig, ConfigWatcher};
use randvar_core::{
    animation::CueQueue,
    element::{ElementId, ElementUpdater},
    event::Message as AppMessage,
    Ports, RvError, SectionId, Simulator, SurfaceState,
};
use randvar_renderer::{ChartState, ParticleField};
use randvar_theme::Theme;
use randvar_widgets::{
    lesson::{self, SECTIONS, SECTION_GAP},
    nav, ChallengeSet, DiceSimulator, Navigator, SpinnerSimulator,
};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Frame interval while something is animating.
const FRAME: Duration = Duration::from_millis(16);

fn lesson_id() -> Id {
    Id::new("lesson")
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the lesson window.  Returns once the window is closed.
pub fn run() -> randvar_core::Result<()> {
    let config = startup_config(&default_path());
    let size = Size::new(config.window.width, config.window.height);

    iced::application(App::new, App::update, App::view)
        .title("Random Variables & Sample Spaces")
        .subscription(App::subscription)
        .style(App::style)
        .window_size(size)
        .run()
        .map_err(|e| RvError::Window(e.to_string()))
}

/// Config used at startup: a malformed file falls back to defaults.
fn startup_config(path: &Path) -> AppConfig {
    load_config(path).unwrap_or_else(|e| {
        warn!("Config unusable ({e}); using defaults");
        AppConfig::default()
    })
}

// ── Message ───────────────────────────────────────────────────────────────────

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Propagate a core event-bus message.
    App(AppMessage),
    /// Frame tick: particles, scroll tween, dial and reveal fades.
    Tick(Instant),
    /// The lesson page was scrolled.
    Scrolled(Viewport),
    /// The window was resized.
    Resized(Size),
}

// ── State ─────────────────────────────────────────────────────────────────────

struct App {
    config:        AppConfig,
    theme:         Theme,
    surface:       SurfaceState,
    cues:          CueQueue,
    dice:          DiceSimulator,
    dice_chart:    ChartState,
    spinner:       SpinnerSimulator,
    spinner_chart: ChartState,
    particles:     ParticleField,
    challenges:    ChallengeSet,
    nav:           Navigator,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = startup_config(&default_path());
        let theme  = Theme::from_config(&config.theme);
        let size   = Size::new(config.window.width, config.window.height);

        let mut app = Self {
            theme,
            surface:       SurfaceState::new(),
            cues:          CueQueue::new(),
            dice:          DiceSimulator::new(&config.dice),
            dice_chart:    ChartState::new(),
            spinner:       SpinnerSimulator::new(&config.spinner),
            spinner_chart: ChartState::new(),
            particles:     ParticleField::new(&config.particles, size),
            challenges:    ChallengeSet::default(),
            nav:           Navigator::new(&lesson::heights(), SECTION_GAP),
            config,
        };

        // Each simulator paints its placeholders against its own chart.
        app.dice.init(&mut Ports::new(&mut app.surface, &mut app.dice_chart, &mut app.cues));
        app.spinner.init(&mut Ports::new(
            &mut app.surface,
            &mut app.spinner_chart,
            &mut app.cues,
        ));
        app.nav.scroll(0.0, size.height - nav::HEIGHT, Instant::now());

        info!("lesson page ready: {} sections, 2 simulators", SECTIONS.len());
        let cues = app.drain_cues();
        (app, cues)
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::App(msg) => {
                self.handle_app(msg);
                self.drain_cues()
            }
            Message::Tick(now) => {
                if self.config.particles.enabled {
                    self.particles.step();
                }
                match self.nav.tick(now) {
                    Some(y) => iced::widget::operation::scroll_to(
                        lesson_id(),
                        AbsoluteOffset { x: 0.0, y },
                    ),
                    None => Task::none(),
                }
            }
            Message::Scrolled(viewport) => {
                self.nav.scroll(
                    viewport.absolute_offset().y,
                    viewport.bounds().height,
                    Instant::now(),
                );
                Task::none()
            }
            Message::Resized(size) => {
                self.particles.resize(size);
                self.nav.scroll(self.nav.offset(), size.height - nav::HEIGHT, Instant::now());
                Task::none()
            }
        }
    }

    fn handle_app(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Dice(action) => {
                let mut ports = Ports::new(&mut self.surface, &mut self.dice_chart, &mut self.cues);
                self.dice.handle(action, &mut ports);
            }
            AppMessage::Spinner(action) => {
                let mut ports =
                    Ports::new(&mut self.surface, &mut self.spinner_chart, &mut self.cues);
                self.spinner.handle(action, &mut ports);
            }
            AppMessage::ToggleAnswer(index) => {
                self.challenges.toggle(index);
            }
            AppMessage::Navigate(id) => self.nav.navigate(id, Instant::now()),
            AppMessage::Cue(cue) => cue.apply(&mut self.surface),
            AppMessage::ConfigReloaded => self.reload(),
        }
    }

    /// Apply a changed config file; history and window size are left alone.
    fn reload(&mut self) {
        match load_config(default_path()) {
            Ok(cfg) => {
                info!("Config reloaded");
                self.theme = Theme::from_config(&cfg.theme);
                self.dice.configure(&cfg.dice);
                self.spinner.configure(&cfg.spinner);
                self.surface.set_transition(ElementId::Spinner, Some(cfg.spinner.sweep()));
                self.particles.reconfigure(&cfg.particles);
                self.dice_chart.invalidate();
                self.spinner_chart.invalidate();
                self.config = cfg;
            }
            Err(e) => warn!("Config reload failed, keeping previous: {e}"),
        }
    }

    /// Turn every cue scheduled during this update into a delayed message.
    fn drain_cues(&mut self) -> Task<Message> {
        if self.cues.is_empty() {
            return Task::none();
        }
        debug!(n = self.cues.len(), "scheduling animation cues");
        Task::batch(self.cues.drain().map(|(delay, cue)| {
            Task::perform(tokio::time::sleep(delay), move |_| Message::App(AppMessage::Cue(cue)))
        }))
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        let theme = &self.theme;

        let sections = SECTIONS.iter().map(|section| {
            let alpha = self.nav.reveal_alpha(section.id, now);
            match section.id {
                SectionId::Simulators => {
                    let cards = row![
                        self.dice.view(&self.surface, &self.dice_chart, theme, alpha),
                        self.spinner.view(&self.surface, &self.spinner_chart, theme, alpha),
                    ]
                    .spacing(theme.gap as f32 * 2.0);
                    lesson::frame(
                        column![lesson::header(section, theme), cards].spacing(theme.gap as f32 * 2.0),
                        section,
                    )
                }
                SectionId::Challenges => lesson::frame(
                    column![lesson::header(section, theme), self.challenges.view(theme, alpha)]
                        .spacing(theme.gap as f32 * 2.0),
                    section,
                ),
                _ => lesson::view(section, theme, alpha),
            }
        });

        let page: Element<'_, AppMessage> = Column::with_children(sections)
            .spacing(SECTION_GAP)
            .padding([0, theme.padding * 3])
            .into();

        let content: Element<'_, Message> = column![
            self.nav.view(theme).map(Message::App),
            scrollable(page.map(Message::App))
                .id(lesson_id())
                .on_scroll(Message::Scrolled)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .into();

        if self.config.particles.enabled {
            stack![
                canvas(&self.particles).width(Length::Fill).height(Length::Fill),
                content,
            ]
            .into()
        } else {
            content
        }
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let now = Instant::now();
        let animating = self.config.particles.enabled
            || self.surface.is_animating(now)
            || self.nav.is_animating(now);

        let mut subs = vec![
            window::resize_events().map(|(_id, size)| Message::Resized(size)),
            Subscription::run(config_stream),
        ];
        if animating {
            subs.push(iced::time::every(FRAME).map(Message::Tick));
        }
        Subscription::batch(subs)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color:       self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `~/.config/randvar/randvar.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (watcher, mut rx) = ConfigWatcher::spawn(default_path());
        debug!(path = %watcher.path().display(), "config watcher running");

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::App(AppMessage::ConfigReloaded));
        }

        error!("Config watcher stopped; live reload disabled");
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
