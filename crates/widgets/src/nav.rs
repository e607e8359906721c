//! Header navigation, active-section tracking, scroll reveal and smooth
//! scrolling for the lesson page.

use iced::{
    widget::{button, container, row, text, Space},
    Alignment, Element, Length,
};
use randvar_core::{easing::CubicBezier, Message, SectionId};
use randvar_theme::{button_style, nav_style, ButtonKind, Theme};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Offset past which the header switches to its scrolled style.
pub const SCROLLED_AFTER: f32 = 50.0;
/// Fraction of a section that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;
/// The bottom of the viewport is shrunk by this much for reveal checks.
pub const REVEAL_MARGIN: f32 = 100.0;

/// Fixed height of the navigation header.
pub const HEIGHT: f32 = 56.0;

const REVEAL_FADE: Duration = Duration::from_millis(600);
const SCROLL_DURATION: Duration = Duration::from_millis(600);

/// Vertical span of one section in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub id:     SectionId,
    pub top:    f32,
    pub height: f32,
}

impl Extent {
    fn bottom(&self) -> f32 {
        self.top + self.height
    }

    fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }

    /// Visible share of this extent within `[start, end)`.
    fn visible_ratio(&self, start: f32, end: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let overlap = end.min(self.bottom()) - start.max(self.top);
        (overlap / self.height).max(0.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct ScrollTween {
    from:    f32,
    to:      f32,
    started: Instant,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    extents:  Vec<Extent>,
    offset:   f32,
    viewport: f32,
    active:   Option<SectionId>,
    revealed: HashMap<SectionId, Instant>,
    tween:    Option<ScrollTween>,
    ease:     CubicBezier,
}

impl Navigator {
    /// Lay sections out top to bottom with `gap` between them.
    pub fn new(heights: &[(SectionId, f32)], gap: f32) -> Self {
        let mut top = 0.0;
        let extents = heights
            .iter()
            .map(|&(id, height)| {
                let extent = Extent { id, top, height };
                top += height + gap;
                extent
            })
            .collect();

        Self {
            extents,
            offset: 0.0,
            viewport: 0.0,
            active: None,
            revealed: HashMap::new(),
            tween: None,
            ease: CubicBezier::EASE,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_AFTER
    }

    /// Section under the viewport's vertical midpoint; sticks to the last
    /// match while the midpoint sits in a gap.
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains_key(&id)
    }

    /// Record a new scroll position and viewport height.
    pub fn scroll(&mut self, offset: f32, viewport: f32, now: Instant) {
        self.offset = offset.max(0.0);
        self.viewport = viewport.max(0.0);

        let mid = self.offset + self.viewport / 2.0;
        if let Some(extent) = self.extents.iter().find(|e| e.contains(mid)) {
            if self.active != Some(extent.id) {
                debug!(section = ?extent.id, "nav: active section");
                self.active = Some(extent.id);
            }
        }

        let start = self.offset;
        let end = self.offset + self.viewport - REVEAL_MARGIN;
        if end <= start {
            return;
        }
        for extent in &self.extents {
            if self.revealed.contains_key(&extent.id) {
                continue;
            }
            let ratio = extent.visible_ratio(start, end);
            if ratio > 0.0 && ratio >= REVEAL_THRESHOLD {
                debug!(section = ?extent.id, "nav: revealed");
                self.revealed.insert(extent.id, now);
            }
        }
    }

    /// Card opacity for a section: 0 until revealed, then an eased fade to 1.
    pub fn reveal_alpha(&self, id: SectionId, now: Instant) -> f32 {
        let Some(&at) = self.revealed.get(&id) else {
            return 0.0;
        };
        let t = now.saturating_duration_since(at).as_secs_f64() / REVEAL_FADE.as_secs_f64();
        self.ease.at(t) as f32
    }

    /// Start a smooth scroll that brings `id` to the top of the viewport.
    pub fn navigate(&mut self, id: SectionId, now: Instant) {
        let Some(extent) = self.extents.iter().find(|e| e.id == id) else {
            return;
        };
        let to = extent.top.min(self.max_offset());
        debug!(section = ?id, from = self.offset, to, "nav: scrolling");
        self.tween = Some(ScrollTween { from: self.offset, to, started: now });
    }

    /// Offset the page should be scrolled to this frame, if a smooth scroll
    /// is in flight.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let tween = self.tween?;
        let t = now.saturating_duration_since(tween.started).as_secs_f64()
            / SCROLL_DURATION.as_secs_f64();
        if t >= 1.0 {
            self.tween = None;
            return Some(tween.to);
        }
        let eased = self.ease.at(t) as f32;
        Some(tween.from + (tween.to - tween.from) * eased)
    }

    /// True while a scroll or a reveal fade needs frames.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tween.is_some()
            || self
                .revealed
                .values()
                .any(|&at| now.saturating_duration_since(at) < REVEAL_FADE)
    }

    fn content_height(&self) -> f32 {
        self.extents.last().map(Extent::bottom).unwrap_or(0.0)
    }

    fn max_offset(&self) -> f32 {
        (self.content_height() - self.viewport).max(0.0)
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let links = SectionId::ALL.iter().fold(row![].spacing(theme.gap as f32 / 2.0), |links, &id| {
            let active = self.active == Some(id);
            links.push(
                button(text(id.label()).size(theme.font_size * 0.95))
                    .on_press(Message::Navigate(id))
                    .padding([6, 10])
                    .style(button_style(theme, ButtonKind::Link { active }, theme.accent)),
            )
        });

        let bar = row![
            text("🎲 RandVar").size(theme.heading_size(4)).color(theme.accent.to_iced()),
            Space::new().width(Length::Fill),
            links,
        ]
        .align_y(Alignment::Center);

        container(bar)
            .padding([0, theme.padding * 2])
            .width(Length::Fill)
            .center_y(Length::Fixed(HEIGHT))
            .style(nav_style(theme, self.is_scrolled()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Navigator {
        Navigator::new(
            &[
                (SectionId::Home, 400.0),
                (SectionId::SampleSpace, 600.0),
                (SectionId::Discrete, 600.0),
            ],
            0.0,
        )
    }

    #[test]
    fn layout_stacks_sections_with_gaps() {
        let now = Instant::now();
        let mut nav = Navigator::new(&[(SectionId::Home, 100.0), (SectionId::Discrete, 200.0)], 10.0);
        nav.navigate(SectionId::Discrete, now);
        assert_eq!(nav.tick(now + SCROLL_DURATION), Some(110.0));
    }

    #[test]
    fn scrolled_only_past_fifty() {
        let now = Instant::now();
        let mut nav = page();
        nav.scroll(50.0, 800.0, now);
        assert!(!nav.is_scrolled());
        nav.scroll(51.0, 800.0, now);
        assert!(nav.is_scrolled());
        nav.scroll(0.0, 800.0, now);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn active_section_follows_midpoint() {
        let now = Instant::now();
        let mut nav = page();
        nav.scroll(0.0, 600.0, now);
        // Midpoint 300 lies in Home.
        assert_eq!(nav.active(), Some(SectionId::Home));
        nav.scroll(200.0, 600.0, now);
        // Midpoint 500 lies in SampleSpace.
        assert_eq!(nav.active(), Some(SectionId::SampleSpace));
        nav.scroll(1_100.0, 600.0, now);
        assert_eq!(nav.active(), Some(SectionId::Discrete));
    }

    #[test]
    fn reveal_needs_ten_percent_above_margin() {
        let now = Instant::now();
        let mut nav = page();
        // Effective viewport [0, 450): SampleSpace starts at 400, 50/600 < 10%.
        nav.scroll(0.0, 550.0, now);
        assert!(nav.is_revealed(SectionId::Home));
        assert!(!nav.is_revealed(SectionId::SampleSpace));
        // Effective viewport [0, 470): 70/600 > 10%.
        nav.scroll(20.0, 550.0, now);
        assert!(nav.is_revealed(SectionId::SampleSpace));
    }

    #[test]
    fn revealed_sections_stay_revealed() {
        let now = Instant::now();
        let mut nav = page();
        nav.scroll(0.0, 800.0, now);
        nav.scroll(1_000.0, 600.0, now);
        assert!(nav.is_revealed(SectionId::Home));
        assert_eq!(nav.reveal_alpha(SectionId::Home, now + REVEAL_FADE), 1.0);
    }

    #[test]
    fn unrevealed_sections_are_invisible() {
        let nav = page();
        assert_eq!(nav.reveal_alpha(SectionId::Discrete, Instant::now()), 0.0);
    }

    #[test]
    fn navigate_tweens_to_section_top() {
        let now = Instant::now();
        let mut nav = page();
        nav.scroll(0.0, 600.0, now);
        nav.navigate(SectionId::SampleSpace, now);

        let mid = nav.tick(now + SCROLL_DURATION / 2).unwrap();
        assert!(mid > 0.0 && mid < 400.0);
        assert_eq!(nav.tick(now + SCROLL_DURATION), Some(400.0));
        assert_eq!(nav.tick(now + SCROLL_DURATION * 2), None);
    }

    #[test]
    fn navigate_clamps_to_page_end() {
        let now = Instant::now();
        let mut nav = page();
        nav.scroll(0.0, 800.0, now);
        nav.navigate(SectionId::Discrete, now);
        // Content is 1600 tall; the last 800 fit in the viewport.
        assert_eq!(nav.tick(now + SCROLL_DURATION), Some(800.0));
    }
}
