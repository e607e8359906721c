use crate::{colors::Color, Theme};
use iced::widget::{button, container};
use iced::{Background, Border, Shadow, Vector};

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Filled with the given accent.
    Primary,
    /// Outlined, transparent body.
    Secondary,
    /// Bare text; used for navigation links.
    Link { active: bool },
}

/// Style closure for a content card. `alpha` fades the whole card in.
pub fn card_style(theme: &Theme, alpha: f32) -> impl Fn(&iced::Theme) -> container::Style {
    let bg     = theme.surface.fade(0.85 * alpha);
    let border = theme.accent.with_alpha(0.2 * alpha);
    let text   = theme.foreground.fade(alpha);
    let radius = theme.border_radius;

    move |_: &iced::Theme| container::Style {
        text_color: Some(text.to_iced()),
        background: Some(Background::Color(bg.to_iced())),
        border: Border { color: border.to_iced(), width: 1.0, radius: radius.into() },
        ..Default::default()
    }
}

/// Style closure for the navigation header; gains a backdrop once scrolled.
pub fn nav_style(theme: &Theme, scrolled: bool) -> impl Fn(&iced::Theme) -> container::Style {
    let bg = if scrolled { theme.background.with_alpha(0.95) } else { Color::TRANSPARENT };
    let shadow = if scrolled {
        Shadow {
            color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        }
    } else {
        Shadow::default()
    };

    move |_: &iced::Theme| container::Style {
        background: Some(Background::Color(bg.to_iced())),
        shadow,
        ..Default::default()
    }
}

/// Style closure for buttons, tinted with `tint`.
pub fn button_style(
    theme: &Theme,
    kind: ButtonKind,
    tint: Color,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    let fg     = theme.foreground;
    let muted  = theme.muted;
    let radius = theme.border_radius * 0.75;

    move |_: &iced::Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        match kind {
            ButtonKind::Primary => button::Style {
                background: Some(Background::Color(
                    tint.with_alpha(if hovered { 1.0 } else { 0.85 }).to_iced(),
                )),
                text_color: fg.to_iced(),
                border: Border { color: tint.to_iced(), width: 0.0, radius: radius.into() },
                ..Default::default()
            },
            ButtonKind::Secondary => button::Style {
                background: Some(Background::Color(
                    tint.with_alpha(if hovered { 0.2 } else { 0.0 }).to_iced(),
                )),
                text_color: fg.to_iced(),
                border: Border { color: tint.to_iced(), width: 1.5, radius: radius.into() },
                ..Default::default()
            },
            ButtonKind::Link { active } => button::Style {
                background: None,
                text_color: if active || hovered { tint.to_iced() } else { muted.to_iced() },
                border: Border::default(),
                ..Default::default()
            },
        }
    }
}
