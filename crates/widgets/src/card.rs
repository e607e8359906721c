//! Small building blocks shared by the simulator cards.

use randvar_core::{event::Action, Message};
use randvar_theme::{button_style, card_style, ButtonKind, Color, Theme};
use iced::{
    widget::{button, column, container, row, text},
    Alignment, Element, Length,
};

/// A value over a caption, e.g. `12` / `Total Rolls`.
pub fn stat<'a>(caption: &'a str, value: &'a str, theme: &Theme) -> Element<'a, Message> {
    column![
        text(value).size(theme.font_size * 1.6).color(theme.foreground.to_iced()),
        text(caption).size(theme.font_size * 0.85).color(theme.muted.to_iced()),
    ]
    .align_x(Alignment::Center)
    .spacing(2)
    .width(Length::Fill)
    .into()
}

/// The single / batch / reset button row every simulator shows.
pub fn action_row<'a>(
    labels: [&'a str; 3],
    wrap: fn(Action) -> Message,
    tint: Color,
    theme: &Theme,
) -> Element<'a, Message> {
    let [single, batch, reset] = labels;
    let pad = [8, 16];

    row![
        button(text(single).size(theme.font_size))
            .on_press(wrap(Action::Single))
            .padding(pad)
            .style(button_style(theme, ButtonKind::Primary, tint)),
        button(text(batch).size(theme.font_size))
            .on_press(wrap(Action::Batch))
            .padding(pad)
            .style(button_style(theme, ButtonKind::Primary, tint)),
        button(text(reset).size(theme.font_size))
            .on_press(wrap(Action::Reset))
            .padding(pad)
            .style(button_style(theme, ButtonKind::Secondary, tint)),
    ]
    .spacing(theme.gap as f32)
    .align_y(Alignment::Center)
    .into()
}

/// Wrap `content` in a themed card container faded to `alpha`.
pub fn card<'a>(
    content: impl Into<Element<'a, Message>>,
    theme: &Theme,
    alpha: f32,
) -> Element<'a, Message> {
    container(content)
        .padding(theme.padding * 3 / 2)
        .width(Length::Fill)
        .style(card_style(theme, alpha))
        .into()
}
