pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{button_style, card_style, nav_style, ButtonKind};

use randvar_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible: invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:    Color,
    /// Card background.
    pub surface:       Color,
    pub foreground:    Color,
    pub muted:         Color,
    pub accent:        Color,
    pub secondary:     Color,
    pub warm:          Color,
    pub font_size:     f32,
    pub border_radius: f32,
    pub padding:       u16,
    pub gap:           u16,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background:    Color::from_hex(&cfg.background).unwrap_or(Color::SLATE_900),
            surface:       Color::from_hex(&cfg.surface).unwrap_or(Color::SLATE_800),
            foreground:    Color::from_hex(&cfg.foreground).unwrap_or(Color::SLATE_100),
            muted:         Color::from_hex(&cfg.muted).unwrap_or(Color::SLATE_300),
            accent:        Color::from_hex(&cfg.accent).unwrap_or(Color::INDIGO),
            secondary:     Color::from_hex(&cfg.secondary).unwrap_or(Color::CYAN),
            warm:          Color::from_hex(&cfg.warm).unwrap_or(Color::AMBER),
            font_size:     cfg.font_size.max(6.0),
            border_radius: cfg.border_radius.max(0.0),
            padding:       cfg.padding,
            gap:           cfg.gap,
        }
    }

    /// Heading size for a given level (1 = largest).
    pub fn heading_size(&self, level: u8) -> f32 {
        match level {
            0 | 1 => self.font_size * 2.4,
            2     => self.font_size * 1.6,
            3     => self.font_size * 1.4,
            _     => self.font_size * 1.2,
        }
    }

    /// Chart grid line color.
    pub fn grid(&self) -> Color {
        self.accent.with_alpha(0.1)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
