use randvar_core::chart::Rgba;

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const SLATE_900:   Self = Self { r: 0.059, g: 0.090, b: 0.165, a: 1.0 }; // #0f172a
    pub const SLATE_800:   Self = Self { r: 0.118, g: 0.161, b: 0.231, a: 1.0 }; // #1e293b
    pub const SLATE_100:   Self = Self { r: 0.945, g: 0.961, b: 0.976, a: 1.0 }; // #f1f5f9
    pub const SLATE_300:   Self = Self { r: 0.796, g: 0.835, b: 0.882, a: 1.0 }; // #cbd5e1
    pub const INDIGO:      Self = Self { r: 0.388, g: 0.400, b: 0.945, a: 1.0 }; // #6366f1
    pub const CYAN:        Self = Self { r: 0.024, g: 0.714, b: 0.831, a: 1.0 }; // #06b6d4
    pub const AMBER:       Self = Self { r: 0.961, g: 0.620, b: 0.043, a: 1.0 }; // #f59e0b
    pub const TRANSPARENT: Self = Self { r: 0.0,   g: 0.0,   b: 0.0,   a: 0.0 };

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    /// Return a copy with the alpha channel scaled by `factor`.
    #[inline]
    #[must_use]
    pub fn fade(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Self {
            r: f32::from(c.r) / 255.0,
            g: f32::from(c.g) / 255.0,
            b: f32::from(c.b) / 255.0,
            a: c.a.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        let c = Color::from_hex("#ff0080").unwrap();
        assert_eq!((c.r, c.g, c.a), (1.0, 0.0, 1.0));
        let c = Color::from_hex("00000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn from_rgba_hint() {
        let c = Color::from(Rgba::new(255, 0, 0, 0.5));
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 0.0, a: 0.5 });
    }

    #[test]
    fn fade_scales_alpha() {
        let c = Color::INDIGO.with_alpha(0.5).fade(0.5);
        assert!((c.a - 0.25).abs() < 1e-6);
    }
}
