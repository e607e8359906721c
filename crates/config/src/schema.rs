use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure parsed from `randvar.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial window geometry.
    pub window: WindowConfig,
    /// Dice simulator settings.
    pub dice: DiceConfig,
    /// Spinner simulator settings.
    pub spinner: SpinnerConfig,
    /// Animated particle background.
    pub particles: ParticleConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Initial window size in logical pixels (applied at launch only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width:  f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 1100.0, height: 820.0 }
    }
}

/// Dice simulator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceConfig {
    /// Rolls performed by the "Roll 100 Times" button.
    pub batch_size: usize,
    /// How long the die glyph stays in its rolling state (milliseconds).
    pub rolling_ms: u64,
}

impl DiceConfig {
    pub fn rolling(&self) -> Duration {
        Duration::from_millis(self.rolling_ms)
    }
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self { batch_size: 100, rolling_ms: 500 }
    }
}

/// Spinner simulator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerConfig {
    /// Spins performed by the "Spin 100 Times" button.
    pub batch_size: usize,
    /// Most recent spins drawn on the chart.
    pub window: usize,
    /// Length of the dial sweep (milliseconds).
    pub sweep_ms: u64,
    /// Delay between the snap-back and re-arming the sweep (milliseconds).
    pub rearm_ms: u64,
    /// Full turns the dial makes before landing on the value.
    pub sweep_turns: u32,
}

impl SpinnerConfig {
    pub fn sweep(&self) -> Duration {
        Duration::from_millis(self.sweep_ms)
    }

    pub fn rearm(&self) -> Duration {
        Duration::from_millis(self.rearm_ms)
    }
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            batch_size:  100,
            window:      50,
            sweep_ms:    2_000,
            rearm_ms:    50,
            sweep_turns: 3,
        }
    }
}

/// Particle background settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub enabled: bool,
    /// Number of particles in the field.
    pub count: usize,
    /// Pairs closer than this (pixels) are joined by a line.
    pub link_distance: f32,
    /// Per-axis speed bound (pixels per frame); velocities fall in `[-max/2, max/2)`.
    pub max_speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self { enabled: true, count: 50, link_distance: 150.0, max_speed: 0.5 }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#0f172a"`).
    pub background: String,
    /// Card background color.
    pub surface: String,
    /// Primary text color.
    pub foreground: String,
    /// Secondary text color (captions, axis ticks).
    pub muted: String,
    /// Accent / highlight color.
    pub accent: String,
    /// Second accent used by the spinner.
    pub secondary: String,
    /// Warm highlight used for callouts.
    pub warm: String,
    /// Base font size in points.
    pub font_size: f32,
    /// Corner radius for cards and buttons (pixels).
    pub border_radius: f32,
    /// Inner padding for each card (pixels).
    pub padding: u16,
    /// Gap between items (pixels).
    pub gap: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:    "#0f172a".to_string(), // slate 900
            surface:       "#1e293b".to_string(), // slate 800
            foreground:    "#f1f5f9".to_string(), // slate 100
            muted:         "#cbd5e1".to_string(), // slate 300
            accent:        "#6366f1".to_string(), // indigo 500
            secondary:     "#06b6d4".to_string(), // cyan 500
            warm:          "#f59e0b".to_string(), // amber 500
            font_size:     15.0,
            border_radius: 12.0,
            padding:       16,
            gap:           12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r##"
            [spinner]
            window = 20

            [theme]
            accent = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(cfg.spinner.window, 20);
        assert_eq!(cfg.spinner.batch_size, 100);
        assert_eq!(cfg.spinner.sweep(), Duration::from_secs(2));
        assert_eq!(cfg.theme.accent, "#ff0000");
        assert_eq!(cfg.theme.background, ThemeConfig::default().background);
    }

    #[test]
    fn dice_defaults() {
        let dice = DiceConfig::default();
        assert_eq!(dice.batch_size, 100);
        assert_eq!(dice.rolling(), Duration::from_millis(500));
    }
}
