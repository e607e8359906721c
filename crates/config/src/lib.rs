pub mod schema;
pub mod watcher;

pub use schema::{AppConfig, DiceConfig, ParticleConfig, SpinnerConfig, ThemeConfig, WindowConfig};
pub use watcher::ConfigWatcher;

use randvar_core::{Result, RvError};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `AppConfig::default()` if
/// the file doesn't exist so the app always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(AppConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;

    parse(&raw)
}

/// Parse a TOML document into an [`AppConfig`].
pub fn parse(raw: &str) -> Result<AppConfig> {
    toml::from_str(raw).map_err(|e| RvError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("randvar").join("randvar.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("randvar-definitely-missing.toml");
        let cfg = load(&path).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = parse("[dice\nbatch_size = ").unwrap_err();
        assert!(matches!(err, RvError::Config(_)));
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!("randvar-{}.toml", std::process::id()));
        std::fs::write(&path, "[dice]\nbatch_size = 10\n").unwrap();
        let cfg = load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg.dice.batch_size, 10);
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        // A directory exists but cannot be read as a file.
        let err = load(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, RvError::Io { .. }));
    }

    #[test]
    fn default_path_ends_with_app_file() {
        assert!(default_path().ends_with("randvar/randvar.toml"));
    }
}
