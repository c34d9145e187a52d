// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use rust_decimal::Decimal;
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, JournalSettings, MetricsSettings, Settings};

/// Loads the application settings from the `config/` directory.
///
/// Sources are layered, later ones winning:
/// 1. `config/base.toml`.
/// 2. An environment-specific file (e.g., `config/development.toml`), picked by `APP_ENVIRONMENT`.
/// 3. Environment variables (e.g., `APP__JOURNAL__PATH=...`).
///
/// Every file is optional; anything left unset falls back to its default.
pub fn load_settings() -> Result<Settings> {
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());
    load_settings_from(Path::new("config"), &environment)
}

/// Same layering as [`load_settings`], rooted at `dir`.
pub fn load_settings_from(dir: &Path, environment: &str) -> Result<Settings> {
    let settings = Config::builder()
        .add_source(File::with_name(&dir.join("base").to_string_lossy()).required(false))
        .add_source(File::with_name(&dir.join(environment).to_string_lossy()).required(false))
        // The prefix is `APP`, separator is `__`.
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;
    settings.app.environment = environment.to_string();
    validate(&settings)?;

    Ok(settings)
}

fn validate(settings: &Settings) -> Result<()> {
    if settings.metrics.breakeven_epsilon < Decimal::ZERO {
        return Err(Error::InvalidValue {
            key: "metrics.breakeven_epsilon",
            reason: format!("must not be negative, got {}", settings.metrics.breakeven_epsilon),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(dir.path(), "test").unwrap();
        assert_eq!(settings.app.environment, "test");
        assert_eq!(settings.app.log_level, "info");
        assert_eq!(settings.journal.path, Path::new("data/journal.json"));
        assert_eq!(settings.metrics.breakeven_epsilon, analytics::BREAKEVEN_EPSILON);
    }

    #[test]
    fn environment_file_overrides_base() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("base.toml"),
            "[app]\nlog_level = \"debug\"\n\n[journal]\npath = \"base.json\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.toml"),
            "[journal]\npath = \"staging.json\"\n\n[metrics]\nbreakeven_epsilon = \"0.01\"\n",
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), "staging").unwrap();
        assert_eq!(settings.app.log_level, "debug");
        assert_eq!(settings.journal.path, Path::new("staging.json"));
        assert_eq!(settings.metrics.breakeven_epsilon, dec!(0.01));
    }

    #[test]
    fn negative_epsilon_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("base.toml"),
            "[metrics]\nbreakeven_epsilon = \"-1\"\n",
        )
        .unwrap();
        let err = load_settings_from(dir.path(), "development").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { key: "metrics.breakeven_epsilon", .. }));
    }
}
