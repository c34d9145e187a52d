// In crates/app-config/src/types.rs

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    /// The application's general settings.
    #[serde(default)]
    pub app: AppSettings,
    /// Where the journal document and its exports live.
    #[serde(default)]
    pub journal: JournalSettings,
    #[serde(default)]
    pub metrics: MetricsSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    #[serde(default = "default_environment")]
    pub environment: String,
    /// The log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct JournalSettings {
    /// The JSON document holding every record, newest first.
    #[serde(default = "default_journal_path")]
    pub path: PathBuf,
    /// Default target for `export` when no path is given.
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            path: default_journal_path(),
            export_path: default_export_path(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct MetricsSettings {
    /// Net results within this distance of zero are classed as breakeven.
    #[serde(default = "default_breakeven_epsilon")]
    pub breakeven_epsilon: Decimal,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            breakeven_epsilon: default_breakeven_epsilon(),
        }
    }
}

/// Helper functions for serde defaults
fn default_environment() -> String { "development".into() }
fn default_log_level() -> String { "info".into() }
fn default_journal_path() -> PathBuf { PathBuf::from("data/journal.json") }
fn default_export_path() -> PathBuf { PathBuf::from("data/journal.csv") }
fn default_breakeven_epsilon() -> Decimal { analytics::BREAKEVEN_EPSILON }
