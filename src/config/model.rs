//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Chat transcript length before the oldest messages are dropped.
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Route path shown at startup, e.g. `"/chatbot"`.
    #[serde(default = "default_start_page")]
    pub start_page: String,
}

impl UiConfig {
    /// Replace a `timestamp_format` chrono cannot render with the default.
    /// Returns true if the value was replaced.
    pub fn sanitize(&mut self) -> bool {
        if is_valid_timestamp_format(&self.timestamp_format) {
            return false;
        }
        warn!(
            format = %self.timestamp_format,
            "invalid timestamp_format; using {}",
            default_timestamp_format()
        );
        self.timestamp_format = default_timestamp_format();
        true
    }
}

/// True if every strftime specifier in `fmt` is one chrono understands.
pub fn is_valid_timestamp_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_messages: default_max_messages(),
            tick_rate_ms: default_tick_rate(),
            start_page: default_start_page(),
        }
    }
}

/// Scripted chatbot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Simulated "typing" delay before a bot reply appears.
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_toast_duration")]
    pub duration_secs: u64,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_toast_duration(),
            max_visible: default_max_visible(),
        }
    }
}

/// Diagnostic log and chat transcript settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Filter directive for the diagnostic log (`RUST_LOG` overrides it).
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub transcripts: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
            transcripts: false,
        }
    }
}

pub fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_max_messages() -> usize {
    500
}
fn default_tick_rate() -> u64 {
    50
}
fn default_start_page() -> String {
    "/".to_string()
}
fn default_reply_delay() -> u64 {
    1500
}
fn default_toast_duration() -> u64 {
    4
}
fn default_max_visible() -> usize {
    3
}
fn default_log_dir() -> String {
    "~/.local/share/skillsprout/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
