//! Diagnostic logging and chat transcripts on disk.
//!
//! The terminal belongs to the UI, so nothing is ever logged to stdout. When
//! enabled, `tracing` output goes to `<log_dir>/skillsprout.log` and chat
//! transcripts go to daily files named `chatbot_<date>.log`.

use crate::chat::{ChatMessage, Sender};
use crate::config::model::{default_timestamp_format, is_valid_timestamp_format};
use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~/` in `log_dir` to the home directory.
pub fn resolve_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(log_dir)
}

/// Install the global `tracing` subscriber. No-op when logging is disabled.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }
    let log_dir = resolve_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join("skillsprout.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(())
}

/// Appends chat messages to a daily transcript file.
///
/// The file handle is cached for the lifetime of the logger. Write failures
/// are ignored; transcripts are best-effort.
pub struct TranscriptLogger {
    enabled: bool,
    log_dir: PathBuf,
    timestamp_format: String,
    file: Option<(String, fs::File)>,
}

impl TranscriptLogger {
    pub fn new(config: &LoggingConfig, timestamp_format: &str) -> Self {
        Self {
            enabled: config.transcripts,
            log_dir: resolve_log_dir(&config.log_dir),
            timestamp_format: if is_valid_timestamp_format(timestamp_format) {
                timestamp_format.to_string()
            } else {
                default_timestamp_format()
            },
            file: None,
        }
    }

    pub fn format_line(&self, msg: &ChatMessage) -> String {
        let who = match msg.sender {
            Sender::User => "you",
            Sender::Bot => "assistant",
        };
        format!(
            "[{}] <{}> {}",
            msg.timestamp.format(&self.timestamp_format),
            who,
            msg.text
        )
    }

    pub fn log_message(&mut self, msg: &ChatMessage) {
        if !self.enabled {
            return;
        }
        let line = self.format_line(msg);
        let filename = format!("chatbot_{}.log", msg.timestamp.format("%Y-%m-%d"));

        let stale = self.file.as_ref().map(|(name, _)| name != &filename).unwrap_or(true);
        if stale {
            let _ = fs::create_dir_all(&self.log_dir);
            match OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.log_dir.join(&filename))
            {
                Ok(file) => self.file = Some((filename, file)),
                Err(e) => {
                    tracing::warn!("cannot open transcript {}: {}", filename, e);
                    self.enabled = false;
                    return;
                }
            }
        }

        if let Some((_, file)) = self.file.as_mut() {
            let _ = writeln!(file, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::conversation::MessageId;
    use chrono::{Local, TimeZone};

    fn message(sender: Sender, text: &str) -> ChatMessage {
        ChatMessage {
            id: MessageId(1),
            text: text.to_string(),
            sender,
            timestamp: Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_line() {
        let logger = TranscriptLogger::new(&LoggingConfig::default(), "%H:%M");
        assert_eq!(
            logger.format_line(&message(Sender::User, "hi")),
            "[14:05] <you> hi"
        );
        assert_eq!(
            logger.format_line(&message(Sender::Bot, "hello")),
            "[14:05] <assistant> hello"
        );
    }

    #[test]
    fn test_unrenderable_format_uses_default() {
        let logger = TranscriptLogger::new(&LoggingConfig::default(), "%Q");
        assert_eq!(
            logger.format_line(&message(Sender::User, "hi")),
            "[14:05] <you> hi"
        );
    }

    #[test]
    fn test_writes_daily_file() {
        let dir = std::env::temp_dir().join(format!("skillsprout-test-{}", std::process::id()));
        let config = LoggingConfig {
            transcripts: true,
            log_dir: dir.display().to_string(),
            ..LoggingConfig::default()
        };
        let mut logger = TranscriptLogger::new(&config, "%H:%M");
        logger.log_message(&message(Sender::User, "first"));
        logger.log_message(&message(Sender::Bot, "second"));
        drop(logger);

        let contents = fs::read_to_string(dir.join("chatbot_2024-03-09.log")).unwrap();
        assert_eq!(contents, "[14:05] <you> first\n[14:05] <assistant> second\n");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("skillsprout-off-{}", std::process::id()));
        let config = LoggingConfig {
            transcripts: false,
            log_dir: dir.display().to_string(),
            ..LoggingConfig::default()
        };
        let mut logger = TranscriptLogger::new(&config, "%H:%M");
        logger.log_message(&message(Sender::User, "first"));
        assert!(!dir.exists());
    }

    #[test]
    fn test_resolve_log_dir() {
        assert_eq!(resolve_log_dir("/var/log/x"), PathBuf::from("/var/log/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_log_dir("~/logs"), home.join("logs"));
        }
    }
}
