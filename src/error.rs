//! Typed parse errors: route paths (`ui.start_page`) and the voice-setting
//! name parsers (`Language`, `PlaybackSpeed`, `VoiceKind` via `FromStr`).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route path: {0:?}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown language: {0:?}")]
    Language(String),
    #[error("unknown playback speed: {0:?}")]
    Speed(String),
    #[error("unknown voice: {0:?}")]
    Voice(String),
}
