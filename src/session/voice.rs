//! Voice-mode settings. Each setting is a closed set of named values that
//! the UI cycles through.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Telugu,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Telugu, Language::Hindi];

    /// Name as written in the language itself (button labels).
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Telugu => "తెలుగు",
            Language::Hindi => "हिन्दी",
        }
    }

    pub fn next(&self) -> Language {
        cycle(&Self::ALL, *self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl PlaybackSpeed {
    pub const ALL: [PlaybackSpeed; 3] = [PlaybackSpeed::Slow, PlaybackSpeed::Normal, PlaybackSpeed::Fast];

    pub fn next(&self) -> PlaybackSpeed {
        cycle(&Self::ALL, *self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VoiceKind {
    #[default]
    Female,
    Male,
}

impl VoiceKind {
    pub const ALL: [VoiceKind; 2] = [VoiceKind::Female, VoiceKind::Male];

    pub fn next(&self) -> VoiceKind {
        cycle(&Self::ALL, *self)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::English => "English",
            Language::Telugu => "Telugu",
            Language::Hindi => "Hindi",
        })
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlaybackSpeed::Slow => "Slow",
            PlaybackSpeed::Normal => "Normal",
            PlaybackSpeed::Fast => "Fast",
        })
    }
}

impl fmt::Display for VoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VoiceKind::Female => "Female",
            VoiceKind::Male => "Male",
        })
    }
}

// Names parse from either their English form or the native script.
impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|l| l.to_string().eq_ignore_ascii_case(s) || l.native_name() == s)
            .copied()
            .ok_or_else(|| ParseError::Language(s.to_string()))
    }
}

impl FromStr for PlaybackSpeed {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.to_string().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ParseError::Speed(s.to_string()))
    }
}

impl FromStr for VoiceKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.to_string().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ParseError::Voice(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("English".parse::<Language>(), Ok(Language::English));
        assert_eq!("hindi".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!("తెలుగు".parse::<Language>(), Ok(Language::Telugu));
        assert_eq!("Fast".parse::<PlaybackSpeed>(), Ok(PlaybackSpeed::Fast));
        assert_eq!("male".parse::<VoiceKind>(), Ok(VoiceKind::Male));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Klingon".parse::<Language>(),
            Err(ParseError::Language("Klingon".into()))
        );
        assert_eq!(
            "Ludicrous".parse::<PlaybackSpeed>(),
            Err(ParseError::Speed("Ludicrous".into()))
        );
        assert!("Robot".parse::<VoiceKind>().is_err());
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Language::Hindi.next(), Language::English);
        assert_eq!(PlaybackSpeed::Normal.next(), PlaybackSpeed::Fast);
        assert_eq!(PlaybackSpeed::Fast.next(), PlaybackSpeed::Slow);
        assert_eq!(VoiceKind::Male.next(), VoiceKind::Female);
    }
}
