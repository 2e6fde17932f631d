use crate::error::RouteError;
use std::fmt;
use std::str::FromStr;

/// Pages of the app. Paths double as `ui.start_page` values and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Skills,
    VoiceMode,
    Chatbot,
    Features,
}

impl Route {
    /// Tab order in the navigation bar (also the F1..F5 order).
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Skills,
        Route::VoiceMode,
        Route::Chatbot,
        Route::Features,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Skills => "/skills",
            Route::VoiceMode => "/voice-mode",
            Route::Chatbot => "/chatbot",
            Route::Features => "/features",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Skills => "Skills",
            Route::VoiceMode => "Voice Mode",
            Route::Chatbot => "Chatbot",
            Route::Features => "Features",
        }
    }

    /// Route bound to function key `F<n>`.
    pub fn from_function_key(n: u8) -> Option<Route> {
        Self::ALL.get((n as usize).checked_sub(1)?).copied()
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|r| r.path() == path)
            .copied()
            .ok_or_else(|| RouteError::Unknown(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert_eq!("/skills".parse::<Route>(), Ok(Route::Skills));
        assert_eq!("/voice-mode".parse::<Route>(), Ok(Route::VoiceMode));
        assert_eq!("/chatbot".parse::<Route>(), Ok(Route::Chatbot));
        assert_eq!("/features".parse::<Route>(), Ok(Route::Features));
    }

    #[test]
    fn test_parse_rejects_unknown_and_near_misses() {
        assert_eq!(
            "/loans".parse::<Route>(),
            Err(RouteError::Unknown("/loans".into()))
        );
        assert!("/Skills".parse::<Route>().is_err());
        assert!("/skills/".parse::<Route>().is_err());
        assert!("".parse::<Route>().is_err());
    }

    #[test]
    fn test_display_is_path() {
        for route in Route::ALL {
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(Route::from_function_key(1), Some(Route::Home));
        assert_eq!(Route::from_function_key(4), Some(Route::Chatbot));
        assert_eq!(Route::from_function_key(0), None);
        assert_eq!(Route::from_function_key(6), None);
    }
}
