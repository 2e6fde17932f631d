//! Platform feature list and what "Try Now" / "Join Beta" does for each.

use crate::app::action::{Action, Notification};
use crate::app::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureId {
    VoiceLearning,
    SmartChatbot,
    SkillTracker,
    LoanFinder,
    MarketConnect,
    ProductHelper,
    BadgeRewards,
    OfflineMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureStatus {
    Active,
    Beta,
    ComingSoon,
}

impl FeatureStatus {
    pub fn badge(&self) -> &'static str {
        match self {
            FeatureStatus::Active => "Active",
            FeatureStatus::Beta => "Beta",
            FeatureStatus::ComingSoon => "Coming Soon",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            FeatureStatus::Active => "Try Now",
            FeatureStatus::Beta => "Join Beta",
            FeatureStatus::ComingSoon => "Coming Soon",
        }
    }

    /// Coming-soon features render a disabled button.
    pub fn is_enabled(&self) -> bool {
        *self != FeatureStatus::ComingSoon
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub id: FeatureId,
    pub title: &'static str,
    pub description: &'static str,
    pub status: FeatureStatus,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: FeatureId::VoiceLearning,
        title: "Voice Learning",
        description: "Hands-free tutorials in local languages with voice commands and audio guidance",
        status: FeatureStatus::Active,
    },
    Feature {
        id: FeatureId::SmartChatbot,
        title: "Smart Chatbot",
        description: "AI-powered assistant that answers questions and provides personalized guidance",
        status: FeatureStatus::Active,
    },
    Feature {
        id: FeatureId::SkillTracker,
        title: "Skill Tracker",
        description: "Monitor learning progress, unlock achievements, and track skill development",
        status: FeatureStatus::Active,
    },
    Feature {
        id: FeatureId::LoanFinder,
        title: "Loan Finder",
        description: "Discover micro-loans and financial schemes tailored to your goals and location",
        status: FeatureStatus::Beta,
    },
    Feature {
        id: FeatureId::MarketConnect,
        title: "Market Connect",
        description: "Connect with local buyers, cooperatives, and online selling platforms",
        status: FeatureStatus::ComingSoon,
    },
    Feature {
        id: FeatureId::ProductHelper,
        title: "Product Helper",
        description: "Generate pricing tips, product descriptions, and marketing content",
        status: FeatureStatus::Beta,
    },
    Feature {
        id: FeatureId::BadgeRewards,
        title: "Badge Rewards",
        description: "Earn achievement badges and certificates for completed learning modules",
        status: FeatureStatus::Active,
    },
    Feature {
        id: FeatureId::OfflineMode,
        title: "Offline Mode",
        description: "Learn without internet connection and sync progress when reconnected",
        status: FeatureStatus::ComingSoon,
    },
];

/// Groupings shown under the feature cards.
pub const FEATURE_CATEGORIES: &[(&str, &str)] = &[
    ("Learning Tools", "Voice learning, progress tracking, and smart guidance"),
    ("Financial Support", "Micro-loans, funding opportunities, and business advice"),
    ("Market Access", "Connect with buyers, cooperatives, and online platforms"),
];

impl FeatureId {
    /// Pages that a feature opens directly instead of showing a toast.
    fn destination(&self) -> Option<Route> {
        match self {
            FeatureId::VoiceLearning => Some(Route::VoiceMode),
            FeatureId::SkillTracker => Some(Route::Skills),
            _ => None,
        }
    }
}

impl Feature {
    /// Outcome of pressing the feature's button. `None` for disabled buttons.
    pub fn action(&self) -> Option<Action> {
        match self.status {
            FeatureStatus::Active => Some(match self.id.destination() {
                Some(route) => Action::Navigate(route),
                None => Action::Notify(Notification::new(
                    format!("{} Activated", self.title),
                    format!("Welcome to {}! This feature is now active.", self.title),
                )),
            }),
            FeatureStatus::Beta => Some(Action::Notify(Notification::new(
                format!("Joined {} Beta", self.title),
                format!(
                    "You've been added to the beta testing program for {}.",
                    self.title
                ),
            ))),
            FeatureStatus::ComingSoon => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(id: FeatureId) -> &'static Feature {
        FEATURES.iter().find(|f| f.id == id).unwrap()
    }

    fn notification(action: Option<Action>) -> Notification {
        match action {
            Some(Action::Notify(n)) => n,
            other => panic!("expected a notification, got {:?}", other),
        }
    }

    #[test]
    fn test_active_features_with_pages_navigate() {
        assert!(matches!(
            feature(FeatureId::VoiceLearning).action(),
            Some(Action::Navigate(Route::VoiceMode))
        ));
        assert!(matches!(
            feature(FeatureId::SkillTracker).action(),
            Some(Action::Navigate(Route::Skills))
        ));
    }

    #[test]
    fn test_other_active_features_notify() {
        let n = notification(feature(FeatureId::BadgeRewards).action());
        assert_eq!(n.title, "Badge Rewards Activated");
        assert_eq!(
            n.description,
            "Welcome to Badge Rewards! This feature is now active."
        );

        let n = notification(feature(FeatureId::SmartChatbot).action());
        assert_eq!(n.title, "Smart Chatbot Activated");
    }

    #[test]
    fn test_beta_features_join_beta() {
        let n = notification(feature(FeatureId::LoanFinder).action());
        assert_eq!(n.title, "Joined Loan Finder Beta");
        assert_eq!(
            n.description,
            "You've been added to the beta testing program for Loan Finder."
        );
    }

    #[test]
    fn test_coming_soon_is_disabled() {
        for id in [FeatureId::MarketConnect, FeatureId::OfflineMode] {
            let f = feature(id);
            assert!(!f.status.is_enabled());
            assert!(f.action().is_none());
        }
    }

    #[test]
    fn test_every_feature_is_listed_once() {
        for f in FEATURES {
            assert_eq!(feature(f.id).title, f.title);
        }
        assert_eq!(FEATURES.len(), 8);
    }
}
