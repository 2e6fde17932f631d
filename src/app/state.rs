use crate::app::action::Notification;
use crate::app::event::ViewId;
use crate::app::input::InputState;
use crate::app::route::Route;
use crate::chat::{ChatMessage, Conversation, PendingReply, Resolver};
use crate::config::AppConfig;
use crate::content::skills::{SkillId, CATEGORIES};
use crate::session::SessionState;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatFocus {
    Input,
    QuickQuestions,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub resolver: Resolver,
    pub route: Route,
    pub view: ViewId,
    pub session: SessionState,
    pub conversation: Conversation,
    pub input: InputState,
    pub chat_focus: ChatFocus,
    pub quick_question: usize,
    pub category_cursor: usize,
    pub feature_cursor: usize,
    /// Learning category whose detail sheet is open.
    pub modal: Option<SkillId>,
    pub toasts: Vec<Toast>,
    /// Chat messages appended since the host last drained them.
    pub new_messages: Vec<ChatMessage>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(mut config: AppConfig) -> Self {
        config.ui.sanitize();
        let start = config.ui.start_page.parse::<Route>().unwrap_or_else(|e| {
            warn!("{}; starting on the home page", e);
            Route::Home
        });
        let conversation = Conversation::new(config.ui.max_messages);
        let mut state = Self {
            config,
            resolver: Resolver::new(),
            route: start,
            view: ViewId(0),
            session: SessionState::default(),
            conversation,
            input: InputState::new(),
            chat_focus: ChatFocus::Input,
            quick_question: 0,
            category_cursor: 0,
            feature_cursor: 0,
            modal: None,
            toasts: Vec::new(),
            new_messages: Vec::new(),
            tick_count: 0,
            should_quit: false,
            dirty: true,
        };
        state.mount(start);
        state
    }

    /// Switch to `route`, tearing down the current view. Returns the route
    /// whose view was torn down, or `None` if `route` is already shown (no
    /// remount happens then).
    pub fn navigate(&mut self, route: Route) -> Option<Route> {
        if route == self.route {
            return None;
        }
        let left = self.route;
        info!(from = %left, to = %route, "navigate");
        self.mount(route);
        Some(left)
    }

    /// Reset all view-scoped state for a fresh view of `route`.
    fn mount(&mut self, route: Route) {
        self.route = route;
        self.view = ViewId(self.view.0 + 1);
        self.session = SessionState::default();
        self.conversation = Conversation::new(self.config.ui.max_messages);
        self.input.clear();
        self.chat_focus = ChatFocus::Input;
        self.quick_question = 0;
        self.category_cursor = 0;
        self.feature_cursor = 0;
        self.modal = None;
        self.dirty = true;
    }

    pub fn open_modal(&mut self, id: SkillId) {
        if CATEGORIES.iter().any(|c| c.id == id) {
            self.modal = Some(id);
            self.dirty = true;
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.dirty = true;
    }

    /// Send a chat message. Blank text sends nothing.
    pub fn send_chat(&mut self, text: &str) -> Option<PendingReply> {
        let reply = self.conversation.submit(text, &self.resolver)?;
        if let Some(msg) = self.conversation.last() {
            self.new_messages.push(msg.clone());
        }
        self.conversation.scroll_offset = 0;
        self.dirty = true;
        Some(reply)
    }

    /// Append a bot reply if it belongs to the chatbot view currently
    /// mounted. Returns false for replies addressed to a torn-down view.
    pub fn deliver_reply(&mut self, view: ViewId, reply: PendingReply) -> bool {
        if view != self.view || self.route != Route::Chatbot {
            return false;
        }
        let msg = self.conversation.deliver(reply).clone();
        self.new_messages.push(msg);
        self.dirty = true;
        true
    }

    pub fn notify(&mut self, notification: Notification, now: Instant) {
        info!(title = %notification.title, "notification");
        let ttl = Duration::from_secs(self.config.notifications.duration_secs);
        self.toasts.push(Toast {
            notification,
            expires_at: now + ttl,
        });
        let max = self.config.notifications.max_visible.max(1);
        if self.toasts.len() > max {
            let excess = self.toasts.len() - max;
            self.toasts.drain(..excess);
        }
        self.dirty = true;
    }

    /// Drop expired toasts. Returns true if any were removed.
    pub fn expire_toasts(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        before != self.toasts.len()
    }

    pub fn status_line(&self) -> String {
        match self.route {
            Route::Chatbot if self.conversation.typing => "Assistant is typing...".to_string(),
            Route::Chatbot => "AI Assistant Online".to_string(),
            Route::VoiceMode => "Voice Mode Active".to_string(),
            route => route.title().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;
    use crate::session::SessionEvent;

    fn state_on(route: Route) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.navigate(route);
        state
    }

    #[test]
    fn test_starts_on_configured_page() {
        let mut config = AppConfig::default();
        config.ui.start_page = "/features".into();
        assert_eq!(AppState::new(config).route, Route::Features);

        let mut config = AppConfig::default();
        config.ui.start_page = "/nowhere".into();
        assert_eq!(AppState::new(config).route, Route::Home);
    }

    #[test]
    fn test_bad_timestamp_format_is_replaced() {
        let mut config = AppConfig::default();
        config.ui.timestamp_format = "%Q".into();
        let mut state = AppState::new(config);
        assert_eq!(state.config.ui.timestamp_format, "%H:%M");

        // The transcript renders with the replacement format.
        state.navigate(Route::Chatbot);
        state.send_chat("hello");
        let fmt = state.config.ui.timestamp_format.clone();
        let stamp = state.conversation.last().map(|m| m.timestamp.format(&fmt).to_string());
        assert_eq!(stamp.map(|s| s.len()), Some(5));
    }

    #[test]
    fn test_navigation_remounts_with_defaults() {
        let mut state = state_on(Route::VoiceMode);
        state.session.apply(SessionEvent::ToggleListening);
        let view = state.view;

        assert_eq!(state.navigate(Route::VoiceMode), None);
        assert!(state.session.listening);
        assert_eq!(state.view, view);

        assert_eq!(state.navigate(Route::Home), Some(Route::VoiceMode));
        assert_eq!(state.navigate(Route::VoiceMode), Some(Route::Home));
        assert!(!state.session.listening);
        assert!(state.view > view);
    }

    #[test]
    fn test_reply_is_delivered_to_current_view() {
        let mut state = state_on(Route::Chatbot);
        let reply = state.send_chat("asdkjasd").unwrap();
        assert!(state.conversation.typing);
        assert!(state.deliver_reply(state.view, reply));
        assert!(!state.conversation.typing);
        assert_eq!(state.conversation.last().unwrap().sender, Sender::Bot);
        assert_eq!(state.new_messages.len(), 2);
    }

    #[test]
    fn test_stale_reply_is_dropped_after_remount() {
        let mut state = state_on(Route::Chatbot);
        let old_view = state.view;
        let reply = state.send_chat("hello").unwrap();

        state.navigate(Route::Home);
        state.navigate(Route::Chatbot);

        assert!(!state.deliver_reply(old_view, reply));
        assert_eq!(state.conversation.messages.len(), 1);
        assert!(!state.conversation.typing);
    }

    #[test]
    fn test_blank_send_does_nothing() {
        let mut state = state_on(Route::Chatbot);
        assert!(state.send_chat("   ").is_none());
        assert!(state.new_messages.is_empty());
        assert_eq!(state.conversation.messages.len(), 1);
    }

    #[test]
    fn test_toasts_expire_and_are_capped() {
        let mut state = AppState::new(AppConfig::default());
        let now = Instant::now();
        for i in 0..5 {
            state.notify(Notification::new(format!("t{}", i), "d"), now);
        }
        assert_eq!(state.toasts.len(), 3);
        assert_eq!(state.toasts[0].notification.title, "t2");

        assert!(!state.expire_toasts(now + Duration::from_secs(3)));
        assert!(state.expire_toasts(now + Duration::from_secs(4)));
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_modal_only_opens_for_known_categories() {
        let mut state = AppState::new(AppConfig::default());
        state.open_modal(SkillId(99));
        assert!(state.modal.is_none());
        state.open_modal(SkillId(3));
        assert_eq!(state.modal, Some(SkillId(3)));
        state.close_modal();
        assert!(state.modal.is_none());
    }
}
