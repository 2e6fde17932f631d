use crate::app::route::Route;
use crate::chat::PendingReply;

/// Transient message shown as a toast. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Requests from the event handler to the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    Notify(Notification),
    ScheduleReply(PendingReply),
    Quit,
}
