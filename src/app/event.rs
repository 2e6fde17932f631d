use crate::chat::PendingReply;
use crossterm::event::Event as CrosstermEvent;

/// Generation number of a mounted view. Bumped on every navigation so events
/// addressed to a torn-down view can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A scheduled bot reply whose typing delay has elapsed
    BotReply { view: ViewId, reply: PendingReply },

    /// Tick for UI refresh and toast expiry
    Tick,
}
