//! Scripted chatbot. Answers come from a canned lookup and arrive after a
//! simulated typing delay.

pub mod conversation;
pub mod resolver;
pub mod scheduler;

pub use conversation::{ChatMessage, Conversation, PendingReply, Sender};
pub use resolver::Resolver;
pub use scheduler::ReplyScheduler;
