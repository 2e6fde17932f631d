//! Compiled-in static content: skills catalog, feature list, chatbot script
//! and home-page copy. Nothing here is loaded at runtime.

pub mod chatbot;
pub mod dashboard;
pub mod features;
pub mod skills;

pub use chatbot::{QuestionAnswerEntry, FALLBACK_RESPONSE, GREETING, QUESTION_ANSWERS};
