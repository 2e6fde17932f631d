use crate::content::{QuestionAnswerEntry, FALLBACK_RESPONSE, QUESTION_ANSWERS};
use std::collections::HashMap;

/// Maps user text to a canned answer.
///
/// Matching is exact and case-sensitive on the whole string. Anything else
/// gets [`FALLBACK_RESPONSE`]. Lookups never mutate the resolver, so the same
/// input always produces the same output.
#[derive(Debug, Clone)]
pub struct Resolver {
    answers: HashMap<&'static str, &'static str>,
    questions: Vec<&'static str>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::with_entries(&QUESTION_ANSWERS)
    }

    pub fn with_entries(entries: &[QuestionAnswerEntry]) -> Self {
        let mut answers = HashMap::with_capacity(entries.len());
        let mut questions = Vec::with_capacity(entries.len());
        for entry in entries {
            if answers.insert(entry.question, entry.answer).is_none() {
                questions.push(entry.question);
            }
        }
        Self { answers, questions }
    }

    pub fn resolve(&self, query: &str) -> &'static str {
        self.answers.get(query).copied().unwrap_or(FALLBACK_RESPONSE)
    }

    /// Known questions in display order (the "Quick Questions" panel).
    pub fn questions(&self) -> &[&'static str] {
        &self.questions
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
