use crate::chat::resolver::Resolver;
use crate::content::GREETING;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Message identifier derived from the wall clock in milliseconds, bumped
/// when needed so ids stay strictly increasing within a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub i64);

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

/// A bot reply waiting for its typing delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub reply_to: MessageId,
    pub text: String,
}

/// Ordered, append-only chat transcript for one chatbot view.
#[derive(Debug)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
    pub scroll_offset: usize,
    max_messages: usize,
    last_id: i64,
}

impl Conversation {
    pub fn new(max_messages: usize) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            typing: false,
            scroll_offset: 0,
            max_messages: max_messages.max(1),
            last_id: 0,
        };
        conversation.push(Sender::Bot, GREETING.to_string());
        conversation
    }

    /// Append the user's message and hand back the reply to schedule.
    ///
    /// Blank or whitespace-only input appends nothing and returns `None`.
    pub fn submit(&mut self, raw: &str, resolver: &Resolver) -> Option<PendingReply> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let reply = resolver.resolve(text).to_string();
        let id = self.push(Sender::User, text.to_string()).id;
        self.typing = true;
        Some(PendingReply { reply_to: id, text: reply })
    }

    /// Append a bot reply once its delay has elapsed and clear the typing flag.
    ///
    /// Replies are not matched to their user message: with several sends in
    /// flight, the first reply to land clears the flag.
    pub fn deliver(&mut self, reply: PendingReply) -> &ChatMessage {
        self.typing = false;
        self.push(Sender::Bot, reply.text)
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let max = self.messages.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    fn next_id(&mut self) -> MessageId {
        let now = Local::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        MessageId(self.last_id)
    }

    fn push(&mut self, sender: Sender, text: String) -> &ChatMessage {
        let msg = ChatMessage {
            id: self.next_id(),
            text,
            sender,
            timestamp: Local::now(),
        };
        self.messages.push(msg);
        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
            self.scroll_offset = self.scroll_offset.saturating_sub(1);
        }
        // Pushed just above, so the transcript is never empty here.
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FALLBACK_RESPONSE;

    fn texts(c: &Conversation) -> Vec<(Sender, &str)> {
        c.messages
            .iter()
            .map(|m| (m.sender, m.text.as_str()))
            .collect()
    }

    #[test]
    fn test_starts_with_greeting() {
        let c = Conversation::new(100);
        assert_eq!(texts(&c), vec![(Sender::Bot, GREETING)]);
        assert!(!c.typing);
    }

    #[test]
    fn test_blank_input_appends_nothing() {
        let resolver = Resolver::new();
        let mut c = Conversation::new(100);
        for blank in ["", " ", "\t", "  \n  "] {
            assert!(c.submit(blank, &resolver).is_none());
        }
        assert_eq!(c.messages.len(), 1);
        assert!(!c.typing);
    }

    #[test]
    fn test_send_then_deliver_orders_user_before_bot() {
        let resolver = Resolver::new();
        let mut c = Conversation::new(100);

        let pending = c
            .submit("How do I price my handmade products?", &resolver)
            .unwrap();
        assert!(c.typing);
        assert_eq!(c.messages.len(), 2);
        let user = c.last().unwrap();
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.text, "How do I price my handmade products?");
        assert_eq!(pending.reply_to, user.id);

        c.deliver(pending);
        assert!(!c.typing);
        assert_eq!(c.messages.len(), 3);
        let bot = c.last().unwrap();
        assert_eq!(bot.sender, Sender::Bot);
        assert!(bot.text.starts_with("To price handmade products:"));
    }

    #[test]
    fn test_typed_input_is_trimmed_before_lookup() {
        let resolver = Resolver::new();
        let mut c = Conversation::new(100);
        let pending = c
            .submit("  How can I find buyers for my products?  ", &resolver)
            .unwrap();
        assert_eq!(
            c.last().unwrap().text,
            "How can I find buyers for my products?"
        );
        assert!(pending.text.starts_with("There are several ways to find buyers"));
    }

    #[test]
    fn test_unknown_question_gets_fallback() {
        let resolver = Resolver::new();
        let mut c = Conversation::new(100);
        let pending = c.submit("asdkjasd", &resolver).unwrap();
        c.deliver(pending);
        assert_eq!(c.last().unwrap().text, FALLBACK_RESPONSE);
    }

    #[test]
    fn test_rapid_sends_interleave_and_first_reply_clears_typing() {
        let resolver = Resolver::new();
        let mut c = Conversation::new(100);

        let first = c.submit("hello", &resolver).unwrap();
        let second = c.submit("Can you help me with digital marketing?", &resolver).unwrap();

        c.deliver(first);
        assert!(!c.typing);
        c.deliver(second);

        let order: Vec<Sender> = c.messages.iter().map(|m| m.sender).collect();
        assert_eq!(
            order,
            vec![Sender::Bot, Sender::User, Sender::User, Sender::Bot, Sender::Bot]
        );
        assert_eq!(c.messages[3].text, FALLBACK_RESPONSE);
        assert!(c.messages[4].text.starts_with("Absolutely!"));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let resolver = Resolver::new();
        let mut c = Conversation::new(100);
        for _ in 0..20 {
            let pending = c.submit("hi", &resolver).unwrap();
            c.deliver(pending);
        }
        assert!(c.messages.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_transcript_is_capped() {
        let resolver = Resolver::new();
        let mut c = Conversation::new(3);
        let pending = c.submit("one", &resolver).unwrap();
        c.deliver(pending);
        c.submit("two", &resolver);
        assert_eq!(c.messages.len(), 3);
        assert_eq!(c.messages[0].text, "one");
        assert_eq!(c.last().unwrap().text, "two");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut c = Conversation::new(10);
        c.scroll_up(5);
        assert_eq!(c.scroll_offset, 0);
        c.scroll_down(3);
        assert_eq!(c.scroll_offset, 0);
    }
}
