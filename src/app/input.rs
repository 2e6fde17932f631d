//! Single-line text editor backing the chat input.
//!
//! `cursor` is a byte offset that always sits on a char boundary.

#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

fn prev_boundary(s: &str, at: usize) -> usize {
    s[..at].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_boundary(s: &str, at: usize) -> usize {
    s[at..]
        .chars()
        .next()
        .map(|c| at + c.len_utf8())
        .unwrap_or(s.len())
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when sending would do nothing: the send action is disabled.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = prev_boundary(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let end = next_boundary(&self.text, self.cursor);
            self.text.replace_range(self.cursor..end, "");
        }
    }

    pub fn delete_word_back(&mut self) {
        let head = &self.text[..self.cursor];
        let trimmed = head.trim_end_matches(' ');
        let start = trimmed.rfind(' ').map(|i| i + 1).unwrap_or(0);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_boundary(&self.text, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_boundary(&self.text, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Take the current line, remembering it in history.
    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.clear();
        if !text.is_empty() {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        let idx = match self.history_index {
            None if !self.history.is_empty() => self.history.len() - 1,
            Some(i) if i > 0 => i - 1,
            _ => return,
        };
        self.recall(Some(idx));
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => self.recall(Some(i + 1)),
            Some(_) => self.clear(),
            None => {}
        }
    }

    fn recall(&mut self, idx: Option<usize>) {
        self.history_index = idx;
        self.text = idx
            .and_then(|i| self.history.get(i).cloned())
            .unwrap_or_default();
        self.cursor = self.text.len();
    }
}
