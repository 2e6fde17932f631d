use crate::app::action::{Action, Notification};
use crate::app::event::AppEvent;
use crate::app::route::Route;
use crate::app::state::*;
use crate::content::features::FEATURES;
use crate::content::skills::CATEGORIES;
use crate::session::{SessionEvent, SkillTab};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::BotReply { view, reply } => {
            if !state.deliver_reply(view, reply) {
                debug!(view = view.0, "dropping reply for a closed chat view");
            }
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state, Instant::now());
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState, now: Instant) {
    state.tick_count = state.tick_count.wrapping_add(1);

    if state.expire_toasts(now) {
        state.dirty = true;
    }

    // Typing dots and the listening pulse animate on tick.
    let animating = match state.route {
        Route::Chatbot => state.conversation.typing || state.session.listening,
        Route::VoiceMode => state.session.listening || state.session.playing,
        _ => false,
    };
    if animating {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    if let KeyCode::F(n) = key.code {
        return Route::from_function_key(n)
            .map(|route| vec![Action::Navigate(route)])
            .unwrap_or_default();
    }

    // The detail sheet captures all input when open
    if state.modal.is_some() {
        return handle_modal_key(state, key);
    }

    if key.code == KeyCode::Esc {
        return vec![Action::Navigate(Route::Home)];
    }

    // Any letter on the chat page starts or continues a question.
    if key.code == KeyCode::Char('q') && key.modifiers.is_empty() && state.route != Route::Chatbot {
        return vec![Action::Quit];
    }

    match state.route {
        Route::Home => handle_home_key(state, key),
        Route::Skills => handle_skills_key(state, key),
        Route::VoiceMode => handle_voice_key(state, key),
        Route::Chatbot => handle_chat_key(state, key),
        Route::Features => handle_features_key(state, key),
    }
}

fn handle_modal_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        // "Start Learning Now"
        KeyCode::Enter => {
            state.close_modal();
            vec![Action::Navigate(Route::Skills)]
        }
        // "Save for Later"
        KeyCode::Esc | KeyCode::Char('l') => {
            state.close_modal();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_home_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.category_cursor = state.category_cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            if state.category_cursor + 1 < CATEGORIES.len() {
                state.category_cursor += 1;
            }
            vec![]
        }
        // "Learn More"
        KeyCode::Enter => {
            if let Some(category) = CATEGORIES.get(state.category_cursor) {
                state.open_modal(category.id);
            }
            vec![]
        }
        KeyCode::Char('s') | KeyCode::Char('b') => vec![Action::Navigate(Route::Skills)],
        KeyCode::Char('v') => vec![Action::Navigate(Route::VoiceMode)],
        KeyCode::Char('f') => vec![Action::Navigate(Route::Features)],
        KeyCode::Char('c') => vec![Action::Navigate(Route::Chatbot)],
        _ => vec![],
    }
}

fn handle_skills_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            let tab = state.session.selected_tab.other();
            debug!(tab = tab.id(), "select tab");
            state.session.apply(SessionEvent::SelectTab(tab));
        }
        KeyCode::Up => state.session.step_skill(-1),
        KeyCode::Down => state.session.step_skill(1),
        KeyCode::Enter if state.session.selected_tab == SkillTab::Available => {
            let id = state.session.selected_skill;
            state.open_modal(id);
        }
        _ => {}
    }
    vec![]
}

fn handle_voice_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let session = &state.session;
    let event = match key.code {
        KeyCode::Char(' ') | KeyCode::Char('m') => SessionEvent::ToggleListening,
        KeyCode::Char('p') => SessionEvent::TogglePlayback,
        KeyCode::Char('l') => SessionEvent::SetLanguage(session.language.next()),
        KeyCode::Char('s') => SessionEvent::SetSpeed(session.speed.next()),
        KeyCode::Char('g') => SessionEvent::SetVoice(session.voice.next()),
        KeyCode::Char('a') => SessionEvent::ToggleAutoPlay,
        KeyCode::Left => SessionEvent::PreviousStep,
        KeyCode::Right => SessionEvent::NextStep,
        _ => return vec![],
    };
    state.session.apply(event);
    vec![]
}

fn handle_features_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.feature_cursor = state.feature_cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            if state.feature_cursor + 1 < FEATURES.len() {
                state.feature_cursor += 1;
            }
            vec![]
        }
        KeyCode::Enter => FEATURES
            .get(state.feature_cursor)
            .and_then(|f| f.action())
            .into_iter()
            .collect(),
        _ => vec![],
    }
}

fn handle_chat_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
        return toggle_chat_microphone(state);
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            state.chat_focus = match state.chat_focus {
                ChatFocus::Input => ChatFocus::QuickQuestions,
                ChatFocus::QuickQuestions => ChatFocus::Input,
            };
            vec![]
        }
        KeyCode::PageUp => {
            state.conversation.scroll_up(3);
            vec![]
        }
        KeyCode::PageDown => {
            state.conversation.scroll_down(3);
            vec![]
        }
        _ => match state.chat_focus {
            ChatFocus::Input => handle_input_key(state, key),
            ChatFocus::QuickQuestions => handle_quick_question_key(state, key),
        },
    }
}

fn toggle_chat_microphone(state: &mut AppState) -> Vec<Action> {
    let was_listening = state.session.listening;
    state.session.apply(SessionEvent::ToggleListening);
    let notification = if was_listening {
        Notification::new("Voice Recognition Stopped", "Stopped listening")
    } else {
        Notification::new(
            "Voice Recognition Started",
            "Now listening for your question...",
        )
    };
    vec![Action::Notify(notification)]
}

fn send(state: &mut AppState, text: &str) -> Vec<Action> {
    state
        .send_chat(text)
        .map(Action::ScheduleReply)
        .into_iter()
        .collect()
}

fn handle_quick_question_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let count = state.resolver.questions().len();
    match key.code {
        KeyCode::Up => {
            state.quick_question = state.quick_question.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            if state.quick_question + 1 < count {
                state.quick_question += 1;
            }
            vec![]
        }
        KeyCode::Enter => {
            let Some(question) = state.resolver.questions().get(state.quick_question).copied()
            else {
                return vec![];
            };
            send(state, question)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Start typing: switch to input
            state.chat_focus = ChatFocus::Input;
            state.input.insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            // Send is disabled while the input is blank
            if state.input.is_blank() {
                return vec![];
            }
            let text = state.input.take_text();
            send(state, &text)
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                state.input.delete_word_back();
            } else {
                state.input.delete_back();
            }
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Up => {
            state.input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.input.history_down();
            vec![]
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.input.move_home(),
                    'e' => state.input.move_end(),
                    'w' => state.input.delete_word_back(),
                    'u' => state.input.clear(),
                    _ => {}
                }
            } else {
                state.input.insert_char(c);
            }
            vec![]
        }
        _ => vec![],
    }
}
