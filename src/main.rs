mod app;
mod chat;
mod config;
mod content;
mod error;
mod logging;
mod session;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::route::Route;
use crate::app::state::AppState;
use crate::chat::ReplyScheduler;
use crate::logging::TranscriptLogger;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let mut cfg = config::load_config()?;

    if std::env::args().skip(1).any(|a| a == "--write-config") {
        let path = config::save_config(&cfg)?;
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    logging::init_tracing(&cfg.logging)?;
    info!("starting skillsprout");
    cfg.ui.sanitize();

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut transcript = TranscriptLogger::new(&cfg.logging, &cfg.ui.timestamp_format);
    let mut scheduler = ReplyScheduler::new(
        event_tx.clone(),
        Duration::from_millis(cfg.chat.reply_delay_ms),
    );
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(1));
    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Drain new_messages for the transcript
        for msg in state.new_messages.drain(..) {
            transcript.log_message(&msg);
        }

        // Process actions
        for action in actions {
            apply_action(&mut state, &mut scheduler, action);
        }

        if state.should_quit {
            scheduler.cancel_all();
            info!("quit");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Carry out one handler request. Pending bot replies die with the chat
/// view that scheduled them.
fn apply_action(state: &mut AppState, scheduler: &mut ReplyScheduler, action: Action) {
    match action {
        Action::Navigate(route) => {
            if state.navigate(route) == Some(Route::Chatbot) {
                let cancelled = scheduler.cancel_all();
                debug!(cancelled, "chat view closed");
            }
        }
        Action::Notify(notification) => {
            state.notify(notification, Instant::now());
        }
        Action::ScheduleReply(reply) => {
            scheduler.schedule_reply(state.view, reply);
            debug!(pending = scheduler.pending(), "replies in flight");
        }
        Action::Quit => state.should_quit = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn chat_with_pending_reply(tx: mpsc::UnboundedSender<AppEvent>) -> (AppState, ReplyScheduler) {
        let mut state = AppState::new(AppConfig::default());
        let mut scheduler = ReplyScheduler::new(tx, Duration::from_millis(1500));
        apply_action(&mut state, &mut scheduler, Action::Navigate(Route::Chatbot));
        if let Some(reply) = state.send_chat("hello") {
            apply_action(&mut state, &mut scheduler, Action::ScheduleReply(reply));
        }
        assert_eq!(scheduler.pending(), 1);
        (state, scheduler)
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_chat_cancels_pending_replies() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (mut state, mut scheduler) = chat_with_pending_reply(tx);

        apply_action(&mut state, &mut scheduler, Action::Navigate(Route::Home));
        assert_eq!(scheduler.pending(), 0);

        let nothing = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(nothing.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_staying_on_chat_keeps_pending_replies() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (mut state, mut scheduler) = chat_with_pending_reply(tx);

        apply_action(&mut state, &mut scheduler, Action::Navigate(Route::Chatbot));
        assert_eq!(scheduler.pending(), 1);

        match rx.recv().await {
            Some(AppEvent::BotReply { view, reply }) => {
                assert!(state.deliver_reply(view, reply));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_between_other_pages_leaves_replies_alone() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(AppConfig::default());
        let mut scheduler = ReplyScheduler::new(tx, Duration::from_millis(1500));
        apply_action(&mut state, &mut scheduler, Action::Navigate(Route::Skills));
        apply_action(&mut state, &mut scheduler, Action::Navigate(Route::Features));
        assert_eq!(state.route, Route::Features);
        assert_eq!(scheduler.pending(), 0);
    }
}
