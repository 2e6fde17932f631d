//! One-shot delayed callbacks with cancellation, used to simulate the bot
//! "typing" before its reply lands.

use crate::app::event::{AppEvent, ViewId};
use crate::chat::conversation::PendingReply;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to a scheduled callback. Dropping the handle does not cancel it.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Run `callback` once after `delay` on the tokio runtime.
pub fn schedule<F>(delay: Duration, callback: F) -> ScheduledTask
where
    F: FnOnce() + Send + 'static,
{
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        callback();
    });
    ScheduledTask { handle }
}

/// Schedules bot replies back into the app's event channel.
///
/// Every send gets its own independent task; nothing queues or coalesces
/// them, so replies land in timer order.
pub struct ReplyScheduler {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    delay: Duration,
    tasks: Vec<ScheduledTask>,
}

impl ReplyScheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, delay: Duration) -> Self {
        Self {
            event_tx,
            delay,
            tasks: Vec::new(),
        }
    }

    pub fn schedule_reply(&mut self, view: ViewId, reply: PendingReply) {
        self.tasks.retain(|t| !t.is_finished());
        let tx = self.event_tx.clone();
        debug!(
            view = view.0,
            reply_to = reply.reply_to.0,
            delay_ms = self.delay.as_millis() as u64,
            "scheduling bot reply"
        );
        self.tasks.push(schedule(self.delay, move || {
            let _ = tx.send(AppEvent::BotReply { view, reply });
        }));
    }

    /// Cancel every reply still waiting. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let mut cancelled = 0;
        for task in self.tasks.drain(..) {
            if !task.is_finished() {
                task.cancel();
                cancelled += 1;
            }
        }
        cancelled
    }

    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_finished()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::conversation::MessageId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn reply(id: i64, text: &str) -> PendingReply {
        PendingReply {
            reply_to: MessageId(id),
            text: text.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_callback_runs_after_delay() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let task = schedule(Duration::from_millis(1500), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        for _ in 0..10 {
            if task.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_callback_never_runs() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let task = schedule(Duration::from_millis(1500), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        task.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_on_event_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(tx, Duration::from_millis(1500));
        scheduler.schedule_reply(ViewId(3), reply(10, "hello"));
        assert_eq!(scheduler.pending(), 1);

        let early = tokio::time::timeout(Duration::from_millis(1499), rx.recv()).await;
        assert!(early.is_err());

        match rx.recv().await {
            Some(AppEvent::BotReply { view, reply }) => {
                assert_eq!(view, ViewId(3));
                assert_eq!(reply.text, "hello");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_send_gets_its_own_reply() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(tx, Duration::from_millis(1500));
        scheduler.schedule_reply(ViewId(1), reply(1, "a"));
        scheduler.schedule_reply(ViewId(1), reply(2, "b"));
        assert_eq!(scheduler.pending(), 2);

        let mut got = Vec::new();
        for _ in 0..2 {
            if let Some(AppEvent::BotReply { reply, .. }) = rx.recv().await {
                got.push(reply.text);
            }
        }
        got.sort();
        assert_eq!(got, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_drops_pending_replies() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(tx, Duration::from_millis(1500));
        scheduler.schedule_reply(ViewId(1), reply(1, "a"));
        scheduler.schedule_reply(ViewId(1), reply(2, "b"));

        assert_eq!(scheduler.cancel_all(), 2);
        assert_eq!(scheduler.pending(), 0);

        let nothing = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(nothing.is_err());
    }
}
