//! Transient "You selected: ..." notice with a self-cancelling expiry timer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::AppMessage;

/// How long a selection notice stays visible.
pub const SELECTION_TTL: Duration = Duration::from_millis(3000);

/// The live selection notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionNotice {
    pub label: String,
    pub expires_at: Instant,
    pub generation: u64,
}

/// A callback scheduled on the tokio runtime. Dropping it aborts the task.
#[derive(Debug)]
pub struct ScheduledCallback {
    handle: JoinHandle<()>,
}

impl ScheduledCallback {
    /// Run `callback` once `deadline` is reached.
    pub fn at<F>(deadline: Instant, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            callback();
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledCallback {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Owner of the single live [`SelectionNotice`] and its timer.
///
/// Expiry is reported as [`AppMessage::SelectionExpired`] and applied with
/// [`SelectionPulse::expire`]. The generation on the message guards against an
/// expiry that was already queued when a newer selection arrived.
#[derive(Debug)]
pub struct SelectionPulse {
    notice: Option<SelectionNotice>,
    timer: Option<ScheduledCallback>,
    generation: u64,
    ttl: Duration,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl SelectionPulse {
    pub fn new(message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self::with_ttl(message_tx, SELECTION_TTL)
    }

    pub fn with_ttl(message_tx: mpsc::UnboundedSender<AppMessage>, ttl: Duration) -> Self {
        Self {
            notice: None,
            timer: None,
            generation: 0,
            ttl,
            message_tx,
        }
    }

    /// Show `label`, replacing any live notice and cancelling its timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn select(&mut self, label: impl Into<String>) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let expires_at = Instant::now() + self.ttl;
        let label = label.into();
        tracing::debug!(%label, generation, "Selection notice shown");

        let tx = self.message_tx.clone();
        // Replacing the timer drops, and so aborts, the previous one.
        self.timer = Some(ScheduledCallback::at(expires_at, move || {
            let _ = tx.send(AppMessage::SelectionExpired { generation });
        }));
        self.notice = Some(SelectionNotice {
            label,
            expires_at,
            generation,
        });
        generation
    }

    /// Clear the notice if `generation` is still the live one.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.notice {
            Some(notice) if notice.generation == generation => {
                tracing::debug!(generation, "Selection notice expired");
                self.notice = None;
                self.timer = None;
                true
            }
            _ => false,
        }
    }

    pub fn notice(&self) -> Option<&SelectionNotice> {
        self.notice.as_ref()
    }

    /// Label of the live notice.
    pub fn label(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.label.as_str())
    }

    pub fn clear(&mut self) {
        self.notice = None;
        self.timer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_notice_expires_after_ttl() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut pulse = SelectionPulse::new(tx);
        let start = Instant::now();

        let generation = pulse.select("Quran");
        assert_eq!(pulse.label(), Some("Quran"));

        match rx.recv().await {
            Some(AppMessage::SelectionExpired { generation: g }) => assert_eq!(g, generation),
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(start.elapsed(), Duration::from_millis(3000));
        assert!(pulse.expire(generation));
        assert!(pulse.notice().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reselect_cancels_previous_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut pulse = SelectionPulse::new(tx);
        let start = Instant::now();

        pulse.select("Quran");
        tokio::time::advance(Duration::from_millis(1000)).await;
        let second = pulse.select("Hadith");
        assert_eq!(second, 2);

        match rx.recv().await {
            Some(AppMessage::SelectionExpired { generation }) => assert_eq!(generation, 2),
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(start.elapsed(), Duration::from_millis(4000));
        assert_eq!(pulse.label(), Some("Hadith"));
        assert!(pulse.expire(2));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_generation_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut pulse = SelectionPulse::new(tx);
        pulse.select("Quran");
        pulse.select("Hadith");

        assert!(!pulse.expire(1));
        assert_eq!(pulse.label(), Some("Hadith"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_callback_aborts_it() {
        let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();
        let callback = ScheduledCallback::at(Instant::now() + Duration::from_millis(10), move || {
            let _ = tx.send(AppMessage::SelectionExpired { generation: 9 });
        });
        drop(callback);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.recv().await.is_none());
    }
}
