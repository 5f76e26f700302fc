//! Debounced values.
//!
//! A [`Debouncer`] delays an input until it has stopped changing for the
//! configured delay. Timers run as tokio tasks and report back through a
//! sink; the owner feeds the report into [`Debouncer::accept`], which
//! discards anything superseded or cancelled in the meantime.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A value whose quiescence timer elapsed.
///
/// Carries the epoch it was scheduled under so that [`Debouncer::accept`]
/// can tell whether it is still the latest input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled<T> {
    epoch: u64,
    value: T,
}

impl<T> Settled<T> {
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Receives settled values from timer tasks.
pub type SettledSink<T> = Arc<dyn Fn(Settled<T>) + Send + Sync>;

pub struct Debouncer<T> {
    delay: Duration,
    epoch: u64,
    settled: T,
    pending: Option<JoinHandle<()>>,
    sink: SettledSink<T>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + 'static,
{
    pub fn new(initial: T, delay: Duration, sink: SettledSink<T>) -> Self {
        Self {
            delay,
            epoch: 0,
            settled: initial,
            pending: None,
            sink,
        }
    }

    /// The last value that survived a full quiescence period.
    pub fn settled(&self) -> &T {
        &self.settled
    }

    /// True while a timer is scheduled and has not been accepted.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new input, restarting the quiescence timer.
    ///
    /// Must be called from within a tokio runtime. A zero delay still goes
    /// through a spawned task, so the settled value never arrives before
    /// `push` returns.
    pub fn push(&mut self, value: T) {
        self.abort_pending();
        self.epoch += 1;

        let settled = Settled {
            epoch: self.epoch,
            value,
        };
        let delay = self.delay;
        let sink = Arc::clone(&self.sink);
        self.pending = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            sink(settled);
        }));
    }

    /// Apply a settled report if it belongs to the latest input.
    ///
    /// Returns the newly settled value, or `None` when the report was
    /// superseded by a later `push`, or by `cancel`/`reset`.
    pub fn accept(&mut self, settled: Settled<T>) -> Option<T> {
        if settled.epoch != self.epoch || self.pending.is_none() {
            tracing::trace!(
                "Dropping stale settled value (epoch {}, current {})",
                settled.epoch,
                self.epoch
            );
            return None;
        }
        self.pending = None;
        self.settled = settled.value.clone();
        Some(settled.value)
    }

    /// Cancel any scheduled update without touching the settled value.
    pub fn cancel(&mut self) {
        if self.pending.is_some() {
            tracing::debug!("Cancelling pending debounce (epoch {})", self.epoch);
        }
        self.abort_pending();
        self.epoch += 1;
    }

    /// Cancel any scheduled update and settle on `value` immediately.
    pub fn reset(&mut self, value: T) {
        self.cancel();
        self.settled = value;
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn debouncer(delay_ms: u64) -> (Debouncer<String>, mpsc::UnboundedReceiver<Settled<String>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink: SettledSink<String> = Arc::new(move |settled| {
            let _ = tx.send(settled);
        });
        (
            Debouncer::new(String::new(), Duration::from_millis(delay_ms), sink),
            rx,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn settles_after_delay() {
        let (mut debouncer, mut rx) = debouncer(250);
        debouncer.push("김".to_string());
        assert!(debouncer.is_pending());

        let settled = rx.recv().await.unwrap();
        assert_eq!(debouncer.accept(settled), Some("김".to_string()));
        assert_eq!(debouncer.settled(), "김");
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_is_still_asynchronous() {
        let (mut debouncer, mut rx) = debouncer(0);
        debouncer.push("a".to_string());

        assert!(rx.try_recv().is_err());
        assert_eq!(debouncer.settled(), "");

        let settled = rx.recv().await.unwrap();
        assert_eq!(debouncer.accept(settled), Some("a".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_already_fired_timer() {
        let (mut debouncer, mut rx) = debouncer(10);
        debouncer.push("a".to_string());
        let settled = rx.recv().await.unwrap();

        debouncer.cancel();
        assert_eq!(debouncer.accept(settled), None);
        assert_eq!(debouncer.settled(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_cancels_pending_timer() {
        let (mut debouncer, mut rx) = debouncer(250);
        debouncer.push("a".to_string());
        drop(debouncer);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_settles_immediately() {
        let (mut debouncer, _rx) = debouncer(250);
        debouncer.push("old".to_string());
        debouncer.reset("개발".to_string());

        assert_eq!(debouncer.settled(), "개발");
        assert!(!debouncer.is_pending());
    }
}
