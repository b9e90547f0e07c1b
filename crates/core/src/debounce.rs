//! Trailing-edge call debouncing
//!
//! A [`Debouncer`] wraps a callback and a delay: every call cancels the
//! previously scheduled invocation (if any) and schedules a new one with the
//! latest arguments. Only the trailing call of a burst ever fires, and it
//! fires on the timer service's scheduling loop, never synchronously in the
//! caller.
//!
//! Scheduling is abstracted behind the [`Timer`] trait so the same
//! cancel-then-reschedule logic runs against the real tokio clock, tokio's
//! paused test clock, or a hand-driven mock.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::trace;

/// Deferred unit of work handed to a [`Timer`].
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Cancelable deferred execution.
///
/// `schedule` arranges for `callback` to run once `delay` has elapsed and
/// returns a handle; `cancel` discards a scheduled callback that has not
/// fired yet. Canceling a handle whose callback already ran must be a no-op.
pub trait Timer: Send + Sync + 'static {
    /// Handle identifying one scheduled callback.
    type Pending: Send + 'static;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Pending;

    fn cancel(&self, pending: Self::Pending);
}

/// [`Timer`] backed by the tokio runtime.
///
/// Each scheduled callback runs on its own spawned task after a
/// `tokio::time::sleep`, so a zero delay still defers the callback to the
/// next scheduling opportunity. Requires a current tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Pending = JoinHandle<()>;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> JoinHandle<()> {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        })
    }

    fn cancel(&self, pending: JoinHandle<()>) {
        pending.abort();
    }
}

/// Debounced wrapper around a callback.
///
/// Holds at most one pending scheduled invocation at a time. The delay is a
/// [`Duration`], so negative delays are unrepresentable; a zero delay defers
/// the callback to the next scheduling opportunity rather than invoking it
/// synchronously.
///
/// The callback is fire-and-forget: its return value is discarded, and a
/// panic inside it unwinds the scheduled task without reaching the caller
/// of [`call`](Self::call).
pub struct Debouncer<A, T: Timer = TokioTimer> {
    timer: T,
    delay: Duration,
    callback: Arc<dyn Fn(A) + Send + Sync>,
    pending: Mutex<Option<T::Pending>>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Create a debouncer over the tokio clock.
    pub fn new(delay: Duration, callback: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self::with_timer(TokioTimer, delay, callback)
    }
}

impl<A: Send + 'static, T: Timer> Debouncer<A, T> {
    /// Create a debouncer over an explicit timer service.
    pub fn with_timer(
        timer: T,
        delay: Duration,
        callback: impl Fn(A) + Send + Sync + 'static,
    ) -> Self {
        Self {
            timer,
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// The quiet period required before the callback fires.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending invocation and schedule a new one with `args`.
    ///
    /// Returns immediately; the callback fires on the timer service once
    /// the delay elapses with no further calls. Arguments of a superseded
    /// invocation are discarded.
    pub fn call(&self, args: A) {
        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            trace!("superseding pending invocation");
            self.timer.cancel(previous);
        }

        let callback = Arc::clone(&self.callback);
        trace!(delay_ms = self.delay.as_millis() as u64, "scheduling invocation");
        *pending = Some(
            self.timer
                .schedule(self.delay, Box::new(move || callback(args))),
        );
    }
}

/// Wrap `callback` in a debounced closure with the given delay.
///
/// Convenience over [`Debouncer::new`] for callers that want a plain
/// function-shaped wrapper. Each call to the returned closure supersedes
/// the previous pending invocation, keeping only the latest arguments.
pub fn debounce<A: Send + 'static>(
    callback: impl Fn(A) + Send + Sync + 'static,
    delay: Duration,
) -> impl Fn(A) {
    let debouncer = Debouncer::new(delay, callback);
    move |args| debouncer.call(args)
}
