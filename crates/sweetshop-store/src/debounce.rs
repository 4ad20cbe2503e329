//! Trailing-edge debouncing on the tokio runtime.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default debounce window for keyword input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

type Callback<T> = Arc<dyn Fn(T) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Runs a callback once calls have stopped arriving for `wait`.
///
/// Every [`call`](Self::call) cancels the pending timer and starts a new one
/// with the latest value. Once the timer fires the callback runs as its own
/// task, so a later call never cuts short a callback already in progress.
/// Must be used from within a tokio runtime. Dropping the debouncer cancels
/// a pending call.
pub struct Debouncer<T> {
    wait: Duration,
    callback: Callback<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F, Fut>(wait: Duration, callback: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            wait,
            callback: Arc::new(move |value| Box::pin(callback(value))),
            pending: Mutex::new(None),
        }
    }

    /// Schedule the callback with `value`, replacing any pending call.
    pub fn call(&self, value: T) {
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;

        let timer = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            tokio::spawn(callback(value));
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(timer) {
            previous.abort();
        }
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }

    /// Whether a call is waiting for its timer.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(false, |h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, Debouncer<String>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let debouncer = Debouncer::new(DEFAULT_DEBOUNCE, move |v: String| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push(v);
            }
        });
        (seen, debouncer)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_calls_coalesce_to_last() {
        let (seen, debouncer) = recorder();

        debouncer.call("m".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.call("mo".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.call("mousse".to_string());
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*seen.lock().unwrap(), vec!["mousse".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_each_fire() {
        let (seen, debouncer) = recorder();

        debouncer.call("a".to_string());
        tokio::time::sleep(Duration::from_millis(350)).await;
        debouncer.call("b".to_string());
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(*seen.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_drop() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let debouncer = Debouncer::new(Duration::from_millis(50), move |_: ()| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        debouncer.call(());
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        debouncer.call(());
        drop(debouncer);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
