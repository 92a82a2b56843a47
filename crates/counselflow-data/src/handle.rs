//! Observable `{data, loading, error}` state around one service read.

use std::sync::{Arc, Weak};

use futures::future::BoxFuture;
use serde::Serialize;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

use crate::error::Result;

/// Snapshot of a resource handle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceState<T> {
    pub data: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> ResourceState<T> {
    /// Nothing fetched yet.
    pub fn loading() -> Self {
        Self {
            data: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Settled successfully.
    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::loading()
    }
}

type Loader<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<Vec<T>>> + Send + Sync>;

/// Fetches a resource in the background and publishes its state.
///
/// Creating a handle starts exactly one fetch on the current tokio runtime;
/// [`refresh`](Self::refresh) starts another. Fetches are not cached,
/// deduplicated or cancelled. Dropping the handle lets an in-flight fetch
/// finish, after which its result is discarded.
///
/// Must be created from within a tokio runtime.
pub struct ResourceHandle<T> {
    label: String,
    loader: Loader<T>,
    sender: Arc<watch::Sender<ResourceState<T>>>,
    receiver: watch::Receiver<ResourceState<T>>,
}

impl<T> ResourceHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start fetching with `loader`. `label` names the resource in the
    /// fallback error message ("Failed to load <label>").
    pub fn spawn<F>(label: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Result<Vec<T>>> + Send + Sync + 'static,
    {
        let (sender, receiver) = watch::channel(ResourceState::loading());
        let handle = Self {
            label: label.into(),
            loader: Arc::new(loader),
            sender: Arc::new(sender),
            receiver,
        };
        handle.start();
        handle
    }

    /// Resource label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current snapshot.
    pub fn state(&self) -> ResourceState<T> {
        self.receiver.borrow().clone()
    }

    /// Mark loading and fetch again. Existing data stays visible until the
    /// new result lands.
    pub fn refresh(&self) {
        self.sender.send_modify(|state| state.loading = true);
        self.start();
    }

    /// Wait until the state is next not loading and return that snapshot.
    ///
    /// With overlapping refreshes this returns on the first fetch to land;
    /// a slower fetch may still publish afterwards.
    pub async fn settled(&self) -> ResourceState<T> {
        let mut receiver = self.receiver.clone();
        let settled = match receiver.wait_for(|state| !state.loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    /// Watch receiver for change notifications.
    pub fn subscribe(&self) -> watch::Receiver<ResourceState<T>> {
        self.receiver.clone()
    }

    /// Every published snapshot as a stream, starting with the current one.
    pub fn stream(&self) -> WatchStream<ResourceState<T>> {
        WatchStream::new(self.receiver.clone())
    }

    fn start(&self) {
        let publisher = Arc::downgrade(&self.sender);
        let fetch = (self.loader)();
        let label = self.label.clone();
        tokio::spawn(async move {
            let outcome = fetch.await;
            publish(publisher, &label, outcome);
        });
    }
}

fn publish<T>(publisher: Weak<watch::Sender<ResourceState<T>>>, label: &str, outcome: Result<Vec<T>>) {
    let Some(sender) = publisher.upgrade() else {
        debug!(resource = %label, "handle dropped, discarding result");
        return;
    };

    let next = match outcome {
        Ok(data) => ResourceState {
            data,
            loading: false,
            error: None,
        },
        Err(err) => ResourceState {
            data: Vec::new(),
            loading: false,
            error: Some(failure_message(label, err.to_string())),
        },
    };
    sender.send_replace(next);
}

fn failure_message(label: &str, message: String) -> String {
    if message.trim().is_empty() {
        format!("Failed to load {}", label)
    } else {
        message
    }
}

impl<T> std::fmt::Debug for ResourceHandle<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("label", &self.label)
            .field("state", &*self.receiver.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use futures::FutureExt;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;
    use tokio_stream::StreamExt;

    fn counting_loader(
        calls: Arc<AtomicU32>,
    ) -> impl Fn() -> BoxFuture<'static, Result<Vec<u32>>> + Send + Sync + 'static {
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Ok(vec![n]) }.boxed()
        }
    }

    #[tokio::test]
    async fn test_initial_state_then_success() {
        let (gate_tx, gate_rx) = tokio::sync::oneshot::channel::<()>();
        let gate = std::sync::Mutex::new(Some(gate_rx));
        let handle = ResourceHandle::spawn("numbers", move || {
            let gate = gate.lock().unwrap().take();
            async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                Ok(vec![1, 2, 3])
            }
            .boxed()
        });

        assert_eq!(handle.state(), ResourceState::loading());

        gate_tx.send(()).unwrap();
        let state = handle.settled().await;
        assert_eq!(state.data, vec![1, 2, 3]);
        assert!(state.is_ready());
    }

    #[tokio::test]
    async fn test_failure_clears_data_and_sets_error() {
        let handle: ResourceHandle<u32> = ResourceHandle::spawn("matters", || {
            async { Err(ServiceError::new("Get matters", "boom")) }.boxed()
        });

        let state = handle.settled().await;
        assert!(!state.loading);
        assert!(state.data.is_empty());
        assert_eq!(state.error.as_deref(), Some("Get matters failed: boom"));
    }

    #[test]
    fn test_empty_error_falls_back_to_label() {
        assert_eq!(failure_message("board packs", " ".into()), "Failed to load board packs");
        assert_eq!(failure_message("board packs", "denied".into()), "denied");
    }

    #[tokio::test]
    async fn test_refresh_fetches_again() {
        let calls = Arc::new(AtomicU32::new(0));
        let handle = ResourceHandle::spawn("numbers", counting_loader(calls.clone()));
        assert_eq!(handle.settled().await.data, vec![1]);

        handle.refresh();
        assert!(handle.state().loading);
        assert_eq!(handle.state().data, vec![1]);

        let mut receiver = handle.subscribe();
        let state = receiver.wait_for(|s| !s.loading).await.unwrap().clone();
        assert_eq!(state.data, vec![2]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_result_after_drop_is_discarded() {
        let (gate_tx, gate_rx) = tokio::sync::oneshot::channel::<()>();
        let (done_tx, done_rx) = tokio::sync::oneshot::channel::<()>();
        let slots = std::sync::Mutex::new(Some((gate_rx, done_tx)));

        let handle: ResourceHandle<u32> = ResourceHandle::spawn("numbers", move || {
            let slot = slots.lock().unwrap().take();
            async move {
                if let Some((gate, done)) = slot {
                    let _ = gate.await;
                    let _ = done.send(());
                }
                Ok(vec![7])
            }
            .boxed()
        });
        let receiver = handle.subscribe();
        drop(handle);

        gate_tx.send(()).unwrap();
        done_rx.await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        // Sender is gone and the last published state is still the initial one.
        assert!(receiver.has_changed().is_err());
        assert!(receiver.borrow().loading);
    }

    #[tokio::test]
    async fn test_stream_yields_settled_state() {
        let handle = ResourceHandle::spawn("numbers", || async { Ok(vec![5u32]) }.boxed());
        let mut stream = handle.stream();
        let mut last = None;
        while let Some(state) = stream.next().await {
            let done = !state.loading;
            last = Some(state);
            if done {
                break;
            }
        }
        assert_eq!(last.unwrap().data, vec![5]);
    }
}
