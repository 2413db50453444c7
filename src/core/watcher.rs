//! The readiness watcher.

use crate::core::DependencyReadyBuilder;
use crate::core::poll::{DEFAULT_TIMEOUT, Poll, WaitOutcome, millis};
use crate::notify::ReadyHandle;
use crate::root::{self, GlobalRoot};
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "metrics")]
use crate::metrics::WatchMetrics;

/// Watches a global root until a named property is defined on it.
///
/// The watcher never writes to its root. Cloning a watcher is cheap; clones
/// share the root and settings but run their own waits.
///
/// # Examples
///
/// ```rust
/// use dependency_ready::prelude::*;
/// use dependency_ready::root::MemoryRoot;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let root = MemoryRoot::new();
/// let watcher = DependencyReady::with_root("foo", root.clone())
///     .with_timeout(Duration::from_secs(2));
///
/// assert!(!watcher.check_ready());
///
/// let loader = root.clone();
/// tokio::spawn(async move {
///     tokio::time::sleep(Duration::from_millis(250)).await;
///     loader.define("foo", "I am foo!");
/// });
///
/// assert!(watcher.await_ready().await);
/// # }
/// ```
#[derive(Clone)]
pub struct DependencyReady {
    property: String,
    timeout: Duration,
    root: Arc<dyn GlobalRoot>,
    #[cfg(feature = "metrics")]
    metrics: Option<WatchMetrics>,
}

impl DependencyReady {
    /// Watch the process-wide [`root::global`] root with the default 30 second timeout.
    pub fn new(property: impl Into<String>) -> Self {
        Self::with_root(property, root::global().clone())
    }

    /// Watch an injected root with the default 30 second timeout.
    pub fn with_root<R>(property: impl Into<String>, root: R) -> Self
    where
        R: GlobalRoot + 'static,
    {
        Self::from_parts(property.into(), DEFAULT_TIMEOUT, Arc::new(root))
    }

    pub(crate) fn from_parts(
        property: String,
        timeout: Duration,
        root: Arc<dyn GlobalRoot>,
    ) -> Self {
        Self {
            property,
            timeout,
            root,
            #[cfg(feature = "metrics")]
            metrics: None,
        }
    }

    /// Create a builder, for settings files, environment overrides and metrics.
    pub fn builder() -> DependencyReadyBuilder {
        DependencyReadyBuilder::new()
    }

    /// Replace the timeout. Zero is accepted and times out after one interval.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the timeout, in milliseconds.
    pub fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    #[cfg(feature = "metrics")]
    pub(crate) fn with_metrics(mut self, metrics: Option<WatchMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// The watched property.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// How long a wait lasts before giving up.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Name of the watched root.
    pub fn root_name(&self) -> String {
        self.root.name()
    }

    /// Whether the property is defined on the root right now.
    ///
    /// Has no side effects. Returns `false` when the root is unavailable.
    pub fn check_ready(&self) -> bool {
        self.root.has_own(&self.property)
    }

    /// Wait until the property is defined or the timeout elapses.
    ///
    /// Resolves `true` once the property is observed and `false` on timeout.
    /// The timeout is logged, never returned as an error.
    pub async fn await_ready(&self) -> bool {
        self.await_outcome().await.is_ready()
    }

    /// Like [`await_ready`](Self::await_ready), with the details of how the wait ended.
    pub async fn await_outcome(&self) -> WaitOutcome {
        tracing::debug!(
            property = %self.property,
            root = %self.root.name(),
            timeout_ms = millis(self.timeout),
            "waiting for dependency"
        );
        #[cfg(feature = "metrics")]
        if let Some(metrics) = &self.metrics {
            metrics.record_wait_started(&self.property);
        }

        let outcome = Poll::new(&*self.root, &self.property, self.timeout)
            .run()
            .await;

        match &outcome {
            WaitOutcome::Ready { checks, elapsed } => {
                tracing::debug!(
                    property = %self.property,
                    checks,
                    elapsed_ms = millis(*elapsed),
                    "dependency ready"
                );
            }
            WaitOutcome::TimedOut { error, checks, .. } => {
                tracing::warn!(property = %self.property, checks, "{}", error);
            }
        }

        #[cfg(feature = "metrics")]
        if let Some(metrics) = &self.metrics {
            metrics.record_outcome(&self.property, &outcome);
        }

        outcome
    }

    /// Run `callback` once the property is defined.
    ///
    /// Fire-and-forget: the wait runs as a spawned task, and if it times out
    /// the callback is dropped without being called and nothing is reported.
    /// The returned handle can be ignored.
    ///
    /// Outside of a tokio runtime no wait can be scheduled: a warning is
    /// logged, the callback is dropped, and the handle is already settled.
    pub fn on_ready<F>(&self, callback: F) -> ReadyHandle
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_ready_maybe(Some(callback))
    }

    /// Like [`on_ready`](Self::on_ready) for a callback that may be missing.
    ///
    /// With `None` the wait still runs, but nothing is invoked.
    pub fn on_ready_maybe<F>(&self, callback: Option<F>) -> ReadyHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!(
                    property = %self.property,
                    "cannot schedule dependency wait outside a tokio runtime: {}",
                    e
                );
                return ReadyHandle::settled();
            }
        };

        let watcher = self.clone();
        ReadyHandle::new(runtime.spawn(async move {
            let ready = watcher.await_ready().await;
            if ready {
                if let Some(callback) = callback {
                    callback();
                }
            }
            ready
        }))
    }
}

impl std::fmt::Debug for DependencyReady {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyReady")
            .field("property", &self.property)
            .field("timeout", &self.timeout)
            .field("root", &self.root.name())
            .finish()
    }
}
