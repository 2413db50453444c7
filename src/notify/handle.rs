//! Handle for a scheduled readiness callback.

use tokio::task::JoinHandle;

/// Handle to a wait scheduled by [`DependencyReady::on_ready`](crate::core::DependencyReady::on_ready).
///
/// Dropping the handle detaches the task: the wait keeps running and the
/// callback still fires once the dependency is ready. Keep the handle to
/// cancel the wait or to find out how it ended.
///
/// # Examples
///
/// ```rust,no_run
/// use dependency_ready::prelude::*;
///
/// # async fn example() {
/// let watcher = DependencyReady::new("dataLayer");
///
/// let handle = watcher.on_ready(|| println!("dataLayer is ready"));
///
/// // Later, if the page is torn down before the dependency shows up
/// handle.cancel();
/// # }
/// ```
#[derive(Debug)]
pub struct ReadyHandle {
    // `None` when no wait could be scheduled.
    task: Option<JoinHandle<bool>>,
}

impl ReadyHandle {
    pub(crate) fn new(task: JoinHandle<bool>) -> Self {
        Self { task: Some(task) }
    }

    /// A handle for a wait that never started. It is already settled as not ready.
    pub(crate) fn settled() -> Self {
        Self { task: None }
    }

    /// Stop the wait. A callback that has not run yet never runs.
    pub fn cancel(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// Whether the wait has finished, was cancelled, or its callback completed.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the scheduled wait to settle.
    ///
    /// Resolves `true` if the dependency became ready and the callback ran,
    /// `false` if the wait timed out, was cancelled, or the callback panicked.
    pub async fn join(self) -> bool {
        match self.task {
            Some(task) => task.await.unwrap_or(false),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_join_returns_task_result() {
        let handle = ReadyHandle::new(tokio::spawn(async { true }));
        assert!(handle.join().await);

        let handle = ReadyHandle::new(tokio::spawn(async { false }));
        assert!(!handle.join().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_resolves_false() {
        let handle = ReadyHandle::new(tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            true
        }));
        assert!(!handle.is_finished());

        handle.cancel();
        assert!(!handle.join().await);
    }

    #[tokio::test]
    async fn test_settled_handle() {
        let handle = ReadyHandle::settled();
        assert!(handle.is_finished());
        handle.cancel();
        assert!(!handle.join().await);
    }

    #[tokio::test]
    async fn test_panicking_task_resolves_false() {
        let handle = ReadyHandle::new(tokio::spawn(async {
            let ready = true;
            assert!(!ready, "callback failed");
            ready
        }));
        assert!(!handle.join().await);
    }
}
