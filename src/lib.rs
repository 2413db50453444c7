//! # dependency-ready
//!
//! Wait for a named dependency to show up on a shared global root.
//!
//! ## Overview
//!
//! Code that depends on something defined asynchronously by someone else (a
//! plugin registering itself, a sidecar exporting a variable, a loader
//! publishing a handle) can ask a [`DependencyReady`](core::DependencyReady)
//! watcher to poll for it instead of racing it:
//! - `check_ready` looks once, synchronously
//! - `await_ready` polls every 100ms until the property appears or the timeout elapses
//! - `on_ready` schedules a callback for when it appears
//!
//! Waits never fail: a timeout is logged and the wait resolves `false`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dependency_ready::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() {
//! let watcher = DependencyReady::new("dataLayer").with_timeout(Duration::from_secs(5));
//!
//! // Somewhere else, once the dependency has loaded
//! dependency_ready::root::global().define("dataLayer", "loaded");
//!
//! if watcher.await_ready().await {
//!     println!("dataLayer is ready");
//! }
//!
//! // Or fire and forget
//! watcher.on_ready(|| println!("dataLayer is ready"));
//! # }
//! ```
//!
//! ## Roots
//!
//! The watcher reads an injected [`GlobalRoot`](root::GlobalRoot). The
//! [`root`] module ships an in-memory root, a process-wide default root, an
//! environment variable root and a closure adapter.
//!
//! ## Feature Flags
//!
//! - `metrics`: OpenTelemetry counters and histograms for waits
//!
//! ```toml
//! [dependencies]
//! dependency-ready = { version = "0.1", features = ["metrics"] }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod notify;
pub mod root;

#[cfg(feature = "metrics")]
pub mod metrics;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{DependencyReady, DependencyReadyBuilder, WaitOutcome, WatcherSettings};
    pub use crate::error::{ReadyError, Result, TimeoutError};
    pub use crate::notify::ReadyHandle;
    pub use crate::root::{GlobalRoot, MemoryRoot};

    #[cfg(feature = "metrics")]
    pub use crate::metrics::WatchMetrics;
}
