//! Built-in metrics for dependency waits.
//!
//! Provides OpenTelemetry metrics tracking:
//! - Waits started, satisfied and timed out
//! - Readiness checks performed
//! - Wait duration
//!
//! # Examples
//!
//! ```rust,no_run
//! use dependency_ready::prelude::*;
//! use opentelemetry::global;
//!
//! # fn example() -> Result<()> {
//! let meter = global::meter("my-app");
//!
//! let watcher = DependencyReady::builder()
//!     .with_property("dataLayer")
//!     .with_metrics(WatchMetrics::new(meter))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod watch_metrics;

pub use watch_metrics::WatchMetrics;
