//! Readiness notifications.
//!
//! Provides the handle returned when a callback is scheduled with
//! [`DependencyReady::on_ready`](crate::core::DependencyReady::on_ready).

pub mod handle;

pub use handle::ReadyHandle;
