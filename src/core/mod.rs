//! Core watcher types.

mod builder;
mod poll;
mod settings;
mod watcher;

pub use builder::DependencyReadyBuilder;
pub use poll::{DEFAULT_TIMEOUT, POLL_INTERVAL, PollState, WaitOutcome};
pub use settings::{SettingsLoader, WatcherSettings};
pub use watcher::DependencyReady;
