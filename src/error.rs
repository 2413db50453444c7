//! Error types for dependency-ready.

use std::time::Duration;

/// Result type alias for dependency-ready operations.
pub type Result<T> = std::result::Result<T, ReadyError>;

/// Errors that can occur while constructing a watcher.
///
/// Watcher operations themselves never fail; these errors only come out of
/// the builder and the settings loader.
#[derive(Debug, thiserror::Error)]
pub enum ReadyError {
    /// No property name was given to the builder.
    #[error("No dependency property specified")]
    MissingProperty,

    /// Failed to load watcher settings from a source.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// Failed to deserialize watcher settings.
    #[error("Failed to deserialize settings: {0}")]
    DeserializationError(String),

    /// Generic error for other cases.
    #[error("Dependency error: {0}")]
    Other(String),
}

/// Signal raised when a wait passes its deadline without the property appearing.
///
/// This is an internal signal: the watcher logs it and resolves the wait with
/// `false` rather than returning it to the caller. It is exposed so callers
/// inspecting a [`WaitOutcome`](crate::core::WaitOutcome) can report the same message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Timeout error. \"{root}.{property}\" is undefined")]
pub struct TimeoutError {
    /// Name of the root that was being watched.
    pub root: String,
    /// The property that never appeared.
    pub property: String,
    /// The configured timeout.
    pub timeout: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_error_message() {
        let err = TimeoutError {
            root: "globalThis".to_string(),
            property: "foo".to_string(),
            timeout: Duration::from_millis(300),
        };
        assert_eq!(err.to_string(), "Timeout error. \"globalThis.foo\" is undefined");
    }

    #[test]
    fn test_ready_error_display() {
        assert_eq!(
            ReadyError::MissingProperty.to_string(),
            "No dependency property specified"
        );
        assert_eq!(
            ReadyError::LoadError("boom".to_string()).to_string(),
            "Failed to load settings: boom"
        );
    }
}
