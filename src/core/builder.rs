//! Builder for constructing DependencyReady instances.

use crate::core::poll::{DEFAULT_TIMEOUT, millis};
use crate::core::{DependencyReady, WatcherSettings};
use crate::error::{ReadyError, Result};
use crate::root::{self, GlobalRoot};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "metrics")]
use crate::metrics::WatchMetrics;

/// Builder for constructing a [`DependencyReady`] watcher.
///
/// Values set directly on the builder take precedence over loaded settings,
/// which take precedence over the defaults.
///
/// # Examples
///
/// ```rust,no_run
/// use dependency_ready::prelude::*;
///
/// # fn example() -> Result<()> {
/// let watcher = DependencyReady::builder()
///     .with_settings_file("config/dependency.yaml")
///     .with_env_overrides("DEPREADY", "__")
///     .with_timeout_ms(5000)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct DependencyReadyBuilder {
    property: Option<String>,
    timeout: Option<Duration>,
    root: Option<Arc<dyn GlobalRoot>>,
    settings: Option<WatcherSettings>,
    settings_files: Vec<PathBuf>,
    env: Option<(String, String)>,
    #[cfg(feature = "metrics")]
    metrics: Option<WatchMetrics>,
}

impl DependencyReadyBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the property to watch.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout in milliseconds.
    pub fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    /// Watch this root instead of [`root::global`].
    pub fn with_root<R: GlobalRoot + 'static>(mut self, root: R) -> Self {
        self.root = Some(Arc::new(root));
        self
    }

    /// Use already loaded settings.
    ///
    /// Replaces any settings files or environment overrides added before.
    pub fn with_settings(mut self, settings: WatcherSettings) -> Self {
        self.settings = Some(settings);
        self.settings_files.clear();
        self.env = None;
        self
    }

    /// Load settings from a YAML, TOML or JSON file during [`build`](Self::build).
    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings = None;
        self.settings_files.push(path.into());
        self
    }

    /// Apply environment overrides to loaded settings during [`build`](Self::build).
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.settings = None;
        self.env = Some((prefix.to_string(), separator.to_string()));
        self
    }

    /// Record OpenTelemetry metrics for every wait.
    #[cfg(feature = "metrics")]
    pub fn with_metrics(mut self, metrics: WatchMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Build the watcher.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Settings files or environment overrides fail to load
    /// - No property was given, either directly or through settings
    pub fn build(self) -> Result<DependencyReady> {
        let settings = match self.settings {
            Some(settings) => Some(settings),
            None if !self.settings_files.is_empty() || self.env.is_some() => {
                let mut loader = WatcherSettings::loader();
                for path in self.settings_files {
                    loader = loader.with_file(path);
                }
                if let Some((prefix, separator)) = &self.env {
                    loader = loader.with_env_overrides(prefix, separator);
                }
                Some(loader.load()?)
            }
            None => None,
        };

        let property = self
            .property
            .or_else(|| settings.as_ref().and_then(|s| s.property.clone()))
            .ok_or(ReadyError::MissingProperty)?;

        let timeout = self
            .timeout
            .or_else(|| settings.as_ref().map(WatcherSettings::timeout))
            .unwrap_or(DEFAULT_TIMEOUT);

        let root = self
            .root
            .unwrap_or_else(|| Arc::new(root::global().clone()));

        tracing::debug!(
            property = %property,
            timeout_ms = millis(timeout),
            "built dependency watcher"
        );

        let watcher = DependencyReady::from_parts(property, timeout, root);

        #[cfg(feature = "metrics")]
        let watcher = watcher.with_metrics(self.metrics);

        Ok(watcher)
    }
}
