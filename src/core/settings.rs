//! Watcher settings loaded from files and environment variables.

use crate::core::poll::{DEFAULT_TIMEOUT, millis};
use crate::error::{ReadyError, Result};
use config::{Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Deserialized watcher settings.
///
/// ```yaml
/// property: dataLayer
/// timeout_ms: 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WatcherSettings {
    /// Property to watch.
    pub property: Option<String>,
    /// Timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            property: None,
            timeout_ms: millis(DEFAULT_TIMEOUT),
        }
    }
}

impl WatcherSettings {
    /// Start loading settings from files and the environment.
    pub fn loader() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// The timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Merges settings sources using the `config` crate.
///
/// Files are applied in the order they were added, then environment
/// variables, so the environment always wins.
///
/// # Examples
///
/// ```rust,no_run
/// use dependency_ready::core::WatcherSettings;
///
/// # fn example() -> dependency_ready::error::Result<()> {
/// // DEPREADY_TIMEOUT_MS=5000 overrides the file
/// let settings = WatcherSettings::loader()
///     .with_file("config/dependency.yaml")
///     .with_env_overrides("DEPREADY", "__")
///     .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SettingsLoader {
    files: Vec<PathBuf>,
    env: Option<(String, String)>,
}

impl SettingsLoader {
    /// Create a loader with no sources. Loading it yields the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a YAML, TOML or JSON settings file, detected by extension.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Read `<PREFIX>_PROPERTY` and `<PREFIX>_TIMEOUT_MS` from the environment.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for environment variables (e.g., "DEPREADY")
    /// * `separator` - Separator for nested keys (e.g., "__")
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.env = Some((prefix.to_string(), separator.to_string()));
        self
    }

    /// Load and merge all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A file has an unsupported extension or does not exist
    /// - A source cannot be parsed
    /// - The merged values do not deserialize into [`WatcherSettings`]
    pub fn load(&self) -> Result<WatcherSettings> {
        let mut builder = config::Config::builder();

        for path in &self.files {
            validate_extension(path)?;
            if !path.exists() {
                return Err(ReadyError::LoadError(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        if let Some((prefix, separator)) = &self.env {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator(separator)
                    .try_parsing(true),
            );
        }

        let merged = builder
            .build()
            .map_err(|e| ReadyError::LoadError(format!("Failed to build settings: {}", e)))?;

        merged.try_deserialize::<WatcherSettings>().map_err(|e| {
            ReadyError::DeserializationError(format!("Failed to parse settings: {}", e))
        })
    }
}

fn validate_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            ReadyError::LoadError(format!(
                "Unable to determine file format for: {}",
                path.display()
            ))
        })?;

    match extension {
        "yaml" | "yml" | "toml" | "json" => Ok(()),
        _ => Err(ReadyError::LoadError(format!(
            "Unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
            extension
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = WatcherSettings::default();
        assert_eq!(settings.property, None);
        assert_eq!(settings.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_empty_loader_yields_defaults() {
        let settings = SettingsLoader::new().load().unwrap();
        assert_eq!(settings, WatcherSettings::default());
    }

    #[test]
    fn test_load_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dependency.yaml");
        fs::write(&path, "property: foo\ntimeout_ms: 2000\n").unwrap();

        let settings = WatcherSettings::loader().with_file(&path).load().unwrap();
        assert_eq!(settings.property.as_deref(), Some("foo"));
        assert_eq!(settings.timeout_ms, 2000);
    }

    #[test]
    fn test_load_toml_partial() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dependency.toml");
        fs::write(&path, "timeout_ms = 500\n").unwrap();

        let settings = WatcherSettings::loader().with_file(&path).load().unwrap();
        assert_eq!(settings.property, None);
        assert_eq!(settings.timeout_ms, 500);
    }

    #[test]
    fn test_later_file_wins() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("base.json");
        let local = temp_dir.path().join("local.yaml");
        fs::write(&base, r#"{"property": "foo", "timeout_ms": 1000}"#).unwrap();
        fs::write(&local, "timeout_ms: 3000\n").unwrap();

        let settings = WatcherSettings::loader()
            .with_file(&base)
            .with_file(&local)
            .load()
            .unwrap();
        assert_eq!(settings.property.as_deref(), Some("foo"));
        assert_eq!(settings.timeout_ms, 3000);
    }

    #[test]
    fn test_missing_file() {
        let result = WatcherSettings::loader()
            .with_file("/nonexistent/dependency.yaml")
            .load();
        assert!(matches!(result, Err(ReadyError::LoadError(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = WatcherSettings::loader().with_file("dependency.ini").load();
        assert!(matches!(result, Err(ReadyError::LoadError(_))));

        let result = WatcherSettings::loader().with_file("dependency").load();
        assert!(matches!(result, Err(ReadyError::LoadError(_))));
    }

    #[test]
    fn test_invalid_timeout_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dependency.yaml");
        fs::write(&path, "timeout_ms: soon\n").unwrap();

        let result = WatcherSettings::loader().with_file(&path).load();
        assert!(matches!(result, Err(ReadyError::DeserializationError(_))));
    }
}
