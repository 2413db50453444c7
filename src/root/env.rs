//! Environment variable global root.

use super::GlobalRoot;

/// Treats the process environment as the global root.
///
/// A property is ready once an environment variable named
/// `<prefix><property>` is set. Useful when a sidecar or launcher exports a
/// variable once a dependency is up.
///
/// # Examples
///
/// ```rust
/// use dependency_ready::root::EnvRoot;
///
/// // Watches APP_DATABASE_URL when asked for "DATABASE_URL"
/// let root = EnvRoot::with_prefix("APP_");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvRoot {
    prefix: String,
}

impl EnvRoot {
    /// Create a root that reads variables by their bare name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root that reads `<prefix><property>`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn key(&self, property: &str) -> String {
        format!("{}{}", self.prefix, property)
    }
}

impl GlobalRoot for EnvRoot {
    fn has_own(&self, property: &str) -> bool {
        let key = self.key(property);
        // Names the platform cannot represent are never set.
        if key.is_empty() || key.contains(['=', '\0']) {
            return false;
        }
        std::env::var_os(key).is_some()
    }

    fn name(&self) -> String {
        format!("env:{}*", self.prefix)
    }
}

#[cfg(test)]
#[allow(unsafe_code)] // For env var manipulation in tests
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_name() {
        assert_eq!(EnvRoot::with_prefix("APP_").name(), "env:APP_*");
        assert_eq!(EnvRoot::new().name(), "env:*");
    }

    #[test]
    fn test_prefixed_lookup() {
        let root = EnvRoot::with_prefix("TEST_DEPREADY_ENV_");
        assert!(!root.has_own("PREFIXED"));

        unsafe {
            env::set_var("TEST_DEPREADY_ENV_PREFIXED", "1");
        }
        assert!(root.has_own("PREFIXED"));

        unsafe {
            env::remove_var("TEST_DEPREADY_ENV_PREFIXED");
        }
        assert!(!root.has_own("PREFIXED"));
    }

    #[test]
    fn test_unrepresentable_names() {
        let root = EnvRoot::new();
        assert!(!root.has_own(""));
        assert!(!root.has_own("A=B"));
        assert!(!root.has_own("NUL\0"));
    }
}
