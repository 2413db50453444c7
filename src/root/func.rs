//! Closure-backed global root.

use super::{DEFAULT_ROOT_NAME, GlobalRoot};

/// Adapts a `Fn(&str) -> bool` lookup into a [`GlobalRoot`].
///
/// Created with [`from_fn`].
pub struct FnRoot<F> {
    lookup: F,
    name: String,
}

impl<F> FnRoot<F> {
    /// Rename the root.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Wrap a lookup closure as a global root.
///
/// # Examples
///
/// ```rust
/// use dependency_ready::root::{self, GlobalRoot};
///
/// let root = root::from_fn(|property| property == "jQuery");
/// assert!(root.has_own("jQuery"));
/// assert!(!root.has_own("React"));
/// ```
pub fn from_fn<F>(lookup: F) -> FnRoot<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    FnRoot {
        lookup,
        name: DEFAULT_ROOT_NAME.to_string(),
    }
}

impl<F> GlobalRoot for FnRoot<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn has_own(&self, property: &str) -> bool {
        (self.lookup)(property)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lookup_is_called() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let root = from_fn(move |property| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            property.starts_with("ga")
        });

        assert!(root.has_own("gaq"));
        assert!(!root.has_own("dataLayer"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_with_name() {
        let root = from_fn(|_| false).with_name("registry");
        assert_eq!(root.name(), "registry");
    }
}
