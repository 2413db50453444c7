//! Global root trait.

use std::sync::Arc;

/// Name reported by roots that do not override [`GlobalRoot::name`].
pub const DEFAULT_ROOT_NAME: &str = "globalThis";

/// Read-only lookup capability over a shared namespace.
///
/// Implement this trait to let a [`DependencyReady`](crate::core::DependencyReady)
/// watch a custom namespace (a plugin registry, a service locator, a key-value store).
/// Implementations must be cheap and must not mutate the namespace.
pub trait GlobalRoot: Send + Sync {
    /// Whether the namespace currently has an own property called `property`.
    fn has_own(&self, property: &str) -> bool;

    /// Get a human-readable name for this root (for logging/debugging).
    fn name(&self) -> String {
        DEFAULT_ROOT_NAME.to_string()
    }
}

impl<R: GlobalRoot + ?Sized> GlobalRoot for Arc<R> {
    fn has_own(&self, property: &str) -> bool {
        (**self).has_own(property)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// `None` stands for an environment where the root is unavailable.
impl<R: GlobalRoot> GlobalRoot for Option<R> {
    fn has_own(&self, property: &str) -> bool {
        self.as_ref().is_some_and(|root| root.has_own(property))
    }

    fn name(&self) -> String {
        match self {
            Some(root) => root.name(),
            None => DEFAULT_ROOT_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::root::MemoryRoot;

    struct Fixed(bool);

    impl GlobalRoot for Fixed {
        fn has_own(&self, _property: &str) -> bool {
            self.0
        }
    }

    #[test]
    fn test_default_name() {
        assert_eq!(Fixed(true).name(), "globalThis");
    }

    #[test]
    fn test_absent_root_is_never_ready() {
        let root: Option<MemoryRoot> = None;
        assert!(!root.has_own("foo"));
        assert_eq!(root.name(), "globalThis");
    }

    #[test]
    fn test_present_option_delegates() {
        let memory = MemoryRoot::new().with_name("window");
        memory.define("foo", "bar");
        let root = Some(memory);
        assert!(root.has_own("foo"));
        assert!(!root.has_own("baz"));
        assert_eq!(root.name(), "window");
    }

    #[test]
    fn test_arc_dyn_delegates() {
        let root: Arc<dyn GlobalRoot> = Arc::new(Fixed(true));
        assert!(root.has_own("anything"));
    }
}
