//! In-memory global root.

use super::{DEFAULT_ROOT_NAME, GlobalRoot};
use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Shared in-memory namespace of `property -> value` pairs.
///
/// Cloning a `MemoryRoot` yields another handle to the same namespace. Reads
/// are lock-free snapshots through `arc-swap`; each write publishes a new
/// snapshot atomically, so a watcher never observes a half-applied change.
///
/// # Examples
///
/// ```rust
/// use dependency_ready::root::{GlobalRoot, MemoryRoot};
///
/// let root = MemoryRoot::new();
/// assert!(!root.has_own("analytics"));
///
/// root.define("analytics", "loaded");
/// assert!(root.has_own("analytics"));
/// ```
#[derive(Clone)]
pub struct MemoryRoot {
    properties: Arc<ArcSwap<HashMap<String, String>>>,
    name: String,
}

impl MemoryRoot {
    /// Create an empty root named `globalThis`.
    pub fn new() -> Self {
        Self {
            properties: Arc::new(ArcSwap::from_pointee(HashMap::new())),
            name: DEFAULT_ROOT_NAME.to_string(),
        }
    }

    /// Rename the root. The name only shows up in logs and timeout messages.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Define (or redefine) a property.
    pub fn define(&self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        self.properties.rcu(|current| {
            let mut next = HashMap::clone(current);
            next.insert(property.clone(), value.clone());
            next
        });
    }

    /// Delete a property. Returns whether it was defined.
    pub fn remove(&self, property: &str) -> bool {
        let previous = self.properties.rcu(|current| {
            let mut next = HashMap::clone(current);
            next.remove(property);
            next
        });
        previous.contains_key(property)
    }

    /// Whether the property is currently defined.
    pub fn contains(&self, property: &str) -> bool {
        self.properties.load().contains_key(property)
    }

    /// Current value of a property.
    pub fn get(&self, property: &str) -> Option<String> {
        self.properties.load().get(property).cloned()
    }

    /// Names of all defined properties, sorted.
    pub fn properties(&self) -> Vec<String> {
        let mut names: Vec<String> = self.properties.load().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of defined properties.
    pub fn len(&self) -> usize {
        self.properties.load().len()
    }

    /// Whether no property is defined.
    pub fn is_empty(&self) -> bool {
        self.properties.load().is_empty()
    }

    /// Delete every property.
    pub fn clear(&self) {
        self.properties.store(Arc::new(HashMap::new()));
    }
}

impl Default for MemoryRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalRoot for MemoryRoot {
    fn has_own(&self, property: &str) -> bool {
        self.contains(property)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

impl std::fmt::Debug for MemoryRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryRoot")
            .field("name", &self.name)
            .field("properties", &self.properties())
            .finish()
    }
}

/// The process-wide default root.
///
/// Watchers created with [`DependencyReady::new`](crate::core::DependencyReady::new)
/// read this root. Whatever loads the dependency defines the property here.
///
/// # Examples
///
/// ```rust
/// use dependency_ready::root;
///
/// root::global().define("docs_example_tag_manager", "ready");
/// assert!(root::global().contains("docs_example_tag_manager"));
/// ```
pub fn global() -> &'static MemoryRoot {
    static GLOBAL: OnceLock<MemoryRoot> = OnceLock::new();
    GLOBAL.get_or_init(MemoryRoot::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_remove() {
        let root = MemoryRoot::new();
        assert!(root.is_empty());

        root.define("foo", "bar");
        assert!(root.contains("foo"));
        assert_eq!(root.get("foo").as_deref(), Some("bar"));
        assert_eq!(root.len(), 1);

        assert!(root.remove("foo"));
        assert!(!root.contains("foo"));
        assert!(!root.remove("foo"));
    }

    #[test]
    fn test_redefine_overwrites_value() {
        let root = MemoryRoot::new();
        root.define("foo", "one");
        root.define("foo", "two");
        assert_eq!(root.get("foo").as_deref(), Some("two"));
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn test_clones_share_namespace() {
        let root = MemoryRoot::new();
        let writer = root.clone();
        writer.define("foo", "bar");
        assert!(root.has_own("foo"));
    }

    #[test]
    fn test_properties_sorted_and_clear() {
        let root = MemoryRoot::new();
        root.define("b", "");
        root.define("a", "");
        assert_eq!(root.properties(), vec!["a".to_string(), "b".to_string()]);

        root.clear();
        assert!(root.is_empty());
    }

    #[test]
    fn test_with_name() {
        let root = MemoryRoot::new().with_name("window");
        assert_eq!(root.name(), "window");
        assert_eq!(MemoryRoot::default().name(), "globalThis");
    }

    #[test]
    fn test_global_is_shared() {
        global().define("test_global_is_shared", "1");
        assert!(global().has_own("test_global_is_shared"));
        assert!(global().remove("test_global_is_shared"));
    }

    #[test]
    fn test_concurrent_writers() {
        let root = MemoryRoot::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let root = root.clone();
                std::thread::spawn(move || root.define(format!("key{}", i), "v"))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(root.len(), 8);
    }
}
