// Singleton: one shared instance per key, created on first request.
//
// A constructor cannot hand back a previously stored instance in Rust, so the
// pattern is an explicit registry lookup. DashMap's entry API holds the shard
// lock while the instance is created, which keeps creation single-flight per
// key when several threads race on first access.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

/// The shared object handed out by the registry.
#[derive(Debug)]
pub struct Singleton {
    key: String,
    data: RwLock<Value>,
}

impl Singleton {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            data: RwLock::new(Value::Null),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the stored data. Every holder of this instance sees the change.
    pub fn set_data(&self, data: impl Into<Value>) {
        let mut slot = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *slot = data.into();
    }

    pub fn data(&self) -> Value {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Keyed registry of singletons.
#[derive(Debug, Default)]
pub struct SingletonRegistry {
    instances: DashMap<String, Arc<Singleton>>,
}

impl SingletonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the instance for `key`, creating it on the first call.
    pub fn instance(&self, key: &str) -> Arc<Singleton> {
        self.instances
            .entry(key.to_string())
            .or_insert_with(|| {
                debug!(key, "creating singleton instance");
                Arc::new(Singleton::new(key))
            })
            .clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.instances.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Process-wide registry.
pub fn global() -> &'static SingletonRegistry {
    static REGISTRY: OnceLock<SingletonRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SingletonRegistry::new)
}

/// Shorthand for `global().instance(key)`.
pub fn singleton(key: &str) -> Arc<Singleton> {
    global().instance(key)
}

pub fn demo() -> Vec<String> {
    let registry = SingletonRegistry::new();
    let first = registry.instance("config");
    let second = registry.instance("config");
    first.set_data("dark-mode");

    vec![
        format!("same instance: {}", Arc::ptr_eq(&first, &second)),
        format!("data seen through second handle: {}", second.data()),
        format!("instances in registry: {}", registry.len()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;
    use serde_json::json;

    #[test]
    fn test_same_key_same_instance() {
        let registry = SingletonRegistry::new();
        let a = registry.instance("db");
        let b = registry.instance("db");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_mutation_visible_through_every_handle() {
        let registry = SingletonRegistry::new();
        let a = registry.instance("db");
        let b = registry.instance("db");

        a.set_data(json!({ "url": "postgres://localhost" }));
        assert_eq!(b.data()["url"], "postgres://localhost");
    }

    #[test]
    fn test_different_keys_are_independent() {
        let registry = SingletonRegistry::new();
        let a = registry.instance("a");
        let b = registry.instance("b");
        assert!(!Arc::ptr_eq(&a, &b));

        a.set_data(1);
        assert_eq!(b.data(), Value::Null);
    }

    #[test]
    fn test_global_registry() {
        let a = singleton("global-test-key");
        let b = singleton("global-test-key");
        assert!(Arc::ptr_eq(&a, &b));
        assert!(global().contains("global-test-key"));
    }

    #[test]
    fn test_concurrent_first_access_creates_once() {
        let registry = SingletonRegistry::new();
        let handles: Vec<Arc<Singleton>> = (0..64)
            .into_par_iter()
            .map(|_| registry.instance("shared"))
            .collect();

        assert_eq!(registry.len(), 1);
        assert!(handles.iter().all(|h| Arc::ptr_eq(h, &handles[0])));
    }
}
