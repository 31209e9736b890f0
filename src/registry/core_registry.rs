//! # Core Registry
//!
//! The process-wide multiton: at most one core bundle per key.
//!
//! ## Overview
//!
//! The CoreRegistry caches [`Facade`] bundles in a single concurrent map
//! keyed by core key. Construction is lazy and at-most-once per key; a
//! bundle's model, view, and controller are created together and torn
//! down together. Because [`Facade`]'s constructor is crate-private, the
//! atomic insert-if-absent here is the only construction path — a
//! duplicate core for a live key is unrepresentable, not merely checked.
//!
//! ## Usage
//!
//! ```rust
//! use courier_core::registry::CoreRegistry;
//!
//! let core = CoreRegistry::get_core("core-registry-docs");
//! assert!(CoreRegistry::has_core("core-registry-docs"));
//!
//! // same key resolves to the same bundle
//! let again = CoreRegistry::get_core("core-registry-docs");
//! assert!(std::sync::Arc::ptr_eq(&core, &again));
//!
//! CoreRegistry::remove_core("core-registry-docs");
//! assert!(!CoreRegistry::has_core("core-registry-docs"));
//! ```

use crate::config::CourierConfig;
use crate::facade::Facade;
use dashmap::DashMap;
use std::sync::{Arc, OnceLock};
use tracing::info;

static CORES: OnceLock<DashMap<String, Arc<Facade>>> = OnceLock::new();

fn cores() -> &'static DashMap<String, Arc<Facade>> {
    CORES.get_or_init(DashMap::new)
}

/// Process-wide lifecycle holder for keyed core bundles.
///
/// All methods are associated functions over a process-wide map; the type
/// itself is never instantiated.
pub struct CoreRegistry;

impl CoreRegistry {
    /// Resolve the core for a key, constructing it on first access.
    ///
    /// Construction happens at most once per key, atomically with respect
    /// to concurrent callers for the same key; every caller receives the
    /// same bundle. A freshly constructed core uses the default
    /// configuration.
    pub fn get_core(key: &str) -> Arc<Facade> {
        Self::get_core_with_config(key, CourierConfig::default())
    }

    /// Resolve the core for a key, constructing it with the given
    /// configuration on first access.
    ///
    /// Like any multiton factory argument, the configuration only takes
    /// effect for the (at most one) construction; resolving an existing
    /// core ignores it.
    pub fn get_core_with_config(key: &str, config: CourierConfig) -> Arc<Facade> {
        // fast path: resolving a live core takes only a read lock
        if let Some(facade) = cores().get(key) {
            return Arc::clone(&facade);
        }

        cores()
            .entry(key.to_string())
            .or_insert_with(|| {
                info!(core = %key, "constructing core");
                Arc::new(Facade::new(key, config))
            })
            .clone()
    }

    /// Check whether a core is live for the given key.
    pub fn has_core(key: &str) -> bool {
        cores().contains_key(key)
    }

    /// Tear down the core for a key.
    ///
    /// The model, view, and controller registries live inside the bundle,
    /// so removing the map entry removes all three together, atomically
    /// with respect to concurrent creation of the same key. Returns
    /// whether a core was actually removed.
    pub fn remove_core(key: &str) -> bool {
        let removed = cores().remove(key).is_some();
        if removed {
            info!(core = %key, "removed core");
        }
        removed
    }

    /// Number of live cores in this process.
    pub fn core_count() -> usize {
        cores().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_core_is_lazy_and_cached() {
        assert!(!CoreRegistry::has_core("CoreUnitKey1"));

        let first = CoreRegistry::get_core("CoreUnitKey1");
        let second = CoreRegistry::get_core("CoreUnitKey1");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.core_key(), "CoreUnitKey1");

        CoreRegistry::remove_core("CoreUnitKey1");
    }

    #[test]
    fn test_remove_core_frees_key() {
        let before = CoreRegistry::get_core("CoreUnitKey2");
        assert!(CoreRegistry::remove_core("CoreUnitKey2"));
        assert!(!CoreRegistry::has_core("CoreUnitKey2"));
        // removing again reports nothing removed
        assert!(!CoreRegistry::remove_core("CoreUnitKey2"));

        // a fresh bundle takes over the key
        let after = CoreRegistry::get_core("CoreUnitKey2");
        assert!(!Arc::ptr_eq(&before, &after));
        CoreRegistry::remove_core("CoreUnitKey2");
    }

    #[test]
    fn test_config_applies_to_first_construction_only() {
        let mut config = CourierConfig::default();
        config.observer_warn_threshold = 3;

        let core = CoreRegistry::get_core_with_config("CoreUnitKey3", config);
        assert_eq!(core.config().observer_warn_threshold, 3);

        // existing core ignores the new config
        let mut other = CourierConfig::default();
        other.observer_warn_threshold = 99;
        let same = CoreRegistry::get_core_with_config("CoreUnitKey3", other);
        assert_eq!(same.config().observer_warn_threshold, 3);

        CoreRegistry::remove_core("CoreUnitKey3");
    }

    #[test]
    fn test_concurrent_get_yields_one_bundle() {
        let handles: Vec<_> = std::thread::scope(|scope| {
            (0..8)
                .map(|_| scope.spawn(|| CoreRegistry::get_core("CoreUnitKey4")))
                .collect::<Vec<_>>()
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect()
        });

        let first = &handles[0];
        for facade in &handles {
            assert!(Arc::ptr_eq(first, facade));
        }
        CoreRegistry::remove_core("CoreUnitKey4");
    }
}
