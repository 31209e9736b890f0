//! # Proxy Registry
//!
//! Per-core registry of named data holders with lifecycle hooks.
//!
//! The ProxyRegistry (the model of a core) is a plain name-to-instance
//! store: proxies carry no notification interests, so registration wires
//! nothing into the view. Its job is ownership, retrieval, and the
//! register/remove lifecycle hooks.

use crate::proxy::Proxy;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;

/// Per-core store of named data holders.
pub struct ProxyRegistry {
    /// The core this registry belongs to
    core_key: String,
    /// Mapping of proxy names to proxy instances
    proxy_map: DashMap<String, Arc<dyn Proxy>>,
}

impl ProxyRegistry {
    pub(crate) fn new(core_key: &str) -> Self {
        Self {
            core_key: core_key.to_string(),
            proxy_map: DashMap::new(),
        }
    }

    /// The key of the core this registry belongs to.
    pub fn core_key(&self) -> &str {
        &self.core_key
    }

    /// Register a proxy by name.
    ///
    /// Binds the proxy's notifier to this core, stores it (re-registering
    /// a name replaces the previous instance), and runs its registration
    /// hook.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        let name = proxy.name().to_string();

        proxy.notifier().bind(&self.core_key);
        self.proxy_map.insert(name.clone(), Arc::clone(&proxy));
        proxy.on_register();

        info!(
            core = %self.core_key,
            proxy = %name,
            "registered proxy"
        );
    }

    /// Retrieve a registered proxy by name.
    pub fn retrieve_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        self.proxy_map.get(name).map(|p| Arc::clone(&p))
    }

    /// Check whether a proxy is registered under the given name.
    pub fn has_proxy(&self, name: &str) -> bool {
        self.proxy_map.contains_key(name)
    }

    /// Remove a proxy by name, running its removal hook.
    ///
    /// Returns the removed proxy, or `None` if the name was not
    /// registered.
    pub fn remove_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        let (_, proxy) = self.proxy_map.remove(name)?;
        proxy.on_remove();

        info!(
            core = %self.core_key,
            proxy = %name,
            "removed proxy"
        );
        Some(proxy)
    }

    /// Number of registered proxies.
    pub fn proxy_count(&self) -> usize {
        self.proxy_map.len()
    }
}

impl std::fmt::Debug for ProxyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyRegistry")
            .field("core_key", &self.core_key)
            .field("proxies", &self.proxy_map.len())
            .finish()
    }
}
