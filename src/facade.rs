//! # Facade
//!
//! The per-core bundle that owns a model, view, and controller, and the
//! single convenience surface most callers go through.
//!
//! A facade is only ever constructed by the
//! [`CoreRegistry`](crate::registry::CoreRegistry) multiton: direct
//! construction is not exposed, which is what makes "one bundle per key"
//! impossible to violate rather than merely checked.

use crate::config::CourierConfig;
use crate::command::CommandFactory;
use crate::error::Result;
use crate::mediator::Mediator;
use crate::notification::Notification;
use crate::proxy::Proxy;
use crate::registry::{CommandRegistry, ProxyRegistry, ViewRegistry};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// One isolated core: a keyed bundle of model, view, and controller.
pub struct Facade {
    core_key: String,
    config: Arc<CourierConfig>,
    model: Arc<ProxyRegistry>,
    view: Arc<ViewRegistry>,
    controller: Arc<CommandRegistry>,
}

impl Facade {
    /// Construct the bundle for a key. Only the core registry calls this,
    /// through its atomic insert-if-absent.
    pub(crate) fn new(core_key: &str, config: CourierConfig) -> Self {
        let config = Arc::new(config);
        let model = Arc::new(ProxyRegistry::new(core_key));
        let view = Arc::new(ViewRegistry::new(core_key, Arc::clone(&config)));
        let controller = CommandRegistry::new(core_key, Arc::clone(&view));

        debug!(core = %core_key, "constructed core bundle");

        Self {
            core_key: core_key.to_string(),
            config,
            model,
            view,
            controller,
        }
    }

    /// The key this core is registered under.
    pub fn core_key(&self) -> &str {
        &self.core_key
    }

    /// The configuration this core was constructed with.
    pub fn config(&self) -> &CourierConfig {
        &self.config
    }

    /// The data-holder registry of this core.
    pub fn model(&self) -> &Arc<ProxyRegistry> {
        &self.model
    }

    /// The observer/mediator registry of this core.
    pub fn view(&self) -> &Arc<ViewRegistry> {
        &self.view
    }

    /// The command registry of this core.
    pub fn controller(&self) -> &Arc<CommandRegistry> {
        &self.controller
    }

    // ---- command operations -------------------------------------------

    /// Bind a command factory to a notification name.
    pub fn register_command(&self, name: &str, factory: CommandFactory) {
        self.controller.register_command(name, factory);
    }

    /// Check whether a command is bound to the given notification name.
    pub fn has_command(&self, name: &str) -> bool {
        self.controller.has_command(name)
    }

    /// Remove a command binding.
    pub fn remove_command(&self, name: &str) {
        self.controller.remove_command(name);
    }

    // ---- proxy operations ---------------------------------------------

    /// Register a data holder with this core's model.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        self.model.register_proxy(proxy);
    }

    /// Retrieve a data holder by name.
    pub fn retrieve_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.retrieve_proxy(name)
    }

    /// Check whether a data holder is registered under the given name.
    pub fn has_proxy(&self, name: &str) -> bool {
        self.model.has_proxy(name)
    }

    /// Remove a data holder by name.
    pub fn remove_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.remove_proxy(name)
    }

    // ---- mediator operations ------------------------------------------

    /// Register a mediator with this core's view.
    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        self.view.register_mediator(mediator);
    }

    /// Retrieve a mediator by name.
    pub fn retrieve_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.retrieve_mediator(name)
    }

    /// Check whether a mediator is registered under the given name.
    pub fn has_mediator(&self, name: &str) -> bool {
        self.view.has_mediator(name)
    }

    /// Remove a mediator by name.
    pub fn remove_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.remove_mediator(name)
    }

    // ---- notification operations --------------------------------------

    /// Construct and broadcast a notification.
    pub fn send_notification(
        &self,
        name: &str,
        body: Option<Value>,
        note_type: Option<String>,
    ) -> Result<()> {
        self.notify_observers(&Notification::from_parts(name, body, note_type))
    }

    /// Broadcast a caller-built notification.
    pub fn notify_observers(&self, notification: &Notification) -> Result<()> {
        self.view.notify_observers(notification)
    }
}

impl std::fmt::Debug for Facade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Facade")
            .field("core_key", &self.core_key)
            .field("model", &self.model)
            .field("view", &self.view)
            .field("controller", &self.controller)
            .finish()
    }
}
