//! # Notifier
//!
//! The late-bound link between a collaborator and the core that owns it.
//!
//! Commands, mediators, and proxies all need to send notifications, but
//! none of them know which core they belong to at construction time. Each
//! embeds a `Notifier`; the owning registry binds the core key at a
//! well-defined moment (command: at execution, mediator and proxy: at
//! registration). Until then, resolving the core or sending through it is
//! a wiring bug and fails loudly rather than silently dropping the send.

use crate::error::{CourierError, Result};
use crate::facade::Facade;
use crate::registry::CoreRegistry;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

/// Late-bound core-key cell embedded in every collaborator.
#[derive(Debug, Default)]
pub struct Notifier {
    core_key: RwLock<Option<String>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the owning core's key.
    ///
    /// Called by the registry that takes ownership of the collaborator.
    /// Re-binding overwrites: a collaborator moved between cores follows
    /// its latest registration.
    pub fn bind(&self, key: &str) {
        *self.core_key.write() = Some(key.to_string());
    }

    /// The bound core key, if any.
    pub fn core_key(&self) -> Option<String> {
        self.core_key.read().clone()
    }

    /// Resolve the owning core's facade.
    ///
    /// Fails with [`CourierError::NotifierUnbound`] before [`bind`](Self::bind)
    /// has been called.
    pub fn facade(&self) -> Result<Arc<Facade>> {
        let key = self
            .core_key
            .read()
            .clone()
            .ok_or(CourierError::NotifierUnbound)?;
        Ok(CoreRegistry::get_core(&key))
    }

    /// Construct and broadcast a notification through the owning core.
    pub fn send_notification(
        &self,
        name: &str,
        body: Option<Value>,
        note_type: Option<String>,
    ) -> Result<()> {
        self.facade()?.send_notification(name, body, note_type)
    }
}
