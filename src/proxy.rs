//! # Proxy
//!
//! A named data holder with a registration lifecycle.

use crate::notifier::Notifier;
use serde_json::Value;
use std::any::Any;

/// A named component that holds and exposes application data.
///
/// Proxies carry no notification interests; they are looked up by name and
/// may send notifications themselves once registered (the model registry
/// binds the owning core key through [`notifier`](Proxy::notifier)).
pub trait Proxy: Any + Send + Sync {
    /// Unique name this proxy is registered and retrieved under.
    fn name(&self) -> &str;

    /// The embedded notifier; bound to the owning core at registration.
    fn notifier(&self) -> &Notifier;

    /// Snapshot of the held data, if the proxy chooses to expose one.
    fn data(&self) -> Option<Value> {
        None
    }

    /// Called exactly once when the proxy is registered.
    fn on_register(&self) {}

    /// Called exactly once when the proxy is removed.
    fn on_remove(&self) {}
}
