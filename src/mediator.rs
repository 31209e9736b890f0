//! # Mediator
//!
//! A named component that declares interest in notification names and
//! reacts when they are broadcast.

use crate::error::HandlerResult;
use crate::notification::Notification;
use crate::notifier::Notifier;
use std::any::Any;

/// A named consumer of notifications with a registration lifecycle.
///
/// Implementors embed a [`Notifier`] and expose it through
/// [`notifier`](Mediator::notifier); the view registry binds the owning
/// core key through it at registration time.
///
/// `notification_interests` is consulted exactly once, when the mediator
/// is registered. Changing the returned list afterward has no effect until
/// the mediator is removed and re-registered.
///
/// The `Any` supertrait lets the view registry erase a mediator to an
/// identity handle for observer bookkeeping.
pub trait Mediator: Any + Send + Sync {
    /// Unique name this mediator is registered and retrieved under.
    fn name(&self) -> &str;

    /// The embedded notifier; bound to the owning core at registration.
    fn notifier(&self) -> &Notifier;

    /// Notification names this mediator wants delivered.
    fn notification_interests(&self) -> Vec<String> {
        Vec::new()
    }

    /// React to one of the interested notifications.
    fn handle_notification(&self, _notification: &Notification) -> HandlerResult {
        Ok(())
    }

    /// Called exactly once when the mediator is registered.
    fn on_register(&self) {}

    /// Called exactly once when the mediator is removed.
    fn on_remove(&self) {}
}
