//! # View Registry
//!
//! Per-core observer-list management and notification broadcast.
//!
//! ## Overview
//!
//! The ViewRegistry owns two maps for its core: notification names to
//! ordered observer lists, and mediator names to registered mediator
//! instances. It performs the synchronous broadcast that makes the
//! publish/subscribe contract work.
//!
//! ## Key Features
//!
//! - **Thread-safe observer management** using sharded concurrent maps
//! - **Snapshot-then-iterate broadcast**: no lock is held while observer
//!   callbacks run, so a callback may register or remove observers for the
//!   very notification being dispatched without deadlock or skipped
//!   delivery
//! - **At-most-one observer per context** within a notification's list
//! - **Sparse observer map**: a name's entry is pruned as soon as its list
//!   empties
//!
//! ## Usage
//!
//! ```rust
//! use courier_core::registry::CoreRegistry;
//! use courier_core::{Notification, NotifyContext, Observer};
//! use std::sync::Arc;
//!
//! # fn example() -> courier_core::Result<()> {
//! let core = CoreRegistry::get_core("view-registry-docs");
//! let owner = Arc::new(());
//!
//! core.view().register_observer(
//!     "cache/invalidate",
//!     Observer::new(Arc::new(|_note| Ok(())), NotifyContext::of(&owner)),
//! );
//! core.view().notify_observers(&Notification::new("cache/invalidate"))?;
//! # CoreRegistry::remove_core("view-registry-docs");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::config::CourierConfig;
use crate::error::{CourierError, Result};
use crate::mediator::Mediator;
use crate::notification::Notification;
use crate::observer::{NotifyCallback, NotifyContext, Observer};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::any::Any;
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

/// Per-core store of observer lists and registered mediators.
pub struct ViewRegistry {
    /// The core this registry belongs to
    core_key: String,
    /// Tuning knobs inherited from the core bundle
    config: Arc<CourierConfig>,
    /// Mapping of mediator names to mediator instances
    mediator_map: DashMap<String, Arc<dyn Mediator>>,
    /// Mapping of notification names to ordered observer lists
    observer_map: DashMap<String, Vec<Observer>>,
}

impl ViewRegistry {
    pub(crate) fn new(core_key: &str, config: Arc<CourierConfig>) -> Self {
        Self {
            core_key: core_key.to_string(),
            config,
            mediator_map: DashMap::new(),
            observer_map: DashMap::new(),
        }
    }

    /// The key of the core this registry belongs to.
    pub fn core_key(&self) -> &str {
        &self.core_key
    }

    /// Register an observer to be notified of notifications with the given
    /// name.
    ///
    /// Appends to the list for `name`, creating it if absent. This layer
    /// performs no de-duplication; callers that need the
    /// at-most-one-per-context property register one shared observer per
    /// context, as [`register_mediator`](Self::register_mediator) does.
    pub fn register_observer(&self, name: &str, observer: Observer) {
        let mut list = self.observer_map.entry(name.to_string()).or_default();
        list.push(observer);

        if list.len() > self.config.observer_warn_threshold {
            warn!(
                core = %self.core_key,
                notification = %name,
                observers = list.len(),
                "observer list exceeds warn threshold; possible registration leak"
            );
        }
    }

    /// Broadcast a notification to every observer registered for its name.
    ///
    /// The observer list is snapshotted before any callback runs: delivery
    /// goes to exactly the observers registered at call time, in
    /// registration order, regardless of how callbacks mutate the list
    /// mid-dispatch. An observer error aborts delivery to the rest of the
    /// snapshot and surfaces to the sender.
    ///
    /// No registered observers is a successful no-op.
    pub fn notify_observers(&self, notification: &Notification) -> Result<()> {
        let snapshot: Vec<Observer> = match self.observer_map.get(notification.name()) {
            Some(list) => list.clone(),
            None => return Ok(()),
        };

        if self.config.trace_dispatch {
            debug!(
                core = %self.core_key,
                notification = %notification.name(),
                observers = snapshot.len(),
                timestamp = %Utc::now().to_rfc3339(),
                "dispatching notification"
            );
        }

        for observer in &snapshot {
            observer.notify(notification).map_err(|e| {
                // a callback that already produced a typed core error (a
                // command dispatch, a nested send) keeps it; anything else
                // is an observer failure
                match e.downcast::<CourierError>() {
                    Ok(inner) => *inner,
                    Err(e) => CourierError::observer_failure(notification.name(), e),
                }
            })?;
        }
        Ok(())
    }

    /// Remove the observer whose context matches `context` from the list
    /// for `name`.
    ///
    /// At most one observer is removed (the first identity match). When
    /// the list empties, the name's entry is deleted so the map stays
    /// sparse.
    pub fn remove_observer(&self, name: &str, context: &NotifyContext) {
        let mut emptied = false;
        if let Some(mut list) = self.observer_map.get_mut(name) {
            if let Some(position) = list.iter().position(|o| o.compare_context(context)) {
                list.remove(position);
            }
            emptied = list.is_empty();
        }

        // re-checked under the entry lock so a concurrent registration
        // cannot be dropped by the prune
        if emptied {
            self.observer_map.remove_if(name, |_, list| list.is_empty());
        }
    }

    /// Register a mediator and wire it to every notification it declares
    /// interest in.
    ///
    /// Registering a name that is already taken is a no-op; the existing
    /// mediator must be removed first. Otherwise the mediator's notifier
    /// is bound to this core, the mediator is stored by name, its
    /// interests are consulted once, one shared observer is registered for
    /// each interest, and its registration hook runs.
    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        let name = mediator.name().to_string();

        // do not allow re-registration (the mediator must be removed first)
        if self.mediator_map.contains_key(&name) {
            debug!(
                core = %self.core_key,
                mediator = %name,
                "mediator already registered; ignoring"
            );
            return;
        }

        mediator.notifier().bind(&self.core_key);

        match self.mediator_map.entry(name.clone()) {
            // lost a registration race for the same name
            Entry::Occupied(_) => return,
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(&mediator));
            }
        }

        let interests = mediator.notification_interests();
        if !interests.is_empty() {
            // One shared observer for all interests: same callback, same
            // context. This is what guarantees at-most-one-per-context and
            // single delivery even if interests overlap.
            let target: Weak<dyn Mediator> = Arc::downgrade(&mediator);
            let callback: NotifyCallback = Arc::new(move |note: &Notification| {
                match target.upgrade() {
                    Some(mediator) => mediator.handle_notification(note),
                    // owner already gone; stale entry delivers nothing
                    None => Ok(()),
                }
            });
            let context =
                NotifyContext::of_shared(Arc::clone(&mediator) as Arc<dyn Any + Send + Sync>);
            let observer = Observer::new(callback, context);

            for interest in &interests {
                self.register_observer(interest, observer.clone());
            }
        }

        mediator.on_register();

        info!(
            core = %self.core_key,
            mediator = %name,
            interests = interests.len(),
            "registered mediator"
        );
    }

    /// Retrieve a registered mediator by name.
    pub fn retrieve_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        self.mediator_map.get(name).map(|m| Arc::clone(&m))
    }

    /// Check whether a mediator is registered under the given name.
    pub fn has_mediator(&self, name: &str) -> bool {
        self.mediator_map.contains_key(name)
    }

    /// Remove a mediator, detaching it from every notification it was
    /// interested in.
    ///
    /// Returns the removed mediator, or `None` if the name was not
    /// registered. The removal hook runs exactly once even under
    /// concurrent removal of the same name.
    pub fn remove_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        // claiming the entry first makes concurrent double-removal yield
        // exactly one hook invocation
        let (_, mediator) = self.mediator_map.remove(name)?;

        let context = NotifyContext::of_shared(Arc::clone(&mediator) as Arc<dyn Any + Send + Sync>);
        for interest in mediator.notification_interests() {
            self.remove_observer(&interest, &context);
        }

        mediator.on_remove();

        info!(
            core = %self.core_key,
            mediator = %name,
            "removed mediator"
        );
        Some(mediator)
    }

    /// Number of observers currently registered for a notification name.
    pub fn observer_count(&self, name: &str) -> usize {
        self.observer_map.get(name).map_or(0, |list| list.len())
    }

    /// Number of registered mediators.
    pub fn mediator_count(&self) -> usize {
        self.mediator_map.len()
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("core_key", &self.core_key)
            .field("mediators", &self.mediator_map.len())
            .field("notification_names", &self.observer_map.len())
            .finish()
    }
}
