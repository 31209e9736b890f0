//! # Command Registry
//!
//! Per-core binding of notification names to command factories.
//!
//! ## Overview
//!
//! The CommandRegistry (the controller of a core) maps notification names
//! to zero-argument command factories. For each bound name it keeps
//! exactly one observer on the view — registered on first binding, reused
//! across factory swaps, detached on removal — whose callback constructs
//! and executes the currently bound command.
//!
//! ## Key Features
//!
//! - **Thread-safe factory management** with atomic first-binding
//!   detection, so concurrent first registrations cannot double-wire the
//!   view observer
//! - **Fresh instance per execution**: commands are stateless between
//!   invocations
//! - **Weak self-reference** as the observer target and context, so the
//!   view never keeps the controller alive

use crate::command::{Command, CommandFactory};
use crate::error::{CourierError, Result};
use crate::notification::Notification;
use crate::observer::{NotifyCallback, NotifyContext, Observer};
use crate::registry::ViewRegistry;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Arc, Weak};
use tracing::{debug, info};

/// Per-core store of notification-name to command-factory bindings.
pub struct CommandRegistry {
    /// The core this registry belongs to
    core_key: String,
    /// The view this registry wires its dispatch observers into
    view: Arc<ViewRegistry>,
    /// Mapping of notification names to command factories
    command_map: DashMap<String, CommandFactory>,
}

impl CommandRegistry {
    pub(crate) fn new(core_key: &str, view: Arc<ViewRegistry>) -> Arc<Self> {
        Arc::new(Self {
            core_key: core_key.to_string(),
            view,
            command_map: DashMap::new(),
        })
    }

    /// The key of the core this registry belongs to.
    pub fn core_key(&self) -> &str {
        &self.core_key
    }

    /// Bind a command factory to a notification name.
    ///
    /// The first binding for a name registers one observer on the view;
    /// re-registration for the same name only swaps the factory, so
    /// delivery stays singular no matter how many times the command is
    /// replaced.
    pub fn register_command(self: &Arc<Self>, name: &str, factory: CommandFactory) {
        match self.command_map.entry(name.to_string()) {
            Entry::Occupied(mut bound) => {
                bound.insert(factory);
                debug!(
                    core = %self.core_key,
                    notification = %name,
                    "replaced command factory"
                );
            }
            Entry::Vacant(slot) => {
                // the observer outlives any single factory; its callback
                // always resolves the factory bound at fire time
                let registry: Weak<CommandRegistry> = Arc::downgrade(self);
                let callback: NotifyCallback = Arc::new(move |note: &Notification| {
                    match registry.upgrade() {
                        Some(registry) => registry.execute_command(note).map_err(Into::into),
                        // controller torn down; nothing to execute
                        None => Ok(()),
                    }
                });
                self.view
                    .register_observer(name, Observer::new(callback, NotifyContext::of(self)));

                slot.insert(factory);
                info!(
                    core = %self.core_key,
                    notification = %name,
                    "registered command"
                );
            }
        }
    }

    /// Construct and execute the command bound to the notification's name.
    ///
    /// No binding is a successful no-op. A bound command is constructed
    /// fresh, handed the owning core key, and executed with the
    /// notification.
    pub fn execute_command(&self, notification: &Notification) -> Result<()> {
        let factory = match self.command_map.get(notification.name()) {
            Some(factory) => Arc::clone(&factory),
            None => return Ok(()),
        };

        let command: Box<dyn Command> = factory();
        command.notifier().bind(&self.core_key);
        command
            .execute(notification)
            .map_err(|e| CourierError::command_failure(notification.name(), e))
    }

    /// Check whether a command is bound to the given notification name.
    pub fn has_command(&self, name: &str) -> bool {
        self.command_map.contains_key(name)
    }

    /// Remove a command binding and its view observer.
    ///
    /// Removing a name with no binding is a no-op.
    pub fn remove_command(self: &Arc<Self>, name: &str) {
        if self.command_map.remove(name).is_some() {
            self.view.remove_observer(name, &NotifyContext::of(self));
            info!(
                core = %self.core_key,
                notification = %name,
                "removed command"
            );
        }
    }

    /// Number of bound notification names.
    pub fn command_count(&self) -> usize {
        self.command_map.len()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("core_key", &self.core_key)
            .field("commands", &self.command_map.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CourierConfig;
    use crate::notifier::Notifier;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingCommand {
        notifier: Notifier,
        count: Arc<AtomicUsize>,
    }

    impl Command for CountingCommand {
        fn notifier(&self) -> &Notifier {
            &self.notifier
        }
        fn execute(&self, _notification: &Notification) -> crate::error::HandlerResult {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn controller(key: &str) -> Arc<CommandRegistry> {
        let view = Arc::new(ViewRegistry::new(key, Arc::new(CourierConfig::default())));
        CommandRegistry::new(key, view)
    }

    #[test]
    fn test_execute_without_binding_is_noop() {
        let controller = controller("CommandUnitKey1");
        assert!(controller
            .execute_command(&Notification::new("test/unbound"))
            .is_ok());
    }

    #[test]
    fn test_register_creates_single_observer() {
        let controller = controller("CommandUnitKey2");
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let count = Arc::clone(&count);
            controller.register_command(
                "test/rebind",
                Arc::new(move || {
                    Box::new(CountingCommand {
                        notifier: Notifier::new(),
                        count: Arc::clone(&count),
                    })
                }),
            );
        }

        // three registrations, one observer
        assert_eq!(controller.view.observer_count("test/rebind"), 1);

        controller
            .view
            .notify_observers(&Notification::new("test/rebind"))
            .unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_command_detaches_observer() {
        let controller = controller("CommandUnitKey3");
        let count = Arc::new(AtomicUsize::new(0));

        let bound = Arc::clone(&count);
        controller.register_command(
            "test/detach",
            Arc::new(move || {
                Box::new(CountingCommand {
                    notifier: Notifier::new(),
                    count: Arc::clone(&bound),
                })
            }),
        );
        assert!(controller.has_command("test/detach"));

        controller.remove_command("test/detach");
        assert!(!controller.has_command("test/detach"));
        assert_eq!(controller.view.observer_count("test/detach"), 0);

        // removing again is a no-op
        controller.remove_command("test/detach");

        controller
            .view
            .notify_observers(&Notification::new("test/detach"))
            .unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_fresh_instance_per_execution() {
        let controller = controller("CommandUnitKey4");
        let constructed = Arc::new(AtomicUsize::new(0));

        let built = Arc::clone(&constructed);
        controller.register_command(
            "test/fresh",
            Arc::new(move || {
                built.fetch_add(1, Ordering::SeqCst);
                Box::new(CountingCommand {
                    notifier: Notifier::new(),
                    count: Arc::new(AtomicUsize::new(0)),
                })
            }),
        );

        for _ in 0..4 {
            controller
                .execute_command(&Notification::new("test/fresh"))
                .unwrap();
        }
        assert_eq!(constructed.load(Ordering::SeqCst), 4);
    }
}
