//! # Command
//!
//! Stateless, freshly-constructed-per-invocation notification handlers.
//!
//! A command is bound to a notification name through the command registry;
//! every time that notification fires, the registry calls the bound
//! factory for a brand-new instance, binds the owning core key to it, and
//! executes it. Nothing of a command instance survives between
//! invocations.

use crate::error::HandlerResult;
use crate::notification::Notification;
use crate::notifier::Notifier;
use parking_lot::Mutex;
use std::sync::Arc;

/// A notification handler constructed fresh for every execution.
pub trait Command: Send + Sync {
    /// The embedded notifier; bound to the owning core before `execute`.
    fn notifier(&self) -> &Notifier;

    /// Fulfill the use-case initiated by the given notification.
    fn execute(&self, notification: &Notification) -> HandlerResult;
}

/// Zero-argument factory producing a fresh command instance.
pub type CommandFactory = Arc<dyn Fn() -> Box<dyn Command> + Send + Sync>;

/// A command composed of subcommand factories executed in FIFO order.
///
/// Each subcommand is freshly constructed, bound to this command's core
/// key, and executed with the triggering notification. The subcommand
/// list drains as it executes; a macro command instance runs its
/// subcommands at most once, which is consistent with commands being
/// single-use.
pub struct MacroCommand {
    notifier: Notifier,
    subcommands: Mutex<Vec<CommandFactory>>,
}

impl MacroCommand {
    pub fn new() -> Self {
        Self {
            notifier: Notifier::new(),
            subcommands: Mutex::new(Vec::new()),
        }
    }

    /// Append a subcommand factory. Execution order is append order.
    pub fn add_subcommand(&self, factory: CommandFactory) {
        self.subcommands.lock().push(factory);
    }

    /// Number of subcommands not yet executed.
    pub fn subcommand_count(&self) -> usize {
        self.subcommands.lock().len()
    }
}

impl Default for MacroCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for MacroCommand {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    fn execute(&self, notification: &Notification) -> HandlerResult {
        // drain under the lock, execute outside it; a subcommand may
        // legitimately reenter this macro (e.g. add further subcommands)
        let drained: Vec<CommandFactory> = self.subcommands.lock().drain(..).collect();

        for factory in drained {
            let command = factory();
            if let Some(key) = self.notifier.core_key() {
                command.notifier().bind(&key);
            }
            command.execute(notification)?;
        }
        Ok(())
    }
}
