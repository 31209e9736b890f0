//! # Registry Infrastructure
//!
//! The registries that make up a core, plus the process-wide multiton
//! that holds the cores themselves.
//!
//! ## Available Registries
//!
//! - **ViewRegistry**: observer lists and mediators; performs broadcast
//! - **CommandRegistry**: notification-name to command-factory bindings
//! - **ProxyRegistry**: named data holders with lifecycle hooks
//! - **CoreRegistry**: process-wide key to core-bundle multiton
//!
//! ## Architecture
//!
//! ```text
//! CoreRegistry (process-wide)
//! └── key → Facade
//!           ├── ProxyRegistry    (data holders)
//!           ├── ViewRegistry     (observers + mediators, broadcast)
//!           └── CommandRegistry  (command bindings, wired into the view)
//! ```

pub mod command_registry;
pub mod core_registry;
pub mod proxy_registry;
pub mod view_registry;

// Re-export main types for easy access
pub use command_registry::CommandRegistry;
pub use core_registry::CoreRegistry;
pub use proxy_registry::ProxyRegistry;
pub use view_registry::ViewRegistry;
