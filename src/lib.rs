#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Courier Core
//!
//! In-process publish/subscribe notification core with isolated multiton
//! cores.
//!
//! ## Overview
//!
//! Courier lets independently-constructed components communicate without
//! holding references to each other. Producers broadcast named
//! [`Notification`]s; consumers register interest by name. The whole
//! wiring — observer lists, mediators, data holders, command bindings —
//! lives in a *core* identified by a string key, and any number of fully
//! isolated cores can coexist in one process.
//!
//! ## Architecture
//!
//! A core is a bundle of three registries, created and destroyed
//! together:
//!
//! - [`registry::ViewRegistry`] — notification names to ordered observer
//!   lists, mediator names to instances; performs the synchronous
//!   broadcast
//! - [`registry::CommandRegistry`] — notification names to command
//!   factories; a fresh command runs per matching broadcast
//! - [`registry::ProxyRegistry`] — named data holders with lifecycle
//!   hooks
//!
//! The [`registry::CoreRegistry`] multiton caches one [`Facade`] bundle
//! per key with lazy, at-most-once construction.
//!
//! ## Key Features
//!
//! - **Synchronous dispatch**: broadcast is call-and-return; delivery
//!   order is registration order of the pre-call snapshot
//! - **Reentrancy-safe**: observers may register or remove observers
//!   (including themselves) while being notified
//! - **Thread-safe registries**: sharded concurrent maps throughout;
//!   writes to different keys never block each other
//! - **Identity-based removal**: observers are detached by owner
//!   identity through ownership-free weak handles
//! - **Loud wiring errors**: sending before a collaborator is bound to a
//!   core is a distinct error, never a silent no-op
//!
//! ## Module Organization
//!
//! - [`notification`] - The broadcast value type
//! - [`observer`] - Callback/identity pairs and weak context handles
//! - [`notifier`] - Late-bound core-key cell for collaborators
//! - [`mediator`], [`proxy`], [`command`] - Collaborator contracts
//! - [`registry`] - The per-core registries and the core multiton
//! - [`facade`] - Per-core bundle and convenience surface
//! - [`config`] - Runtime tuning knobs
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging initialization
//!
//! ## Quick Start
//!
//! ```rust
//! use courier_core::registry::CoreRegistry;
//! use courier_core::{HandlerResult, Mediator, Notification, Notifier};
//! use serde_json::json;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! struct PriceWatcher {
//!     notifier: Notifier,
//!     seen: AtomicUsize,
//! }
//!
//! impl Mediator for PriceWatcher {
//!     fn name(&self) -> &str {
//!         "price-watcher"
//!     }
//!     fn notifier(&self) -> &Notifier {
//!         &self.notifier
//!     }
//!     fn notification_interests(&self) -> Vec<String> {
//!         vec!["price/changed".to_string()]
//!     }
//!     fn handle_notification(&self, _note: &Notification) -> HandlerResult {
//!         self.seen.fetch_add(1, Ordering::SeqCst);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> courier_core::Result<()> {
//! let core = CoreRegistry::get_core("quick-start");
//!
//! let watcher = Arc::new(PriceWatcher {
//!     notifier: Notifier::new(),
//!     seen: AtomicUsize::new(0),
//! });
//! core.register_mediator(watcher.clone());
//!
//! core.send_notification("price/changed", Some(json!({"symbol": "XYZ"})), None)?;
//! assert_eq!(watcher.seen.load(Ordering::SeqCst), 1);
//!
//! CoreRegistry::remove_core("quick-start");
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # All tests
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod facade;
pub mod logging;
pub mod mediator;
pub mod notification;
pub mod notifier;
pub mod observer;
pub mod proxy;
pub mod registry;

pub use command::{Command, CommandFactory, MacroCommand};
pub use config::CourierConfig;
pub use error::{CourierError, HandlerError, HandlerResult, Result};
pub use facade::Facade;
pub use mediator::Mediator;
pub use notification::Notification;
pub use notifier::Notifier;
pub use observer::{NotifyCallback, NotifyContext, Observer};
pub use proxy::Proxy;
