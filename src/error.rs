//! # Error Types
//!
//! Structured error handling for the notification core using thiserror
//! for typed variants instead of `Box<dyn Error>` patterns.
//!
//! Two kinds of failure exist in this crate and they are deliberately kept
//! apart:
//!
//! - **Usage errors** (`NotifierUnbound`, `Configuration`) indicate a wiring
//!   bug in the caller and always surface as `Err`.
//! - **Not-found conditions** (unknown notification, mediator, proxy, or
//!   command names) are ordinary negative results — `Option` or `bool`
//!   returns — and never appear here.

use thiserror::Error;

/// Boxed error returned by consumer-provided handlers (mediator
/// notification handlers, command bodies, raw observer callbacks).
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for consumer-provided handlers.
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// Error type for all fallible operations in the notification core.
#[derive(Error, Debug)]
pub enum CourierError {
    /// A collaborator tried to resolve its core or send a notification
    /// before the owning registry bound a core key to it.
    #[error("notifier not yet bound to a core key")]
    NotifierUnbound,

    /// An observer callback failed while a notification was being
    /// broadcast. Observers later in the dispatch snapshot were not
    /// invoked.
    #[error("observer for '{notification}' failed: {reason}")]
    ObserverFailure {
        notification: String,
        reason: String,
    },

    /// A command bound to a notification name failed during execution.
    #[error("command for '{notification}' failed: {reason}")]
    CommandFailure {
        notification: String,
        reason: String,
    },

    /// Environment configuration could not be parsed.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl CourierError {
    /// Create an observer failure error
    pub fn observer_failure(notification: impl Into<String>, source: HandlerError) -> Self {
        Self::ObserverFailure {
            notification: notification.into(),
            reason: source.to_string(),
        }
    }

    /// Create a command failure error
    pub fn command_failure(notification: impl Into<String>, source: HandlerError) -> Self {
        Self::CommandFailure {
            notification: notification.into(),
            reason: source.to_string(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CourierError>;
