//! # Observer
//!
//! The (callback, owner-identity) pair stored in a view registry's
//! per-notification lists.
//!
//! The identity half is the subtle part: an observer must be removable by
//! naming the object that owns it (a mediator, a controller, an ad hoc
//! object), the comparison must be reference identity rather than value
//! equality, and holding the identity must not keep the owner alive. A
//! [`NotifyContext`] wraps a `Weak` to the owner's shared allocation and
//! compares by allocation address, which satisfies all three at once.

use crate::error::HandlerResult;
use crate::notification::Notification;
use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

/// Callback invoked when a matching notification is broadcast.
pub type NotifyCallback = Arc<dyn Fn(&Notification) -> HandlerResult + Send + Sync>;

/// Ownership-free identity handle over a shared owner.
///
/// Two contexts compare equal only when both still have a live owner and
/// both point at the same allocation. A context whose owner has been
/// dropped never compares equal to anything, so a recycled allocation
/// address can never be mistaken for the old owner.
#[derive(Clone)]
pub struct NotifyContext {
    inner: Weak<dyn Any + Send + Sync>,
}

impl NotifyContext {
    /// Identity handle for a concrete shared owner.
    pub fn of<T: Any + Send + Sync>(owner: &Arc<T>) -> Self {
        let owner: Arc<dyn Any + Send + Sync> = owner.clone();
        let inner: Weak<dyn Any + Send + Sync> = Arc::downgrade(&owner);
        Self { inner }
    }

    /// Identity handle for an already type-erased owner.
    ///
    /// Trait objects reach this through upcasting, e.g.
    /// `NotifyContext::of_shared(mediator as Arc<dyn Any + Send + Sync>)`.
    pub fn of_shared(owner: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            inner: Arc::downgrade(&owner),
        }
    }

    /// Whether the owning allocation still has strong references.
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Reference-identity comparison, gated on liveness of both sides.
    pub fn ptr_eq(&self, other: &NotifyContext) -> bool {
        if !self.is_alive() || !other.is_alive() {
            return false;
        }
        std::ptr::addr_eq(self.inner.as_ptr(), other.inner.as_ptr())
    }
}

impl fmt::Debug for NotifyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifyContext")
            .field("addr", &(self.inner.as_ptr() as *const ()))
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// A registered (callback, owner-identity) pair.
///
/// Cloning shares the same callback and context allocations; a mediator
/// registered for several notification names holds one observer cloned
/// across all of them, which is what makes the at-most-one-per-context
/// removal rule hold.
#[derive(Clone)]
pub struct Observer {
    callback: NotifyCallback,
    context: NotifyContext,
}

impl Observer {
    pub fn new(callback: NotifyCallback, context: NotifyContext) -> Self {
        Self { callback, context }
    }

    /// Invoke the callback with the notification.
    pub fn notify(&self, notification: &Notification) -> HandlerResult {
        (self.callback)(notification)
    }

    /// Compare an identity handle to this observer's context.
    pub fn compare_context(&self, context: &NotifyContext) -> bool {
        self.context.ptr_eq(context)
    }

    pub fn context(&self) -> &NotifyContext {
        &self.context
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("callback", &"<NotifyCallback>")
            .field("context", &self.context)
            .finish()
    }
}
