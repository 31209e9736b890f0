//! Shared fixtures for integration tests.
//!
//! Counter-instrumented mediator, proxy, and command implementations used
//! across the suites.

#![allow(dead_code)]

use courier_core::{Command, HandlerResult, Mediator, Notification, Notifier, Proxy};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mediator that records every lifecycle event and handled notification.
///
/// With a `remove_self_on` trigger set, the mediator removes itself from
/// its core (through its own notifier, the way a production mediator
/// would) upon handling that notification.
pub struct RecordingMediator {
    name: String,
    notifier: Notifier,
    interests: Vec<String>,
    handled: AtomicUsize,
    registered: AtomicUsize,
    removed: AtomicUsize,
    last_body: Mutex<Option<Value>>,
    remove_self_on: Option<String>,
}

impl RecordingMediator {
    pub fn new(name: &str, interests: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            notifier: Notifier::new(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            handled: AtomicUsize::new(0),
            registered: AtomicUsize::new(0),
            removed: AtomicUsize::new(0),
            last_body: Mutex::new(None),
            remove_self_on: None,
        })
    }

    /// A mediator that removes itself when it handles `trigger`.
    pub fn self_removing(name: &str, interests: &[&str], trigger: &str) -> Arc<Self> {
        let mut mediator = Self {
            name: name.to_string(),
            notifier: Notifier::new(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            handled: AtomicUsize::new(0),
            registered: AtomicUsize::new(0),
            removed: AtomicUsize::new(0),
            last_body: Mutex::new(None),
            remove_self_on: None,
        };
        mediator.remove_self_on = Some(trigger.to_string());
        Arc::new(mediator)
    }

    pub fn handled(&self) -> usize {
        self.handled.load(Ordering::SeqCst)
    }

    pub fn registered(&self) -> usize {
        self.registered.load(Ordering::SeqCst)
    }

    pub fn removed(&self) -> usize {
        self.removed.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

impl Mediator for RecordingMediator {
    fn name(&self) -> &str {
        &self.name
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    fn notification_interests(&self) -> Vec<String> {
        self.interests.clone()
    }

    fn handle_notification(&self, notification: &Notification) -> HandlerResult {
        self.handled.fetch_add(1, Ordering::SeqCst);
        *self.last_body.lock().unwrap() = notification.body().cloned();

        if self.remove_self_on.as_deref() == Some(notification.name()) {
            self.notifier.facade()?.remove_mediator(&self.name);
        }
        Ok(())
    }

    fn on_register(&self) {
        self.registered.fetch_add(1, Ordering::SeqCst);
    }

    fn on_remove(&self) {
        self.removed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Proxy holding a JSON payload, with instrumented lifecycle hooks.
pub struct RecordingProxy {
    name: String,
    notifier: Notifier,
    data: Value,
    registered: AtomicUsize,
    removed: AtomicUsize,
}

impl RecordingProxy {
    pub fn new(name: &str, data: Value) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            notifier: Notifier::new(),
            data,
            registered: AtomicUsize::new(0),
            removed: AtomicUsize::new(0),
        })
    }

    pub fn registered(&self) -> usize {
        self.registered.load(Ordering::SeqCst)
    }

    pub fn removed(&self) -> usize {
        self.removed.load(Ordering::SeqCst)
    }
}

impl Proxy for RecordingProxy {
    fn name(&self) -> &str {
        &self.name
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    fn data(&self) -> Option<Value> {
        Some(self.data.clone())
    }

    fn on_register(&self) {
        self.registered.fetch_add(1, Ordering::SeqCst);
    }

    fn on_remove(&self) {
        self.removed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Command that bumps a shared counter and records the core key it was
/// bound with.
pub struct CountingCommand {
    notifier: Notifier,
    count: Arc<AtomicUsize>,
    bound_keys: Arc<Mutex<Vec<String>>>,
}

impl CountingCommand {
    pub fn new(count: Arc<AtomicUsize>, bound_keys: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            notifier: Notifier::new(),
            count,
            bound_keys,
        }
    }
}

impl Command for CountingCommand {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    fn execute(&self, _notification: &Notification) -> HandlerResult {
        if let Some(key) = self.notifier.core_key() {
            self.bound_keys.lock().unwrap().push(key);
        }
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
