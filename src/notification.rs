//! # Notification
//!
//! The value broadcast to interested observers: a name, an optional JSON
//! body, and an optional type discriminator.
//!
//! Notifications follow a publish/subscribe pattern: senders and receivers
//! need no reference to each other, only agreement on the notification
//! name. A notification is created per send and not retained once the
//! dispatch call returns.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A named event value with optional payload.
///
/// Immutable after construction: the name is the identity key used for
/// observer-list lookup, the body carries arbitrary JSON data, and the
/// type discriminator lets one name carry several payload shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    name: String,
    body: Option<Value>,
    note_type: Option<String>,
}

impl Notification {
    /// Create a notification with no payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            note_type: None,
        }
    }

    /// Create a notification carrying a JSON body.
    pub fn with_body(name: impl Into<String>, body: Value) -> Self {
        Self {
            name: name.into(),
            body: Some(body),
            note_type: None,
        }
    }

    /// Create a notification carrying a JSON body and a type discriminator.
    pub fn with_body_and_type(
        name: impl Into<String>,
        body: Value,
        note_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            body: Some(body),
            note_type: Some(note_type.into()),
        }
    }

    /// Assemble a notification from already-optional parts.
    ///
    /// Convenience for forwarding layers that accept optional body/type
    /// parameters verbatim.
    pub fn from_parts(name: impl Into<String>, body: Option<Value>, note_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            body,
            note_type,
        }
    }

    /// The notification name; identity key for observer-list lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The optional payload.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// The optional type discriminator.
    pub fn note_type(&self) -> Option<&str> {
        self.note_type.as_deref()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification Name: {}", self.name)?;
        match &self.body {
            Some(body) => write!(f, "\nBody: {body}")?,
            None => write!(f, "\nBody: null")?,
        }
        match &self.note_type {
            Some(note_type) => write!(f, "\nType: {note_type}"),
            None => write!(f, "\nType: null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_accessor() {
        let note = Notification::new("test/note");
        assert_eq!(note.name(), "test/note");
        assert!(note.body().is_none());
        assert!(note.note_type().is_none());
    }

    #[test]
    fn test_body_and_type_accessors() {
        let note = Notification::with_body_and_type("test/note", json!(5), "answer");
        assert_eq!(note.body(), Some(&json!(5)));
        assert_eq!(note.note_type(), Some("answer"));
    }

    #[test]
    fn test_from_parts_round_trip() {
        let note = Notification::from_parts("test/note", Some(json!(["a", "b"])), None);
        assert_eq!(note.body(), Some(&json!(["a", "b"])));
        assert!(note.note_type().is_none());
    }

    #[test]
    fn test_display() {
        let note = Notification::with_body("test/note", json!(1));
        let rendered = note.to_string();
        assert!(rendered.contains("Notification Name: test/note"));
        assert!(rendered.contains("Body: 1"));
        assert!(rendered.contains("Type: null"));
    }
}
