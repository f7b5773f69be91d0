// SPDX-License-Identifier: MPL-2.0
//! Alert payloads.
//!
//! [`AlertMessage`] is what producers hand to `add`; [`QueuedAlert`] is the
//! same message once the controller has assigned it a key.

use crate::domain::alert::{AlertKey, Severity};
use std::fmt;
use std::rc::Rc;

/// Callback reversing the action an alert reports on.
///
/// Cloning shares the underlying closure, so the callback seen through the
/// controller's projection is the one the producer supplied.
#[derive(Clone)]
pub struct UndoAction(Rc<dyn Fn()>);

impl UndoAction {
    /// Wraps a closure.
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self(Rc::new(action))
    }

    /// Runs the callback.
    pub fn invoke(&self) {
        (self.0)();
    }

    /// Returns true if both handles wrap the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for UndoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UndoAction(..)")
    }
}

/// A notification supplied by a producer.
#[derive(Debug, Clone)]
pub struct AlertMessage {
    title: Option<String>,
    body: String,
    severity: Option<Severity>,
    undo: Option<UndoAction>,
}

impl AlertMessage {
    /// Creates a plain alert with the given body text.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
            severity: None,
            undo: None,
        }
    }

    /// Creates a success alert.
    pub fn success(body: impl Into<String>) -> Self {
        Self::new(body).with_severity(Severity::Success)
    }

    /// Creates an info alert.
    pub fn info(body: impl Into<String>) -> Self {
        Self::new(body).with_severity(Severity::Info)
    }

    /// Creates a warning alert.
    pub fn warning(body: impl Into<String>) -> Self {
        Self::new(body).with_severity(Severity::Warning)
    }

    /// Creates an error alert.
    pub fn error(body: impl Into<String>) -> Self {
        Self::new(body).with_severity(Severity::Error)
    }

    /// Sets the short title shown above the body.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Attaches an undo callback.
    #[must_use]
    pub fn with_undo(mut self, action: impl Fn() + 'static) -> Self {
        self.undo = Some(UndoAction::new(action));
        self
    }

    /// Attaches an already wrapped undo callback.
    #[must_use]
    pub fn with_undo_action(mut self, action: UndoAction) -> Self {
        self.undo = Some(action);
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    #[must_use]
    pub fn undo(&self) -> Option<&UndoAction> {
        self.undo.as_ref()
    }
}

/// A message sitting in a controller's queue.
#[derive(Debug, Clone)]
pub struct QueuedAlert {
    key: AlertKey,
    message: AlertMessage,
}

impl QueuedAlert {
    pub(crate) fn new(key: AlertKey, message: AlertMessage) -> Self {
        Self { key, message }
    }

    /// Key used by the view to key enter/exit transitions.
    #[must_use]
    pub fn key(&self) -> AlertKey {
        self.key
    }

    #[must_use]
    pub fn message(&self) -> &AlertMessage {
        &self.message
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.message.title()
    }

    #[must_use]
    pub fn body(&self) -> &str {
        self.message.body()
    }

    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        self.message.severity()
    }

    #[must_use]
    pub fn undo(&self) -> Option<&UndoAction> {
        self.message.undo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn new_message_is_plain() {
        let message = AlertMessage::new("saved");
        assert_eq!(message.body(), "saved");
        assert!(message.title().is_none());
        assert!(message.severity().is_none());
        assert!(message.undo().is_none());
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(AlertMessage::success("").severity(), Some(Severity::Success));
        assert_eq!(AlertMessage::info("").severity(), Some(Severity::Info));
        assert_eq!(AlertMessage::warning("").severity(), Some(Severity::Warning));
        assert_eq!(AlertMessage::error("").severity(), Some(Severity::Error));
    }

    #[test]
    fn builder_sets_title_and_undo() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let message = AlertMessage::success("Row deleted")
            .with_title("Trash")
            .with_undo(move || counter.set(counter.get() + 1));

        assert_eq!(message.title(), Some("Trash"));
        message.undo().expect("undo should be set").invoke();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn cloned_message_shares_undo_closure() {
        let message = AlertMessage::new("x").with_undo(|| {});
        let copy = message.clone();
        let original = message.undo().expect("undo should be set");
        assert!(original.ptr_eq(copy.undo().expect("undo should be set")));
    }
}
