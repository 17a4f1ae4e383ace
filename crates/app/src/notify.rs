//! Notification delivery: a tracing-backed notifier for the console and a
//! recording double for tests.

use std::cell::RefCell;
use std::rc::Rc;

use eventdesk_core::notify::{NotificationKind, Notifier};

/// A delivered notification as observed by a receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub dedupe_key: Option<String>,
}

/// Delivers notifications as tracing events.
///
/// Success goes to `info`, errors to `warn`; the dedupe key rides along as a
/// field so log processors can collapse repeats the way a toast UI would.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str, dedupe_key: Option<&str>) {
        match kind {
            NotificationKind::Success => {
                tracing::info!(dedupe_key, "{message}");
            }
            NotificationKind::Error => {
                tracing::warn!(dedupe_key, "{message}");
            }
        }
    }
}

/// Test double that keeps the list of currently visible notifications.
///
/// A delivery carrying a dedupe key replaces the visible notification with
/// the same key, matching toast-id semantics; unkeyed deliveries stack.
/// Clones share the same log, so a test can keep one handle and hand
/// another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    visible: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the currently visible notifications, in delivery order.
    pub fn visible(&self) -> Vec<Notification> {
        self.visible.borrow().clone()
    }

    /// Messages only, for terse assertions.
    pub fn messages(&self) -> Vec<String> {
        self.visible
            .borrow()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    /// Drop everything currently visible.
    pub fn clear(&self) {
        self.visible.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str, dedupe_key: Option<&str>) {
        let notification = Notification {
            kind,
            message: message.to_string(),
            dedupe_key: dedupe_key.map(str::to_string),
        };

        let mut visible = self.visible.borrow_mut();
        if let Some(key) = dedupe_key {
            if let Some(existing) = visible
                .iter_mut()
                .find(|n| n.dedupe_key.as_deref() == Some(key))
            {
                *existing = notification;
                return;
            }
        }
        visible.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unkeyed_notifications_stack() {
        let mut notifier = RecordingNotifier::new();

        notifier.notify(NotificationKind::Success, "first", None);
        notifier.notify(NotificationKind::Success, "second", None);

        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }

    #[test]
    fn keyed_notifications_coalesce() {
        let mut notifier = RecordingNotifier::new();

        notifier.notify(NotificationKind::Error, "conflict A", Some("rule-conflict"));
        notifier.notify(NotificationKind::Error, "conflict B", Some("rule-conflict"));

        let visible = notifier.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "conflict B");
        assert_eq!(visible[0].dedupe_key.as_deref(), Some("rule-conflict"));
    }

    #[test]
    fn different_keys_do_not_coalesce() {
        let mut notifier = RecordingNotifier::new();

        notifier.notify(NotificationKind::Error, "a", Some("key-a"));
        notifier.notify(NotificationKind::Error, "b", Some("key-b"));

        assert_eq!(notifier.visible().len(), 2);
    }

    #[test]
    fn clones_share_the_log() {
        let notifier = RecordingNotifier::new();
        let mut handle = notifier.clone();

        handle.notify(NotificationKind::Success, "shared", None);

        assert_eq!(notifier.messages(), vec!["shared"]);
    }

    #[test]
    fn keyed_replacement_keeps_its_position() {
        let mut notifier = RecordingNotifier::new();

        notifier.notify(NotificationKind::Error, "old", Some("k"));
        notifier.notify(NotificationKind::Success, "later", None);
        notifier.notify(NotificationKind::Error, "new", Some("k"));

        assert_eq!(notifier.messages(), vec!["new", "later"]);
    }
}
