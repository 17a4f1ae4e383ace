//! Notification boundary contract.
//!
//! The editor and stores report outcomes through this trait; delivery
//! (logging, toasts, a recording double) is the application layer's concern.

/// Whether a notification reports a successful operation or a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Receiver for user-facing feedback.
///
/// `dedupe_key` identifies notifications that should coalesce: a delivery
/// carrying a key replaces any visible notification with the same key
/// instead of stacking a duplicate. Implementations own that behavior; the
/// callers just tag the message.
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: &str, dedupe_key: Option<&str>);
}
