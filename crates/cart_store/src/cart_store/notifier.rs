use super::Notification;

/// User-facing message channel. Fire-and-forget.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait Notifier {
    fn notify(&self, notification: Notification);
}
