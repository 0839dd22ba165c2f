use cart_store::{Notification, Notifier};

/// Prints notifications to stderr so that stdout only carries the cart.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", notification);
    }
}
