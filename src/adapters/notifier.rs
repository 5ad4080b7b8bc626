use crate::domain::model::{Notification, NotificationVariant};
use crate::domain::ports::Notifier;

/// Prints toasts to the terminal; destructive ones go to stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    pub fn render(notification: &Notification) -> String {
        match notification.variant {
            NotificationVariant::Default => {
                format!("✅ {}\n   {}", notification.title, notification.description)
            }
            NotificationVariant::Destructive => {
                format!("❌ {}\n   {}", notification.title, notification.description)
            }
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.variant {
            NotificationVariant::Default => println!("{}", Self::render(notification)),
            NotificationVariant::Destructive => eprintln!("{}", Self::render(notification)),
        }
    }
}

/// Emits toasts as log events, for headless use.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.variant {
            NotificationVariant::Default => tracing::info!(
                title = %notification.title,
                "{}",
                notification.description
            ),
            NotificationVariant::Destructive => tracing::warn!(
                title = %notification.title,
                "{}",
                notification.description
            ),
        }
    }
}
