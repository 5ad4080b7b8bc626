// Adapters layer: concrete implementations for the relay service and the notification surface.

pub mod emailjs;
pub mod notifier;

pub use emailjs::EmailJsClient;
pub use notifier::{ConsoleNotifier, TracingNotifier};
