pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ContactConfig;

pub use adapters::{ConsoleNotifier, EmailJsClient, TracingNotifier};
pub use app::{ConsoleForm, FormResult};
pub use core::submission::ContactSubmission;
pub use domain::model::{ContactForm, ContactFormState, Notification, SubmitOutcome};
pub use utils::error::{ContactError, Result};
