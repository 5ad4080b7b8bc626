pub mod relay;
pub mod submission;

pub use crate::domain::model::{ContactForm, ContactFormState, Notification, SubmitOutcome, TemplateParams};
pub use crate::domain::ports::{ConfigProvider, Notifier, RelayClient};
pub use crate::utils::error::Result;
