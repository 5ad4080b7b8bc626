use crate::utils::error::ContactError;
use serde::{Deserialize, Serialize};

/// The three fields a visitor fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub is_submitting: bool,
}

/// Template variables the relay substitutes into the outgoing email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

impl TemplateParams {
    pub fn from_form(form: &ContactForm, to_name: &str) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            message: form.message.clone(),
            to_name: to_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn sent() -> Self {
        Self {
            title: "Message sent successfully!".to_string(),
            description: "Thank you for reaching out. I'll get back to you soon.".to_string(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn failed() -> Self {
        Self {
            title: "Failed to send message".to_string(),
            description: "Please try again or contact me directly via email.".to_string(),
            variant: NotificationVariant::Destructive,
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Sent,
    /// The error is for diagnostics only; the visitor sees [`Notification::failed`].
    Failed(ContactError),
    /// Another submission from the same form was still in flight.
    Ignored,
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SubmitOutcome::Failed(_))
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, SubmitOutcome::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_params_use_relay_field_names() {
        let form = ContactForm::new("Jane Doe", "jane@example.com", "Hello");
        let params = TemplateParams::from_form(&form, "Saswati");

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from_name": "Jane Doe",
                "from_email": "jane@example.com",
                "message": "Hello",
                "to_name": "Saswati",
            })
        );
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = ContactForm::new("Jane Doe", "jane@example.com", "Hello");
        assert!(!form.is_empty());
        form.clear();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn failure_notification_is_destructive() {
        assert_eq!(Notification::sent().variant, NotificationVariant::Default);
        assert_eq!(Notification::failed().variant, NotificationVariant::Destructive);
    }
}
