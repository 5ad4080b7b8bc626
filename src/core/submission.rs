use crate::domain::model::{ContactForm, ContactFormState, Notification, SubmitOutcome, TemplateParams};
use crate::domain::ports::{Notifier, RelayClient};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One contact form: its fields, the in-flight flag, and where submissions go.
///
/// The state lock is only held for short synchronous sections and never across
/// the relay call, so other tasks can read the form while a submission runs.
pub struct ContactSubmission<R: RelayClient, N: Notifier> {
    relay: R,
    notifier: N,
    recipient_name: String,
    state: Mutex<ContactFormState>,
}

/// Clears `is_submitting` when dropped, whichever way `submit` exits.
struct SubmittingGuard<'a> {
    state: &'a Mutex<ContactFormState>,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_submitting = false;
    }
}

impl<R: RelayClient, N: Notifier> ContactSubmission<R, N> {
    pub fn new(relay: R, notifier: N, recipient_name: impl Into<String>) -> Self {
        Self {
            relay,
            notifier,
            recipient_name: recipient_name.into(),
            state: Mutex::new(ContactFormState::default()),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ContactFormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.lock_state().form.name = name.into();
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.lock_state().form.email = email.into();
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.lock_state().form.message = message.into();
    }

    pub fn fill(&self, form: ContactForm) {
        self.lock_state().form = form;
    }

    pub fn form(&self) -> ContactForm {
        self.lock_state().form.clone()
    }

    pub fn state(&self) -> ContactFormState {
        self.lock_state().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock_state().is_submitting
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Sends the current fields to the relay.
    ///
    /// On success the fields are cleared and [`Notification::sent`] is shown.
    /// On failure the fields are kept, [`Notification::failed`] is shown and the
    /// error is logged. A call made while another is in flight returns
    /// [`SubmitOutcome::Ignored`] without touching the relay.
    pub async fn submit(&self) -> SubmitOutcome {
        let (params, guard) = {
            let mut state = self.lock_state();
            if state.is_submitting {
                tracing::debug!("Submission already in flight, ignoring");
                return SubmitOutcome::Ignored;
            }
            state.is_submitting = true;
            (
                TemplateParams::from_form(&state.form, &self.recipient_name),
                SubmittingGuard { state: &self.state },
            )
        };

        tracing::debug!("Submitting contact message from {}", params.from_email);

        let outcome = match self.relay.send(&params).await {
            Ok(()) => {
                self.lock_state().form.clear();
                tracing::info!("Contact message sent");
                self.notifier.notify(&Notification::sent());
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!("Relay error: {}", e);
                self.notifier.notify(&Notification::failed());
                SubmitOutcome::Failed(e)
            }
        };

        drop(guard);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ContactError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubRelay {
        fail: bool,
        calls: AtomicUsize,
        last: Mutex<Option<TemplateParams>>,
    }

    impl StubRelay {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl RelayClient for StubRelay {
        async fn send(&self, params: &TemplateParams) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(params.clone());
            if self.fail {
                Err(ContactError::RelayRejected {
                    status: 500,
                    body: "boom".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: &Notification) {
            self.seen.lock().unwrap().push(notification.clone());
        }
    }

    #[tokio::test]
    async fn test_payload_carries_recipient_name() {
        let relay = Arc::new(StubRelay::new(false));
        let flow = ContactSubmission::new(relay.clone(), RecordingNotifier::default(), "Saswati");
        flow.fill(ContactForm::new("Jane Doe", "jane@example.com", "Hello"));

        assert!(flow.submit().await.is_sent());

        let sent = relay.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.to_name, "Saswati");
        assert_eq!(sent.from_name, "Jane Doe");
        assert_eq!(sent.from_email, "jane@example.com");
        assert_eq!(sent.message, "Hello");
    }

    #[tokio::test]
    async fn test_setters_update_form() {
        let flow = ContactSubmission::new(
            StubRelay::new(false),
            RecordingNotifier::default(),
            "Saswati",
        );
        assert_eq!(flow.state(), ContactFormState::default());

        flow.set_name("Jane Doe");
        flow.set_email("jane@example.com");
        flow.set_message("Hello");

        assert_eq!(
            flow.form(),
            ContactForm::new("Jane Doe", "jane@example.com", "Hello")
        );
        assert!(flow.can_submit());
    }

    #[tokio::test]
    async fn test_failure_keeps_form_and_releases_flag() {
        let flow = ContactSubmission::new(
            StubRelay::new(true),
            RecordingNotifier::default(),
            "Saswati",
        );
        flow.fill(ContactForm::new("Jane Doe", "jane@example.com", "Hello"));

        let outcome = flow.submit().await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(ContactError::RelayRejected { status: 500, .. })
        ));
        assert!(!flow.is_submitting());
        assert_eq!(
            flow.form(),
            ContactForm::new("Jane Doe", "jane@example.com", "Hello")
        );
        assert_eq!(
            *flow.notifier.seen.lock().unwrap(),
            vec![Notification::failed()]
        );
    }
}
