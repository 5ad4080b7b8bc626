use crate::core::submission::ContactSubmission;
use crate::domain::model::{ContactForm, SubmitOutcome, TemplateParams};
use crate::domain::ports::{Notifier, RelayClient};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{validate_email, validate_required};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }

    fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.key() == key)
    }

    fn get(self, form: &ContactForm) -> &str {
        match self {
            Field::Name => &form.name,
            Field::Email => &form.email,
            Field::Message => &form.message,
        }
    }

    fn slot(self, form: &mut ContactForm) -> &mut String {
        match self {
            Field::Name => &mut form.name,
            Field::Email => &mut form.email,
            Field::Message => &mut form.message,
        }
    }
}

/// Field checks the form applies before anything reaches the relay:
/// every field is required and the email must look like an address.
/// Returns the form with the email sanitized the way an email input does it.
pub fn validate_form(form: &ContactForm) -> Result<ContactForm> {
    let mut sanitized = form.clone();
    sanitized.email = sanitized
        .email
        .trim()
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .collect();

    for field in Field::ALL {
        validate_required(field.key(), field.get(&sanitized))?;
    }
    validate_email(Field::Email.key(), &sanitized.email)?;

    Ok(sanitized)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormResult {
    Sent,
    /// The last attempt failed and no retry was requested.
    Failed,
    Ignored,
}

/// Terminal rendition of the contact card: prompts, "Sending..." and retry.
pub struct ConsoleForm<R: RelayClient, N: Notifier> {
    flow: ContactSubmission<R, N>,
    interactive: bool,
}

impl<R: RelayClient, N: Notifier> ConsoleForm<R, N> {
    pub fn new(flow: ContactSubmission<R, N>, interactive: bool) -> Self {
        Self { flow, interactive }
    }

    pub fn flow(&self) -> &ContactSubmission<R, N> {
        &self.flow
    }

    /// Payload the next submission would carry.
    pub fn preview(&self) -> TemplateParams {
        TemplateParams::from_form(&self.flow.form(), self.flow.recipient_name())
    }

    /// Fills the missing fields from `input` until the form passes
    /// [`validate_form`], then loads it into the flow.
    pub async fn collect<I, O>(
        &self,
        prefilled: ContactForm,
        input: &mut I,
        output: &mut O,
    ) -> Result<ContactForm>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let mut form = prefilled;

        loop {
            for field in Field::ALL {
                if !field.get(&form).is_empty() {
                    continue;
                }
                if !self.interactive {
                    return Err(ContactError::ValidationError {
                        field: field.key().to_string(),
                        reason: "Please fill out this field".to_string(),
                    });
                }
                *field.slot(&mut form) = prompt(field.placeholder(), input, output).await?;
            }

            match validate_form(&form) {
                Ok(valid) => {
                    self.flow.fill(valid.clone());
                    return Ok(valid);
                }
                Err(ContactError::ValidationError { field, reason }) if self.interactive => {
                    tracing::debug!("Field {} rejected: {}", field, reason);
                    write_line(output, &format!("⚠️  {}", reason)).await?;
                    if let Some(field) = Field::from_key(&field) {
                        field.slot(&mut form).clear();
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Submits the loaded form, offering a retry after each failure.
    pub async fn run<I, O>(&self, input: &mut I, output: &mut O) -> Result<FormResult>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        loop {
            if !self.flow.can_submit() {
                return Ok(FormResult::Ignored);
            }

            write_line(output, "Sending...").await?;
            match self.flow.submit().await {
                SubmitOutcome::Sent => return Ok(FormResult::Sent),
                SubmitOutcome::Ignored => return Ok(FormResult::Ignored),
                SubmitOutcome::Failed(_) => {
                    if !self.interactive {
                        return Ok(FormResult::Failed);
                    }
                    let answer = prompt("Retry? [y/N]", input, output).await?;
                    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                        return Ok(FormResult::Failed);
                    }
                    tracing::info!("Retrying submission");
                }
            }
        }
    }
}

async fn write_line<O: AsyncWrite + Unpin>(output: &mut O, line: &str) -> Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

async fn prompt<I, O>(label: &str, input: &mut I, output: &mut O) -> Result<String>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    output.write_all(format!("{}: ", label).as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Err(ContactError::IoError(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("input closed while waiting for {}", label),
        )));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
