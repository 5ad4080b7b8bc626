//! Process-wide relay handle. Initialized once, never torn down.

use crate::adapters::emailjs::EmailJsClient;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ContactError, Result};
use std::sync::OnceLock;

static RELAY: OnceLock<EmailJsClient> = OnceLock::new();

/// Builds the shared client on the first call. Later calls keep the first
/// client and ignore their config.
pub fn init<C: ConfigProvider + ?Sized>(config: &C) -> Result<&'static EmailJsClient> {
    if let Some(existing) = RELAY.get() {
        tracing::warn!("Relay client already initialized; keeping the existing one");
        return Ok(existing);
    }

    let client = EmailJsClient::from_config(config)?;
    let client = RELAY.get_or_init(|| client);
    tracing::debug!("Relay client initialized for {}", client.endpoint());
    Ok(client)
}

pub fn global() -> Result<&'static EmailJsClient> {
    RELAY.get().ok_or(ContactError::RelayNotInitialized)
}

pub fn is_initialized() -> bool {
    RELAY.get().is_some()
}
