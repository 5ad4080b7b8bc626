use crate::domain::model::TemplateParams;
use crate::domain::ports::{ConfigProvider, RelayClient};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

const SEND_PATH: &str = "/api/v1.0/email/send";

/// Request body of the relay's REST send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: Client,
    endpoint: String,
    public_key: String,
    service_id: String,
    template_id: String,
    private_key: Option<String>,
}

impl EmailJsClient {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        validate_non_empty_string("relay.public_key", config.public_key())?;
        validate_url("relay.api_base_url", config.api_base_url())?;

        let endpoint = format!("{}{}", config.api_base_url().trim_end_matches('/'), SEND_PATH);

        Ok(Self {
            client: Client::new(),
            endpoint,
            public_key: config.public_key().to_string(),
            service_id: config.service_id().to_string(),
            template_id: config.template_id().to_string(),
            private_key: config.private_key().map(str::to_string),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }
}

#[async_trait]
impl RelayClient for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<()> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: params,
            access_token: self.private_key.as_deref(),
        };

        tracing::debug!(
            "Posting to relay: {} (service: {}, template: {})",
            self.endpoint,
            self.service_id,
            self.template_id
        );
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        tracing::debug!("Relay response status: {}", status);

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ContactError::RelayRejected {
            status: status.as_u16(),
            body,
        })
    }
}
