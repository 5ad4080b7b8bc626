use crate::domain::model::{Notification, TemplateParams};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Where the three relay identifiers and the recipient name come from.
pub trait ConfigProvider: Send + Sync {
    fn public_key(&self) -> &str;
    fn service_id(&self) -> &str;
    fn template_id(&self) -> &str;
    fn api_base_url(&self) -> &str;
    fn recipient_name(&self) -> &str;
    fn private_key(&self) -> Option<&str> {
        None
    }
}

/// Sends one templated email through a hosted relay.
#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn send(&self, params: &TemplateParams) -> Result<()>;
}

#[async_trait]
impl<'a, T: RelayClient + ?Sized + 'a> RelayClient for &'a T {
    async fn send(&self, params: &TemplateParams) -> Result<()> {
        (**self).send(params).await
    }
}

#[async_trait]
impl<T: RelayClient + ?Sized> RelayClient for Arc<T> {
    async fn send(&self, params: &TemplateParams) -> Result<()> {
        (**self).send(params).await
    }
}

/// Surface for the success and failure toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}
