use crate::config::toml_config::ContactConfig;
use crate::domain::model::ContactForm;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "portfolio-contact")]
#[command(about = "Send a message through the portfolio contact form")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, env = "EMAILJS_PUBLIC_KEY", hide_env_values = true)]
    pub public_key: Option<String>,

    #[arg(long, env = "EMAILJS_SERVICE_ID")]
    pub service_id: Option<String>,

    #[arg(long, env = "EMAILJS_TEMPLATE_ID")]
    pub template_id: Option<String>,

    #[arg(long, env = "EMAILJS_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Display name the message is addressed to
    #[arg(long)]
    pub recipient_name: Option<String>,

    /// Your name
    #[arg(long)]
    pub name: Option<String>,

    /// Your email
    #[arg(long)]
    pub email: Option<String>,

    /// Your message
    #[arg(long)]
    pub message: Option<String>,

    /// Validate everything and print the payload without sending
    #[arg(long)]
    pub dry_run: bool,

    /// Never prompt; fail on missing fields and do not offer a retry
    #[arg(long)]
    pub non_interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// File values first, then flags and `EMAILJS_*` variables on top.
    pub fn resolve(&self) -> Result<ContactConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                ContactConfig::from_file(path)?
            }
            None => ContactConfig::default(),
        };

        if let Some(public_key) = &self.public_key {
            config.relay.public_key = public_key.clone();
        }
        if let Some(service_id) = &self.service_id {
            config.relay.service_id = service_id.clone();
        }
        if let Some(template_id) = &self.template_id {
            config.relay.template_id = template_id.clone();
        }
        if let Some(private_key) = &self.private_key {
            config.relay.private_key = Some(private_key.clone());
        }
        if let Some(api_base_url) = &self.api_base_url {
            config.relay.api_base_url = api_base_url.clone();
        }
        if let Some(recipient_name) = &self.recipient_name {
            config.recipient.name = recipient_name.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Whatever the flags already filled in; the rest is prompted for.
    pub fn prefilled_form(&self) -> ContactForm {
        ContactForm::new(
            self.name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.message.clone().unwrap_or_default(),
        )
    }
}
