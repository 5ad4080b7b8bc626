use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_API_BASE_URL: &str = "https://api.emailjs.com";

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub recipient: RecipientConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    pub private_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientConfig {
    #[serde(default = "default_recipient_name")]
    pub name: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_recipient_name() -> String {
    "Saswati".to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            service_id: String::new(),
            template_id: String::new(),
            api_base_url: default_api_base_url(),
            private_key: None,
        }
    }
}

impl Default for RecipientConfig {
    fn default() -> Self {
        Self {
            name: default_recipient_name(),
        }
    }
}

impl ContactConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContactError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ContactError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EMAILJS_PUBLIC_KEY})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("relay.public_key", &self.relay.public_key)?;
        validate_non_empty_string("relay.service_id", &self.relay.service_id)?;
        validate_non_empty_string("relay.template_id", &self.relay.template_id)?;
        validate_url("relay.api_base_url", &self.relay.api_base_url)?;
        validate_non_empty_string("recipient.name", &self.recipient.name)?;

        // 未替換的 ${VAR} 代表環境變數沒有設定
        for (field, value) in [
            ("relay.public_key", &self.relay.public_key),
            ("relay.service_id", &self.relay.service_id),
            ("relay.template_id", &self.relay.template_id),
        ] {
            if let Some(caps) = ENV_VAR_PATTERN.captures(value) {
                return Err(ContactError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: value.clone(),
                    reason: format!("environment variable {} is not set", &caps[1]),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for ContactConfig {
    fn public_key(&self) -> &str {
        &self.relay.public_key
    }

    fn service_id(&self) -> &str {
        &self.relay.service_id
    }

    fn template_id(&self) -> &str {
        &self.relay.template_id
    }

    fn api_base_url(&self) -> &str {
        &self.relay.api_base_url
    }

    fn recipient_name(&self) -> &str {
        &self.recipient.name
    }

    fn private_key(&self) -> Option<&str> {
        self.relay.private_key.as_deref().filter(|key| !key.is_empty())
    }
}

impl Validate for ContactConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[relay]
public_key = "pk_test"
service_id = "service_test"
template_id = "template_test"

[recipient]
name = "Saswati"
"#;

        let config = ContactConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.public_key(), "pk_test");
        assert_eq!(config.service_id(), "service_test");
        assert_eq!(config.template_id(), "template_test");
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.recipient_name(), "Saswati");
        assert_eq!(config.private_key(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_CONTACT_TEST_KEY", "pk_from_env");

        let toml_content = r#"
[relay]
public_key = "${PORTFOLIO_CONTACT_TEST_KEY}"
service_id = "service_test"
template_id = "template_test"
"#;

        let config = ContactConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.relay.public_key, "pk_from_env");

        std::env::remove_var("PORTFOLIO_CONTACT_TEST_KEY");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[relay]
public_key = "${PORTFOLIO_CONTACT_NEVER_SET}"
service_id = "service_test"
template_id = "template_test"
"#;

        let config = ContactConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ContactError::InvalidConfigValueError { ref field, .. } if field == "relay.public_key"
        ));
    }

    #[test]
    fn test_config_validation() {
        let missing_template = r#"
[relay]
public_key = "pk_test"
service_id = "service_test"
"#;
        let config = ContactConfig::from_toml_str(missing_template).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ContactError::MissingConfigError { ref field }) if field == "relay.template_id"
        ));

        let bad_url = r#"
[relay]
public_key = "pk_test"
service_id = "service_test"
template_id = "template_test"
api_base_url = "invalid-url"
"#;
        let config = ContactConfig::from_toml_str(bad_url).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_private_key_is_ignored() {
        let toml_content = r#"
[relay]
public_key = "pk_test"
service_id = "service_test"
template_id = "template_test"
private_key = ""
"#;
        let config = ContactConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.private_key(), None);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[relay]
public_key = "pk_file"
service_id = "service_file"
template_id = "template_file"
api_base_url = "http://127.0.0.1:9000"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = ContactConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.relay.public_key, "pk_file");
        assert_eq!(config.api_base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ContactConfig::from_toml_str("[relay\npublic_key = 1").unwrap_err();
        assert!(matches!(err, ContactError::ConfigError { .. }));
    }
}
