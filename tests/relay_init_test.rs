use portfolio_contact::core::relay;
use portfolio_contact::{ContactConfig, ContactError};

fn config(public_key: &str, base_url: &str) -> ContactConfig {
    let mut config = ContactConfig::default();
    config.relay.public_key = public_key.to_string();
    config.relay.service_id = "service_test".to_string();
    config.relay.template_id = "template_test".to_string();
    config.relay.api_base_url = base_url.to_string();
    config
}

// The handle is process-wide, so the whole lifecycle lives in one test.
#[test]
fn test_relay_initializes_once() {
    assert!(!relay::is_initialized());
    assert!(matches!(relay::global(), Err(ContactError::RelayNotInitialized)));

    // 無效的配置不會佔用單例
    assert!(relay::init(&config("", "https://first.example.com")).is_err());
    assert!(!relay::is_initialized());

    let first = relay::init(&config("pk_first", "https://first.example.com")).unwrap();
    assert_eq!(first.endpoint(), "https://first.example.com/api/v1.0/email/send");

    let second = relay::init(&config("pk_second", "https://second.example.com")).unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.endpoint(), "https://first.example.com/api/v1.0/email/send");

    let global = relay::global().unwrap();
    assert!(std::ptr::eq(first, global));
    assert!(relay::is_initialized());
}
