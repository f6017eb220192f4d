use super::*;
use crate::kernel::services::ports::config::DEFAULT_EXEC_ENDPOINT;

#[test]
fn new_uses_default_endpoints_without_credentials() {
    let config = ConfigService::new();
    assert_eq!(config.gateway().exec_endpoint, DEFAULT_EXEC_ENDPOINT);
    assert!(config.gateway().api_key.is_none());
}

#[test]
fn with_gateway_config_keeps_overrides() {
    let mut gateway = GatewayConfig::default();
    gateway.exec_endpoint = "http://localhost:2000/execute".to_string();
    gateway.api_key = Some("test-key".to_string());

    let config = ConfigService::with_gateway_config(gateway);
    assert_eq!(config.gateway().exec_endpoint, "http://localhost:2000/execute");
    assert_eq!(config.gateway().api_key.as_deref(), Some("test-key"));
}

#[test]
fn set_api_key_overrides_in_place() {
    let mut config = ConfigService::new();
    config.set_api_key(Some("k".to_string()));
    assert_eq!(config.gateway().api_key.as_deref(), Some("k"));

    config.set_api_key(None);
    assert!(config.gateway().api_key.is_none());
}
