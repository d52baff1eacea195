use super::{ApiConfig, ApiConfigProvider};
use crate::services::status::Status;

#[test]
fn reading_before_initialization_fails() {
    let provider = ApiConfigProvider::new();

    assert!(!provider.is_initialized());
    assert!(matches!(provider.config(), Err(Status::NotConfigured)));
    assert!(matches!(provider.base_path(), Err(Status::NotConfigured)));
}

#[test]
fn initialize_sets_the_configuration() {
    let provider = ApiConfigProvider::new();

    let config = provider.initialize("/api/kubernetes", "v1").unwrap();

    assert_eq!(*config, ApiConfig::new("/api/kubernetes", "v1"));
    assert_eq!(provider.base_path().unwrap(), "/api/kubernetes");
    assert_eq!(provider.config().unwrap().api_version(), "v1");
}

#[test]
fn second_initialization_is_rejected() {
    let provider = ApiConfigProvider::new();
    provider.initialize("/api/kubernetes", "v1").unwrap();

    let result = provider.initialize("/other", "v2");

    assert!(matches!(result, Err(Status::AlreadyConfigured)));
    assert_eq!(provider.base_path().unwrap(), "/api/kubernetes");
}
