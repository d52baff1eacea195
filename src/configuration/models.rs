pub mod api_config;
pub mod client_settings;
