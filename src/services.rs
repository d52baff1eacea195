pub mod feature_detector;
pub mod feature_flags;
pub mod path_resolver;
pub mod resource_accessor;
pub mod resource_client;
pub mod retry_policy;
pub mod status;
pub mod transport;
pub mod watch_session;
