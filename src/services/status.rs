pub mod transport_failure;


use crate::services::status::transport_failure::TransportFailure;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error type for resource client operations.
/// Transport failures are carried unmodified so callers can map them to their own status handling:
/// server status documents stay whole in `Transport`, any other client error stays in `Other`.
#[derive(Debug)]
pub enum Status {
    NotConfigured,
    AlreadyConfigured,
    InvalidKind(String),
    MissingName,
    Transport(TransportFailure),
    Other(kube::Error),
    Decode(serde_json::Error),
    Configuration(anyhow::Error),
}

impl Status {
    pub fn is_transport(&self) -> bool {
        matches!(self, Status::Transport(_) | Status::Other(_))
    }

    /// The HTTP status code reported by the server, if the failure carried one.
    pub fn code(&self) -> Option<u16> {
        match self {
            Status::Transport(failure) => failure.code,
            _ => None,
        }
    }
}

impl From<kube::Error> for Status {
    fn from(error: kube::Error) -> Self {
        match error {
            kube::Error::Api(response) => Status::Transport(response.into()),
            kube::Error::SerdeError(e) => Status::Decode(e),
            other => Status::Other(other),
        }
    }
}

impl From<serde_json::Error> for Status {
    fn from(error: serde_json::Error) -> Self {
        Status::Decode(error)
    }
}

impl From<anyhow::Error> for Status {
    fn from(error: anyhow::Error) -> Self {
        Status::Configuration(error)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NotConfigured => write!(f, "API configuration has not been initialized"),
            Status::AlreadyConfigured => write!(f, "API configuration has already been initialized"),
            Status::InvalidKind(reason) => write!(f, "Invalid kind descriptor: {}", reason),
            Status::MissingName => write!(f, "Object name is required for this operation"),
            Status::Transport(failure) => write!(f, "Transport error: {}", failure),
            Status::Other(e) => write!(f, "Transport error: {}", e),
            Status::Decode(cause) => write!(f, "Failed to decode response: {}", cause),
            Status::Configuration(cause) => write!(f, "Configuration error: {}", cause),
        }
    }
}

impl Error for Status {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Status::Transport(failure) => failure
                .response
                .as_ref()
                .map(|response| response as &(dyn Error + 'static)),
            Status::Other(e) => Some(e),
            Status::Decode(e) => Some(e),
            Status::Configuration(cause) => Some(&**cause),
            _ => None,
        }
    }
}
