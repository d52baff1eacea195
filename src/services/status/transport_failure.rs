use kube::core::ErrorResponse;
use std::fmt::{Display, Formatter};

/// A failed exchange with the server.
/// When the server answered with a status document, the whole document is kept in `response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub code: Option<u16>,
    pub message: String,
    pub response: Option<ErrorResponse>,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        TransportFailure {
            code: None,
            message: message.into(),
            response: None,
        }
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    /// Machine-readable reason reported by the server, e.g. `AlreadyExists` or `Conflict`.
    pub fn reason(&self) -> Option<&str> {
        self.response
            .as_ref()
            .map(|response| response.reason.as_str())
            .filter(|reason| !reason.is_empty())
    }
}

impl From<ErrorResponse> for TransportFailure {
    fn from(response: ErrorResponse) -> Self {
        TransportFailure {
            code: Some(response.code),
            message: response.message.clone(),
            response: Some(response),
        }
    }
}

impl Display for TransportFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "'{}' (status {})", self.message, code),
            None => write!(f, "'{}'", self.message),
        }
    }
}
