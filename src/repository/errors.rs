use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure of a backend call, tagged with the endpoint it came from.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{message}")]
    NotFound { endpoint: String, message: String },

    #[error("{message}")]
    Unauthorized { endpoint: String, message: String },

    #[error("{message}")]
    Status {
        status: u16,
        endpoint: String,
        message: String,
    },

    /// The request never produced a response.
    #[error("{message}")]
    Network { endpoint: String, message: String },

    /// A successful response carried a body that could not be decoded.
    #[error("{message}")]
    Decode { endpoint: String, message: String },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Classifies a non-success response.
    pub fn from_status(status: StatusCode, endpoint: &str, message: String) -> Self {
        let endpoint = endpoint.to_string();
        match status {
            StatusCode::NOT_FOUND => RepositoryError::NotFound { endpoint, message },
            StatusCode::UNAUTHORIZED => RepositoryError::Unauthorized { endpoint, message },
            other => RepositoryError::Status {
                status: other.as_u16(),
                endpoint,
                message,
            },
        }
    }

    /// HTTP status of the failure; `0` when no usable response was received.
    pub fn status(&self) -> u16 {
        match self {
            RepositoryError::NotFound { .. } => 404,
            RepositoryError::Unauthorized { .. } => 401,
            RepositoryError::Status { status, .. } => *status,
            RepositoryError::Network { .. } | RepositoryError::Decode { .. } => 0,
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            RepositoryError::NotFound { endpoint, .. }
            | RepositoryError::Unauthorized { endpoint, .. }
            | RepositoryError::Status { endpoint, .. }
            | RepositoryError::Network { endpoint, .. }
            | RepositoryError::Decode { endpoint, .. } => endpoint,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RepositoryError::NotFound { message, .. }
            | RepositoryError::Unauthorized { message, .. }
            | RepositoryError::Status { message, .. }
            | RepositoryError::Network { message, .. }
            | RepositoryError::Decode { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == 401
    }

    pub fn is_server_error(&self) -> bool {
        self.status() >= 500
    }
}

/// Extracts a human readable message from an error response body.
///
/// `detail` wins over `message`. A non-string `detail` is rendered as JSON
/// text. Bodies that are not JSON objects fall back to `"{status} {reason}"`.
pub fn error_message(status: StatusCode, body: &[u8]) -> String {
    let parsed = serde_json::from_slice::<Value>(body).ok();

    if let Some(Value::Object(fields)) = parsed {
        if let Some(detail) = fields.get("detail") {
            return match detail {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
        }
        if let Some(message) = fields.get("message") {
            return match message {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
        }
    }

    format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
    .trim_end()
    .to_string()
}
