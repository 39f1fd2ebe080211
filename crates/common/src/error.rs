use std::fmt;

/// Why a call to the completion service failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFailureKind {
    /// No API key was configured
    MissingCredential,
    /// Connection, DNS, TLS or timeout failure
    Network,
    /// 401/403 from the service
    Authentication,
    /// 429 from the service (rate limit or quota)
    RateLimited,
    /// Any other non-success status
    Status,
    /// Body could not be decoded or carried no content
    MalformedResponse,
}

impl fmt::Display for ServiceFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MissingCredential => "missing credential",
            Self::Network => "network",
            Self::Authentication => "authentication",
            Self::RateLimited => "rate limited",
            Self::Status => "status",
            Self::MalformedResponse => "malformed response",
        };
        f.write_str(name)
    }
}

/// docsum error types
#[derive(Debug, thiserror::Error)]
pub enum DocsumError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// External completion service failure
    #[error("External service error ({kind}): {message}")]
    ExternalService {
        kind: ServiceFailureKind,
        message: String,
    },

    /// Document conversion/serialization error
    #[error("Document error: {0}")]
    Document(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DocsumError {
    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create external service error
    pub fn external<S: Into<String>>(kind: ServiceFailureKind, msg: S) -> Self {
        Self::ExternalService {
            kind,
            message: msg.into(),
        }
    }

    /// Create document error
    pub fn document<S: Into<String>>(msg: S) -> Self {
        Self::Document(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// Failure kind when this is an external service error
    pub fn service_failure_kind(&self) -> Option<ServiceFailureKind> {
        match self {
            Self::ExternalService { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

// HTTP response mapping
impl DocsumError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Json(_) => 400,
            Self::NotFound(_) => 404,
            Self::ExternalService { .. } => 502,
            Self::Document(_) => 500,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(DocsumError::invalid_input("empty").status_code(), 400);
        assert_eq!(DocsumError::not_found("session").status_code(), 404);
        assert_eq!(
            DocsumError::external(ServiceFailureKind::Network, "timed out").status_code(),
            502
        );
        assert_eq!(DocsumError::document("pack failed").status_code(), 500);
    }

    #[test]
    fn test_external_display_carries_cause() {
        let err = DocsumError::external(ServiceFailureKind::RateLimited, "quota exceeded");
        assert_eq!(
            err.to_string(),
            "External service error (rate limited): quota exceeded"
        );
        assert_eq!(err.service_failure_kind(), Some(ServiceFailureKind::RateLimited));
        assert_eq!(DocsumError::internal("x").service_failure_kind(), None);
    }
}
