//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// The session cookie was rejected; the caller must re-authenticate.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// The backend itself faulted (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn classifies_statuses() {
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_REQUEST, "x".into()),
            ClientError::BadRequest(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, "x".into()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, "x".into()),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, "x".into()),
            ClientError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn interceptor_predicates() {
        let unauthorized = ClientError::from_status(StatusCode::UNAUTHORIZED, "no".into());
        assert!(unauthorized.is_auth_expired());
        assert!(!unauthorized.is_server_error());

        let fault = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert!(fault.is_server_error());
        assert!(!fault.is_auth_expired());

        // 4xx other than 401 triggers neither interception path.
        let missing = ClientError::from_status(StatusCode::NOT_FOUND, "gone".into());
        assert!(!missing.is_auth_expired() && !missing.is_server_error());
    }
}
