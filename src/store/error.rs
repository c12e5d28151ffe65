//! Store error types and handling

use thiserror::Error;

/// Result type for remote store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of a single remote call. Every call is all-or-nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Rejected by server ({status}): {details}")]
    Validation { status: u16, details: String },

    #[error("Invalid response from server: {details}")]
    InvalidResponse { details: String },

    #[error("Store configuration error: {message}")]
    Configuration { message: String },
}

impl StoreError {
    pub fn network(message: impl Into<String>) -> Self {
        StoreError::Network {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        StoreError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn validation(status: u16, details: impl Into<String>) -> Self {
        StoreError::Validation {
            status,
            details: details.into(),
        }
    }

    pub fn invalid_response(details: impl Into<String>) -> Self {
        StoreError::InvalidResponse {
            details: details.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        StoreError::Configuration {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::invalid_response(err.to_string())
        } else {
            StoreError::network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::not_found("messages/2").to_string(),
            "Not found: messages/2"
        );
        assert_eq!(
            StoreError::validation(422, "title too long").to_string(),
            "Rejected by server (422): title too long"
        );
        assert_eq!(
            StoreError::network("connection refused").to_string(),
            "Network error: connection refused"
        );
    }
}
