use thiserror::Error;

use crate::global_constants;

/// Failures of the HTTP exchange. All of them are recoverable through the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error(
        "Could not connect to the search service ({reason}). Make sure the backend is running at {endpoint}"
    )]
    NetworkUnreachable { endpoint: String, reason: String },

    #[error("Error {status}: {status_text}")]
    ServerError { status: u16, status_text: String },

    #[error("Malformed response from search service: {reason}")]
    MalformedResponse { reason: String },
}

/// Anything the transport layer reports. Only `Unexpected` ever reaches the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("{0}")]
    Unexpected(String),
}

impl SearchError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        SearchError::Unexpected(message.into())
    }
}

/// The user-visible error produced when a search ends without a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenericFailure {
    pub message: String,
}

impl GenericFailure {
    pub fn from_message(message: &str) -> Self {
        let trimmed = message.trim();
        let message = if trimmed.is_empty() {
            global_constants::UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            trimmed.to_string()
        };

        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_unreachable_message_names_endpoint() {
        let error = TransportError::NetworkUnreachable {
            endpoint: "http://localhost:8000".to_string(),
            reason: "connection refused".to_string(),
        };

        let message = error.to_string();

        assert!(message.contains("backend is running"));
        assert!(message.contains("http://localhost:8000"));
    }

    #[test]
    fn test_server_error_message_carries_status_verbatim() {
        let error = TransportError::ServerError {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };

        assert_eq!(error.to_string(), "Error 503: Service Unavailable");
    }

    #[test]
    fn test_transport_error_converts_into_search_error() {
        let error: SearchError = TransportError::MalformedResponse {
            reason: "expected value".to_string(),
        }
        .into();

        assert!(matches!(
            error,
            SearchError::Transport(TransportError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_generic_failure_defaults_to_unknown_error() {
        assert_eq!(
            GenericFailure::from_message("  ").message,
            global_constants::UNKNOWN_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_generic_failure_keeps_message() {
        let failure = GenericFailure::from_message("invalid media type");

        assert_eq!(failure.to_string(), "invalid media type");
    }
}
