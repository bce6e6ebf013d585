/// Error types for the search client and configuration loading
///
/// Every search failure is shown to the user the same way ("<reason>. Try
/// again later."). The variants only exist so the logged reason is precise.

use std::error::Error as _;
use thiserror::Error;

/// Suffix appended to every user-facing search error
pub const RETRY_SUFFIX: &str = "Try again later.";

/// A failed search or thumbnail request
///
/// Payloads are plain strings so the error stays `Clone` and can travel
/// inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Connection, DNS, TLS or other transport-level failure
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status code
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Message shown in the error line of the search screen
    pub fn user_message(&self) -> String {
        format!("{}. {}", self, RETRY_SUFFIX)
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the client_id, never let it into a message
        let err = err.without_url();

        if let Some(status) = err.status() {
            return SearchError::Status(status.as_u16());
        }

        let reason = match err.source() {
            Some(source) => format!("{}: {}", err, source),
            None => err.to_string(),
        };

        if err.is_decode() {
            SearchError::Decode(reason)
        } else {
            SearchError::Transport(reason)
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}

/// Result type for search client operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Failure while reading the optional config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_appends_retry_suffix() {
        let err = SearchError::Transport("Network Error".to_string());
        assert_eq!(err.user_message(), "Network Error. Try again later.");
    }

    #[test]
    fn test_status_error_message() {
        let err = SearchError::Status(401);
        assert_eq!(
            err.user_message(),
            "Request failed with status code 401. Try again later."
        );
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: SearchError = serde_err.into();
        assert!(matches!(err, SearchError::Decode(_)));
        assert!(err.user_message().ends_with(RETRY_SUFFIX));
    }

    #[test]
    fn test_config_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: ConfigError = toml_err.into();
        assert!(err.to_string().starts_with("Invalid config file"));
    }
}
