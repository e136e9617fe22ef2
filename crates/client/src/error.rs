//! Customer service errors.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when fetching a customer account.
#[derive(Debug, Error)]
pub enum CustomerServiceError {
    /// HTTP request failed (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the configured credentials.
    #[error("Unauthorized: customer service rejected the credentials")]
    Unauthorized,

    /// No account exists for the requested number.
    #[error("Customer account not found: {0}")]
    NotFound(String),

    /// Service returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body was not a valid customer account document.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A list the mapping needs the first entry of was empty or absent.
    #[error("Missing required account data: {0} is empty")]
    MissingAccountData(&'static str),

    /// Sold-to region code is not an integer.
    #[error("Invalid sold-to region code {value:?}: {source}")]
    InvalidRegionCode {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Client could not be set up from the given configuration.
    #[error("Customer service configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CustomerServiceError::NotFound("0001234".to_string());
        assert_eq!(err.to_string(), "Customer account not found: 0001234");
    }

    #[test]
    fn test_api_error_display() {
        let err = CustomerServiceError::Api {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - maintenance");
    }

    #[test]
    fn test_missing_account_data_display() {
        let err = CustomerServiceError::MissingAccountData("contactInfo");
        assert_eq!(
            err.to_string(),
            "Missing required account data: contactInfo is empty"
        );
    }

    #[test]
    fn test_invalid_region_code_keeps_source() {
        let source = "north".parse::<i32>().unwrap_err();
        let err = CustomerServiceError::InvalidRegionCode {
            value: "north".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid sold-to region code \"north\""));
        assert!(std::error::Error::source(&err).is_some());
    }
}
