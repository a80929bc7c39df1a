//! Custom error types for release-digest with improved type safety and error handling.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for release-digest operations.
#[derive(Error, Debug)]
pub enum DigestError {
    // Input errors
    #[error("Invalid release URL: {0}")]
    InvalidReleaseUrl(String),

    // Lookup errors
    #[error("Not found: {0}")]
    NotFound(String),

    // Forge/network errors
    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    // Model inference errors
    #[error("Inference request failed: {0}")]
    InferenceError(String),

    // Parsing errors - automatic conversions via #[from]
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using DigestError
pub type Result<T> = std::result::Result<T, DigestError>;

impl DigestError {
    /// Create an invalid release URL error
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidReleaseUrl(msg.into())
    }

    /// Create a not-found error with context
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Create an inference error with context
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::InferenceError(msg.into())
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for DigestError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

// Implement From for reqwest errors (network/API)
impl From<reqwest::Error> for DigestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::NetworkError(err.to_string())
        } else if err.is_status() {
            if let Some(status) = err.status() {
                if status == StatusCode::UNAUTHORIZED
                    || status == StatusCode::FORBIDDEN
                {
                    Self::AuthenticationError(err.to_string())
                } else if status == StatusCode::TOO_MANY_REQUESTS {
                    Self::RateLimitExceeded
                } else if status == StatusCode::NOT_FOUND {
                    Self::NotFound(err.to_string())
                } else {
                    Self::NetworkError(err.to_string())
                }
            } else {
                Self::NetworkError(err.to_string())
            }
        } else {
            Self::NetworkError(err.to_string())
        }
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for DigestError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => {
                if source.message.contains("rate limit") {
                    Self::RateLimitExceeded
                } else if source.status_code == StatusCode::NOT_FOUND {
                    Self::NotFound(format!("GitHub API error: {}", err))
                } else if source.status_code == StatusCode::UNAUTHORIZED
                    || source.status_code == StatusCode::FORBIDDEN
                {
                    Self::AuthenticationError(format!(
                        "GitHub API error: {}",
                        err
                    ))
                } else {
                    Self::ForgeError(format!("GitHub API error: {}", err))
                }
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = DigestError::invalid_url("missing tag segment");
        assert_eq!(
            err.to_string(),
            "Invalid release URL: missing tag segment"
        );

        let err = DigestError::not_found("release v1.2.3");
        assert_eq!(err.to_string(), "Not found: release v1.2.3");

        let err = DigestError::forge("API call failed");
        assert_eq!(err.to_string(), "Forge operation failed: API call failed");

        let err = DigestError::inference("model unavailable");
        assert_eq!(
            err.to_string(),
            "Inference request failed: model unavailable"
        );
    }

    #[test]
    fn test_error_helpers() {
        let err = DigestError::invalid_url("bad shape");
        assert!(matches!(err, DigestError::InvalidReleaseUrl(_)));

        let err = DigestError::not_found("missing");
        assert!(matches!(err, DigestError::NotFound(_)));

        let err = DigestError::forge("API call failed");
        assert!(matches!(err, DigestError::ForgeError(_)));
    }

    #[test]
    fn test_from_conversions() {
        let url_err = url::Url::parse("not a url");
        assert!(url_err.is_err());
        let err: DigestError = url_err.unwrap_err().into();
        assert!(matches!(err, DigestError::UrlError(_)));
    }
}
