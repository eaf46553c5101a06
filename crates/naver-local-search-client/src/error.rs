//! Error types for the Naver local search client

use std::fmt;

/// Errors that can occur when querying the local search API
#[derive(Debug)]
pub enum LocalSearchError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// Credentials were rejected (401/403)
    Unauthorized,
    /// The API answered with an error body
    Provider { code: String, message: String },
    /// Any other non-success HTTP status
    Status(u16),
}

impl fmt::Display for LocalSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Local search HTTP error: {}", e),
            Self::Json(e) => write!(f, "Local search JSON parse error: {}", e),
            Self::Unauthorized => write!(f, "Local search credentials rejected"),
            Self::Provider { code, message } => {
                write!(f, "Local search error {}: {}", code, message)
            }
            Self::Status(code) => write!(f, "Local search returned status {}", code),
        }
    }
}

impl std::error::Error for LocalSearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LocalSearchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for LocalSearchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for local search operations
pub type Result<T> = std::result::Result<T, LocalSearchError>;
