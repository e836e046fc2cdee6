//! Content loading error types

use thiserror::Error;

/// Errors that abort a content load
#[derive(Error, Debug)]
pub enum ContentError {
    /// Retrieval failed: non-success status, transport failure, unreadable file
    #[error("Fetch error: {location}: {reason}")]
    Fetch {
        location: String,
        status: Option<u16>,
        reason: String,
    },

    /// The payload is not well-formed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The page location cannot be resolved into a content location
    #[error("Invalid location: {0}")]
    Location(String),
}

impl ContentError {
    /// Non-success status reported for a location
    pub fn status(location: impl Into<String>, status: u16) -> Self {
        ContentError::Fetch {
            location: location.into(),
            status: Some(status),
            reason: format!("status {}", status),
        }
    }

    /// Transport-level failure for a location
    pub fn transport(location: impl Into<String>, reason: impl Into<String>) -> Self {
        ContentError::Fetch {
            location: location.into(),
            status: None,
            reason: reason.into(),
        }
    }

    /// Status code behind a fetch failure, when one was received
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ContentError::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type alias for content operations
pub type ContentResult<T> = Result<T, ContentError>;
