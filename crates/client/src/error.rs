//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an error status and a `{title, detail}` body.
    #[error("Server returned {status}: {title}: {detail}")]
    Problem {
        status: u16,
        title: String,
        detail: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_display() {
        let err = ClientError::Problem {
            status: 404,
            title: "Not Found".to_string(),
            detail: "Contact not found: 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Server returned 404: Not Found: Contact not found: 3"
        );
    }
}
