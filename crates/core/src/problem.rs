//! The JSON body of every error response from the contact API.

use serde::{Deserialize, Serialize};

/// Error payload with a short title and a human readable detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub title: String,
    pub detail: String,
}

impl ProblemDetails {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}
