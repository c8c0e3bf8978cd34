use thiserror::Error;

/// Errors that can occur when validating a contact.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid user id: {0}")]
    InvalidUserId(i64),
}
