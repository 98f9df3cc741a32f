use thiserror::Error;

/// Message for addresses that fail the format check.
pub const INVALID_EMAIL_MESSAGE: &str = "The email address is invalid.";

/// Default message for addresses rejected by the domain lists.
pub const UNAUTHORIZED_DOMAIN_MESSAGE: &str = "The domain of this email is not authorized.";

/// Why an email address was rejected.
///
/// The `Display` output is the exact rejection message, so callers that only
/// compare strings can use `err.to_string()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The email address is invalid.")]
    InvalidFormat,

    #[error("{message}")]
    UnauthorizedDomain { domain: String, message: String },
}

impl ValidationError {
    pub fn message(&self) -> &str {
        match self {
            ValidationError::InvalidFormat => INVALID_EMAIL_MESSAGE,
            ValidationError::UnauthorizedDomain { message, .. } => message.as_str(),
        }
    }

    /// Stable machine-readable code for the rejection kind.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidFormat => "INVALID_FORMAT",
            ValidationError::UnauthorizedDomain { .. } => "UNAUTHORIZED_DOMAIN",
        }
    }
}
