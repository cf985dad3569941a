//! Validation errors for inquiry fields

use thiserror::Error;

/// A violated inquiry rule
///
/// The `Display` text is the message shown to the visitor, so it must stay
/// short and free of internal detail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name is too long")]
    NameTooLong,

    #[error("Mobile number is required")]
    MobileRequired,

    #[error("Mobile number is too long")]
    MobileTooLong,

    #[error("A valid email is required")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,

    #[error("Message is too long")]
    MessageTooLong,

    /// The body decoded but did not have the inquiry's shape
    #[error("Invalid form data")]
    Malformed,
}

impl ValidationError {
    /// The payload field this error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NameRequired | ValidationError::NameTooLong => Some("name"),
            ValidationError::MobileRequired | ValidationError::MobileTooLong => Some("mobile"),
            ValidationError::InvalidEmail => Some("email"),
            ValidationError::MessageTooShort | ValidationError::MessageTooLong => Some("message"),
            ValidationError::Malformed => None,
        }
    }
}
