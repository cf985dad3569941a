//! Validated inquiry value object

use super::email::is_valid_email;
use super::payload::InquiryPayload;
use super::validation::ValidationError;
use crate::core::text::char_len;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Allowed trimmed length of the visitor's name, in characters
pub const NAME_LENGTH: RangeInclusive<usize> = 2..=120;
/// Allowed trimmed length of the contact number, in characters
pub const MOBILE_LENGTH: RangeInclusive<usize> = 7..=30;
/// Allowed trimmed length of the free-text message, in characters
pub const MESSAGE_LENGTH: RangeInclusive<usize> = 10..=4000;

/// A visitor's invite request that passed every field rule (Value Object)
///
/// All fields are stored trimmed. An `Inquiry` lives for a single request:
/// it is handed to the delivery channels and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    name: String,
    mobile: String,
    email: String,
    message: String,
}

impl Inquiry {
    /// Validate a raw payload, failing on the first violated rule.
    ///
    /// Rules are checked in form order: name, mobile, email, message.
    pub fn validate(payload: InquiryPayload) -> Result<Self, ValidationError> {
        let name = trimmed(payload.name);
        check_length(
            &name,
            &NAME_LENGTH,
            ValidationError::NameRequired,
            ValidationError::NameTooLong,
        )?;

        let mobile = trimmed(payload.mobile);
        check_length(
            &mobile,
            &MOBILE_LENGTH,
            ValidationError::MobileRequired,
            ValidationError::MobileTooLong,
        )?;

        let email = trimmed(payload.email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        let message = trimmed(payload.message);
        check_length(
            &message,
            &MESSAGE_LENGTH,
            ValidationError::MessageTooShort,
            ValidationError::MessageTooLong,
        )?;

        Ok(Self {
            name,
            mobile,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<InquiryPayload> for Inquiry {
    type Error = ValidationError;

    fn try_from(payload: InquiryPayload) -> Result<Self, Self::Error> {
        Inquiry::validate(payload)
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn check_length(
    value: &str,
    bounds: &RangeInclusive<usize>,
    too_short: ValidationError,
    too_long: ValidationError,
) -> Result<(), ValidationError> {
    let len = char_len(value);
    if len < *bounds.start() {
        Err(too_short)
    } else if len > *bounds.end() {
        Err(too_long)
    } else {
        Ok(())
    }
}
