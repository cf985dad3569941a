//! Raw inquiry payload as submitted by the contact form.

use serde::{Deserialize, Serialize};

/// Unvalidated inquiry fields (Data Transfer Object)
///
/// Every field is optional so that a missing value surfaces as the
/// field's "required" message instead of a deserialization failure.
/// The contact number is accepted as either `mobile` or `phone`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InquiryPayload {
    pub name: Option<String>,
    #[serde(alias = "phone")]
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl InquiryPayload {
    /// Build a payload with all four fields present
    pub fn new(
        name: impl Into<String>,
        mobile: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            mobile: Some(mobile.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }
}
