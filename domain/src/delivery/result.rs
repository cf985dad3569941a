//! Outcome of one channel's delivery attempt

use serde::Serialize;

/// Result of a single channel send (Value Object)
///
/// Three shapes are possible:
/// - delivered: `{ "ok": true }`
/// - failed: `{ "ok": false, "error": "..." }`
/// - skipped (channel not configured): `{ "ok": false, "error": "...", "skipped": true }`
///
/// A skipped result is never `ok`; a failed one is not necessarily skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryResult {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<bool>,
}

impl DeliveryResult {
    /// The provider accepted the message
    pub fn delivered() -> Self {
        Self {
            ok: true,
            error: None,
            skipped: None,
        }
    }

    /// The channel was attempted and failed
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            skipped: None,
        }
    }

    /// The channel is missing credentials and was not attempted
    pub fn skipped(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            skipped: Some(true),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.unwrap_or(false)
    }

    /// Whether the channel counted toward the verdict (was actually attempted)
    pub fn is_configured(&self) -> bool {
        !self.is_skipped()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
