//! Delivery provider configuration (`[delivery]` section)
//!
//! Credentials are usually supplied through the environment; see
//! [`ConfigLoader`](crate::config::ConfigLoader) for the variable names.

use super::present;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeliveryConfig {
    /// Resend email API settings
    pub email: FileEmailConfig,
    /// Twilio WhatsApp settings
    pub whatsapp: FileWhatsAppConfig,
}

/// Resend email provider configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEmailConfig {
    /// API key (`RESEND_API_KEY`)
    pub api_key: Option<String>,
    /// Sender address (`INVITE_EMAIL_FROM`)
    pub from: Option<String>,
    /// Recipient address (`INVITE_EMAIL_TO`)
    pub to: Option<String>,
    /// Base URL for the Resend API
    pub base_url: String,
}

impl Default for FileEmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            from: None,
            to: None,
            base_url: "https://api.resend.com".to_string(),
        }
    }
}

impl FileEmailConfig {
    pub const REQUIRED: [&'static str; 3] = ["api_key", "from", "to"];

    /// Required fields that are unset or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [&self.api_key, &self.from, &self.to]
            .into_iter()
            .zip(Self::REQUIRED)
            .filter(|(value, _)| present(value).is_none())
            .map(|(_, name)| name)
            .collect()
    }

    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl std::fmt::Debug for FileEmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileEmailConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("from", &self.from)
            .field("to", &self.to)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Twilio WhatsApp provider configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWhatsAppConfig {
    /// Account SID (`TWILIO_ACCOUNT_SID`)
    pub account_sid: Option<String>,
    /// Auth token (`TWILIO_AUTH_TOKEN`)
    pub auth_token: Option<String>,
    /// Sender, e.g. `whatsapp:+14155238886` (`TWILIO_WHATSAPP_FROM`)
    pub from: Option<String>,
    /// Recipient (`TWILIO_WHATSAPP_TO`)
    pub to: Option<String>,
    /// Base URL for the Twilio API
    pub base_url: String,
}

impl Default for FileWhatsAppConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            from: None,
            to: None,
            base_url: "https://api.twilio.com".to_string(),
        }
    }
}

impl FileWhatsAppConfig {
    pub const REQUIRED: [&'static str; 4] = ["account_sid", "auth_token", "from", "to"];

    /// Required fields that are unset or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [&self.account_sid, &self.auth_token, &self.from, &self.to]
            .into_iter()
            .zip(Self::REQUIRED)
            .filter(|(value, _)| present(value).is_none())
            .map(|(_, name)| name)
            .collect()
    }

    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl std::fmt::Debug for FileWhatsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWhatsAppConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("from", &self.from)
            .field("to", &self.to)
            .field("base_url", &self.base_url)
            .finish()
    }
}
