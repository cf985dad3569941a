//! Raw configuration data types
//!
//! These structs mirror the TOML config file. Every section has defaults,
//! so an empty file (or none at all) is a valid configuration.

mod delivery;
mod logging;
mod server;

pub use delivery::{FileDeliveryConfig, FileEmailConfig, FileWhatsAppConfig};
pub use logging::FileLoggingConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Delivery provider credentials
    pub delivery: FileDeliveryConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

/// A non-fatal problem found in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. `server.bind` parses as a socket address
    /// 2. Channels with some but not all credentials (they will be skipped)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.server.bind.parse::<SocketAddr>().is_err() {
            issues.push(ConfigIssue::new(
                "server.bind",
                format!("'{}' is not a valid socket address", self.server.bind),
            ));
        }

        let email_missing = self.delivery.email.missing_fields();
        if email_missing.len() < FileEmailConfig::REQUIRED.len() && !email_missing.is_empty() {
            issues.push(ConfigIssue::new(
                "delivery.email",
                format!(
                    "partially configured, missing {}; email delivery will be skipped",
                    email_missing.join(", ")
                ),
            ));
        }

        let whatsapp_missing = self.delivery.whatsapp.missing_fields();
        if whatsapp_missing.len() < FileWhatsAppConfig::REQUIRED.len()
            && !whatsapp_missing.is_empty()
        {
            issues.push(ConfigIssue::new(
                "delivery.whatsapp",
                format!(
                    "partially configured, missing {}; WhatsApp delivery will be skipped",
                    whatsapp_missing.join(", ")
                ),
            ));
        }

        issues
    }
}

/// Treat unset and blank values alike
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
