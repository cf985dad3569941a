//! Infrastructure layer for bergs-site
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod channels;
pub mod config;

// Re-export commonly used types
pub use channels::{ResendEmailChannel, TwilioWhatsAppChannel, build_channels, http_client};
pub use config::{ConfigIssue, ConfigLoader, FileConfig};
