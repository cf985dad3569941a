//! Configuration loading for the Bergs & Mark site
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BERGS_*` environment overrides (`__` separates nested keys;
//!    `BERGS_DELIVERY__*` values are taken as literal strings)
//! 2. Provider credentials from the environment (`RESEND_API_KEY`, `TWILIO_*`, ...)
//! 3. `--config <path>` specified file
//! 4. Project root: `./bergs.toml` or `./.bergs.toml`
//! 5. Global: `$XDG_CONFIG_HOME/bergs-site/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileDeliveryConfig, FileEmailConfig, FileLoggingConfig,
    FileServerConfig, FileWhatsAppConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX, PROVIDER_ENV};
pub(crate) use file_config::present;
