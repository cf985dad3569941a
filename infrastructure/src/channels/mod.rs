//! Delivery channel adapters
//!
//! Implements the [`DeliveryChannel`] port for each notification provider:
//!
//! | Channel | Provider | Auth | Body |
//! |---------|----------|------|------|
//! | email | Resend (`POST /emails`) | Bearer | JSON |
//! | whatsapp | Twilio (`POST /2010-04-01/Accounts/{sid}/Messages.json`) | Basic | form |
//!
//! All channels share one [`reqwest::Client`].

mod email;
mod response;
mod whatsapp;

pub use email::ResendEmailChannel;
pub use whatsapp::TwilioWhatsAppChannel;

use crate::config::FileDeliveryConfig;
use bergs_application::DeliveryChannel;
use std::sync::Arc;

const USER_AGENT: &str = concat!("bergs-site/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used by every channel.
pub fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}

/// Build every delivery channel from configuration.
///
/// Unconfigured channels are still returned; they report themselves as
/// skipped at delivery time.
pub fn build_channels(
    client: &reqwest::Client,
    config: &FileDeliveryConfig,
) -> Vec<Arc<dyn DeliveryChannel>> {
    vec![
        Arc::new(ResendEmailChannel::new(client.clone(), &config.email)),
        Arc::new(TwilioWhatsAppChannel::new(client.clone(), &config.whatsapp)),
    ]
}
