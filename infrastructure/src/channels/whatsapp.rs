//! Twilio WhatsApp channel

use super::response::{check_response, transport_error};
use crate::config::{FileWhatsAppConfig, present};
use async_trait::async_trait;
use bergs_application::{DeliveryChannel, DeliveryError};
use bergs_domain::{ChannelKind, Inquiry, NotificationTemplate};
use tracing::debug;

#[derive(Debug, Clone)]
struct WhatsAppRoute {
    account_sid: String,
    auth_token: String,
    from: String,
    to: String,
}

/// Sends each inquiry as a WhatsApp message through the Twilio Messages API.
pub struct TwilioWhatsAppChannel {
    client: reqwest::Client,
    base_url: String,
    route: Option<WhatsAppRoute>,
}

impl TwilioWhatsAppChannel {
    pub fn new(client: reqwest::Client, config: &FileWhatsAppConfig) -> Self {
        let route = match (
            present(&config.account_sid),
            present(&config.auth_token),
            present(&config.from),
            present(&config.to),
        ) {
            (Some(account_sid), Some(auth_token), Some(from), Some(to)) => Some(WhatsAppRoute {
                account_sid: account_sid.to_string(),
                auth_token: auth_token.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            }),
            _ => None,
        };

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            route,
        }
    }
}

#[async_trait]
impl DeliveryChannel for TwilioWhatsAppChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::WhatsApp
    }

    fn is_configured(&self) -> bool {
        self.route.is_some()
    }

    async fn send(&self, inquiry: &Inquiry) -> Result<(), DeliveryError> {
        let route = self.route.as_ref().ok_or(DeliveryError::NotConfigured)?;

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, route.account_sid
        );
        debug!(url = %url, "Sending invite WhatsApp message");

        let body = NotificationTemplate::whatsapp_body(inquiry);
        let form = [
            ("From", route.from.as_str()),
            ("To", route.to.as_str()),
            ("Body", body.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&route.account_sid, Some(&route.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(transport_error)?;

        check_response(response).await
    }
}
