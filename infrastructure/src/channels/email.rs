//! Resend email channel

use super::response::{check_response, transport_error};
use crate::config::{FileEmailConfig, present};
use async_trait::async_trait;
use bergs_application::{DeliveryChannel, DeliveryError};
use bergs_domain::{ChannelKind, Inquiry, NotificationTemplate};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone)]
struct EmailRoute {
    api_key: String,
    from: String,
    to: String,
}

/// Request body for `POST /emails`
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: String,
    html: String,
}

/// Sends each inquiry as an HTML email through the Resend API.
pub struct ResendEmailChannel {
    client: reqwest::Client,
    base_url: String,
    route: Option<EmailRoute>,
}

impl ResendEmailChannel {
    pub fn new(client: reqwest::Client, config: &FileEmailConfig) -> Self {
        let route = match (
            present(&config.api_key),
            present(&config.from),
            present(&config.to),
        ) {
            (Some(api_key), Some(from), Some(to)) => Some(EmailRoute {
                api_key: api_key.to_string(),
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
impl DeliveryChannel for ResendEmailChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Email
    }

    fn is_configured(&self) -> bool {
        self.route.is_some()
    }

    async fn send(&self, inquiry: &Inquiry) -> Result<(), DeliveryError> {
        let route = self.route.as_ref().ok_or(DeliveryError::NotConfigured)?;

        let body = SendEmailRequest {
            from: &route.from,
            to: [&route.to],
            reply_to: inquiry.email(),
            subject: NotificationTemplate::email_subject(inquiry),
            html: NotificationTemplate::email_html(inquiry),
        };

        let url = format!("{}/emails", self.base_url);
        debug!(url = %url, "Sending invite email");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&route.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        check_response(response).await
    }
}
