//! Message templates for each delivery channel

use super::escape::escape_html;
use crate::inquiry::Inquiry;

/// Templates for rendering an inquiry per channel
pub struct NotificationTemplate;

impl NotificationTemplate {
    /// Email subject line
    pub fn email_subject(inquiry: &Inquiry) -> String {
        format!("New Invite: {}", inquiry.name())
    }

    /// Email HTML body. Every field is escaped and the message keeps its
    /// line breaks as `<br />`.
    pub fn email_html(inquiry: &Inquiry) -> String {
        [
            "<h2>New Invite Request</h2>".to_string(),
            format!("<p><strong>Name:</strong> {}</p>", escape_html(inquiry.name())),
            format!("<p><strong>Mobile:</strong> {}</p>", escape_html(inquiry.mobile())),
            format!("<p><strong>Email:</strong> {}</p>", escape_html(inquiry.email())),
            "<p><strong>Message:</strong></p>".to_string(),
            format!(
                "<p>{}</p>",
                escape_html(inquiry.message()).replace('\n', "<br />")
            ),
        ]
        .join("\n")
    }

    /// Plain-text body for chat-style channels
    pub fn whatsapp_body(inquiry: &Inquiry) -> String {
        [
            "New Invite Request".to_string(),
            format!("Name: {}", inquiry.name()),
            format!("Mobile: {}", inquiry.mobile()),
            format!("Email: {}", inquiry.email()),
            "Message:".to_string(),
            inquiry.message().to_string(),
        ]
        .join("\n")
    }
}
