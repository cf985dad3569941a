//! Notification domain
//!
//! Renders an [`Inquiry`](crate::Inquiry) into the text each delivery
//! channel sends.

mod escape;
mod template;

pub use escape::escape_html;
pub use template::NotificationTemplate;
