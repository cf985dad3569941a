//! Delivery channel identity

use serde::Serialize;

/// A kind of outbound notification integration (Value Object)
///
/// The serialized form (`"email"`, `"whatsapp"`) is the key used in the
/// per-channel `details` map returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    WhatsApp,
}

impl ChannelKind {
    /// Every channel kind, in report order
    pub const ALL: [ChannelKind; 2] = [ChannelKind::Email, ChannelKind::WhatsApp];

    /// Stable identifier used in reports and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Email => "email",
            ChannelKind::WhatsApp => "whatsapp",
        }
    }

    /// Human-readable name used in delivery error messages
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Email => "Email",
            ChannelKind::WhatsApp => "WhatsApp",
        }
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&ChannelKind::Email).unwrap(), r#""email""#);
        assert_eq!(serde_json::to_string(&ChannelKind::WhatsApp).unwrap(), r#""whatsapp""#);
    }
}
