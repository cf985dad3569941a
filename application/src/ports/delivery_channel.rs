//! Delivery channel port
//!
//! Defines the interface for sending an inquiry through one notification
//! provider.

use async_trait::async_trait;
use bergs_domain::{ChannelKind, Inquiry};
use thiserror::Error;

/// Errors that can occur while sending through a channel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// Required credentials are missing; no request was made
    #[error("service is not configured")]
    NotConfigured,

    /// The provider answered with a non-success status
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// The request never got a usable answer (connect, TLS, timeout, decode)
    #[error("{0}")]
    Transport(String),
}

/// One outbound notification integration
///
/// Implementations live in the infrastructure layer. A channel decides from
/// its own configuration whether it is usable; the use case never reads the
/// environment.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Which channel this is (used as the key in the delivery report)
    fn kind(&self) -> ChannelKind;

    /// Whether every required credential is present
    fn is_configured(&self) -> bool;

    /// Send the inquiry. Called only when [`is_configured`](Self::is_configured)
    /// returned `true`.
    async fn send(&self, inquiry: &Inquiry) -> Result<(), DeliveryError>;
}
