//! Submit Inquiry use case
//!
//! Validates an invite request, fans it out to every delivery channel
//! concurrently, and decides the outcome from the complete report.

use crate::ports::delivery_channel::{DeliveryChannel, DeliveryError};
use bergs_domain::{
    DeliveryReport, DeliveryResult, DeliveryVerdict, Inquiry, InquiryPayload, ValidationError,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Errors that can occur while submitting an inquiry
#[derive(Error, Debug)]
pub enum SubmitInquiryError {
    /// The payload failed a field rule; nothing was sent
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// Every channel was skipped for missing credentials
    #[error("Invite delivery is not configured.")]
    NotConfigured { report: DeliveryReport },

    /// Channels were attempted but none delivered
    #[error("Invite delivery failed.")]
    AllFailed { report: DeliveryReport },

    /// A delivery task panicked or was cancelled
    #[error("Delivery task failed: {0}")]
    Internal(String),
}

impl SubmitInquiryError {
    /// The per-channel report, when delivery was attempted
    pub fn report(&self) -> Option<&DeliveryReport> {
        match self {
            SubmitInquiryError::NotConfigured { report }
            | SubmitInquiryError::AllFailed { report } => Some(report),
            _ => None,
        }
    }
}

/// Use case for delivering a visitor's invite request
pub struct SubmitInquiryUseCase {
    channels: Vec<Arc<dyn DeliveryChannel>>,
}

impl SubmitInquiryUseCase {
    pub fn new(channels: Vec<Arc<dyn DeliveryChannel>>) -> Self {
        Self { channels }
    }

    /// The channels this use case delivers through, in report order
    pub fn channels(&self) -> &[Arc<dyn DeliveryChannel>] {
        &self.channels
    }

    /// Validate and deliver. `Ok` means at least one configured channel
    /// accepted the inquiry; the report always has one entry per channel.
    pub async fn execute(
        &self,
        payload: InquiryPayload,
    ) -> Result<DeliveryReport, SubmitInquiryError> {
        let inquiry = Inquiry::try_from(payload).inspect_err(|e| {
            debug!(field = e.field().unwrap_or("body"), "Invite rejected: {}", e);
        })?;
        let report = self.deliver(inquiry).await?;

        match report.verdict() {
            DeliveryVerdict::Delivered => {
                info!(
                    delivered = report.delivered_count(),
                    configured = report.configured_count(),
                    "Invite delivered"
                );
                Ok(report)
            }
            DeliveryVerdict::NotConfigured => {
                error!(
                    details = %details_json(&report),
                    "Invite delivery error: no providers configured"
                );
                Err(SubmitInquiryError::NotConfigured { report })
            }
            DeliveryVerdict::AllFailed => {
                error!(details = %details_json(&report), "Invite delivery error");
                Err(SubmitInquiryError::AllFailed { report })
            }
        }
    }

    /// Send through every channel in parallel and wait for all of them.
    ///
    /// Results are slotted by channel index, so the report does not depend
    /// on completion order.
    async fn deliver(&self, inquiry: Inquiry) -> Result<DeliveryReport, SubmitInquiryError> {
        let inquiry = Arc::new(inquiry);
        let mut join_set = JoinSet::new();

        for (index, channel) in self.channels.iter().enumerate() {
            let channel = Arc::clone(channel);
            let inquiry = Arc::clone(&inquiry);

            join_set.spawn(async move {
                let result = attempt(channel.as_ref(), &inquiry).await;
                (index, result)
            });
        }

        let mut slots: Vec<Option<DeliveryResult>> = vec![None; self.channels.len()];
        let mut join_failure = None;

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(e) => {
                    warn!("Delivery task join error: {}", e);
                    join_failure = Some(e.to_string());
                }
            }
        }

        if let Some(reason) = join_failure {
            return Err(SubmitInquiryError::Internal(reason));
        }

        let mut report = DeliveryReport::new();
        for (channel, slot) in self.channels.iter().zip(slots) {
            let result = slot.ok_or_else(|| {
                SubmitInquiryError::Internal(format!("{} produced no result", channel.kind()))
            })?;
            report.record(channel.kind(), result);
        }
        Ok(report)
    }
}

/// One channel's attempt, folded into a [`DeliveryResult`]
async fn attempt(channel: &dyn DeliveryChannel, inquiry: &Inquiry) -> DeliveryResult {
    let kind = channel.kind();
    let skipped = || DeliveryResult::skipped(format!("{} service is not configured", kind.label()));

    if !channel.is_configured() {
        debug!("{} channel is not configured, skipping", kind);
        return skipped();
    }

    match channel.send(inquiry).await {
        Ok(()) => {
            info!("{} delivery succeeded", kind);
            DeliveryResult::delivered()
        }
        Err(DeliveryError::NotConfigured) => skipped(),
        Err(e) => {
            warn!("{} delivery failed: {}", kind, e);
            DeliveryResult::failed(format!("{} failed: {}", kind.label(), e))
        }
    }
}

fn details_json(report: &DeliveryReport) -> String {
    serde_json::to_string(report).unwrap_or_default()
}
