//! Aggregate of every channel's outcome for one inquiry

use super::channel::ChannelKind;
use super::result::DeliveryResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-channel results for a single inquiry
///
/// Serializes as a JSON object keyed by channel name, e.g.
/// `{"email": {"ok": true}, "whatsapp": {"ok": false, ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeliveryReport {
    results: BTreeMap<ChannelKind, DeliveryResult>,
}

/// Overall decision derived from a [`DeliveryReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryVerdict {
    /// At least one configured channel delivered the inquiry
    Delivered,
    /// Every channel was skipped for missing credentials
    NotConfigured,
    /// Channels were attempted but none succeeded
    AllFailed,
}

impl DeliveryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a channel's outcome, replacing any earlier entry for that channel
    pub fn record(&mut self, channel: ChannelKind, result: DeliveryResult) {
        self.results.insert(channel, result);
    }

    /// Builder-style variant of [`record`](Self::record)
    pub fn with(mut self, channel: ChannelKind, result: DeliveryResult) -> Self {
        self.record(channel, result);
        self
    }

    pub fn get(&self, channel: ChannelKind) -> Option<&DeliveryResult> {
        self.results.get(&channel)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChannelKind, &DeliveryResult)> {
        self.results.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of channels that were actually attempted
    pub fn configured_count(&self) -> usize {
        self.results.values().filter(|r| r.is_configured()).count()
    }

    /// Number of channels that delivered successfully
    pub fn delivered_count(&self) -> usize {
        self.results.values().filter(|r| r.is_ok()).count()
    }

    /// Decide the overall outcome. Depends only on the recorded results.
    pub fn verdict(&self) -> DeliveryVerdict {
        if self.configured_count() == 0 {
            DeliveryVerdict::NotConfigured
        } else if self.delivered_count() == 0 {
            DeliveryVerdict::AllFailed
        } else {
            DeliveryVerdict::Delivered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_report_is_not_configured() {
        assert_eq!(DeliveryReport::new().verdict(), DeliveryVerdict::NotConfigured);
    }

    #[test]
    fn test_all_skipped_is_not_configured() {
        let report = DeliveryReport::new()
            .with(ChannelKind::Email, DeliveryResult::skipped("Email service is not configured"))
            .with(
                ChannelKind::WhatsApp,
                DeliveryResult::skipped("WhatsApp service is not configured"),
            );
        assert_eq!(report.verdict(), DeliveryVerdict::NotConfigured);
        assert_eq!(report.configured_count(), 0);
    }

    #[test]
    fn test_configured_failures_are_all_failed() {
        let report = DeliveryReport::new()
            .with(ChannelKind::Email, DeliveryResult::failed("Email failed: 500"))
            .with(
                ChannelKind::WhatsApp,
                DeliveryResult::skipped("WhatsApp service is not configured"),
            );
        assert_eq!(report.verdict(), DeliveryVerdict::AllFailed);
    }

    #[test]
    fn test_one_success_is_delivered() {
        let report = DeliveryReport::new()
            .with(ChannelKind::Email, DeliveryResult::failed("Email failed: 500"))
            .with(ChannelKind::WhatsApp, DeliveryResult::delivered());
        assert_eq!(report.verdict(), DeliveryVerdict::Delivered);
        assert_eq!(report.delivered_count(), 1);
    }

    #[test]
    fn test_serializes_as_channel_map() {
        let report = DeliveryReport::new()
            .with(ChannelKind::WhatsApp, DeliveryResult::failed("WhatsApp failed: timeout"))
            .with(ChannelKind::Email, DeliveryResult::delivered());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "email": { "ok": true },
                "whatsapp": { "ok": false, "error": "WhatsApp failed: timeout" }
            })
        );
    }
}
