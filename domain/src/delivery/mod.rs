//! Delivery domain
//!
//! Per-channel outcomes and the aggregate decision made from them.
//!
//! ```text
//! ┌──────────┐   ┌────────────────┐   ┌────────────────┐   ┌─────────────────┐
//! │ Inquiry  │──▶│ channel sends  │──▶│ DeliveryReport │──▶│ DeliveryVerdict │
//! └──────────┘   │ (concurrent)   │   │ (one entry per │   │ Delivered /     │
//!                └────────────────┘   │  channel)      │   │ NotConfigured / │
//!                                     └────────────────┘   │ AllFailed       │
//!                                                          └─────────────────┘
//! ```

pub mod channel;
pub mod report;
pub mod result;

pub use channel::ChannelKind;
pub use report::{DeliveryReport, DeliveryVerdict};
pub use result::DeliveryResult;
