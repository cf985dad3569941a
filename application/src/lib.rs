//! Application layer for bergs-site
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::delivery_channel::{DeliveryChannel, DeliveryError};
pub use use_cases::submit_inquiry::{SubmitInquiryError, SubmitInquiryUseCase};
