//! Inquiry domain
//!
//! A visitor's invite request, from the raw wire payload to the validated
//! value object that delivery channels consume.

mod email;
pub mod entities;
mod payload;
mod validation;

pub use email::is_valid_email;
pub use entities::Inquiry;
pub use payload::InquiryPayload;
pub use validation::ValidationError;
