//! Domain layer for bergs-site
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Invite delivery
//!
//! A visitor submits an [`InquiryPayload`]; it becomes an [`Inquiry`] only
//! after every field validates. Each delivery channel reports a
//! [`DeliveryResult`], and the complete [`DeliveryReport`] decides the
//! [`DeliveryVerdict`] returned to the visitor.
//!
//! ## Article blocks
//!
//! Long-form insight articles are stored as plain text. The
//! [`article`] module classifies blank-line separated chunks into
//! headings, paragraphs, lists, tables and formulas.

pub mod article;
pub mod core;
pub mod delivery;
pub mod inquiry;
pub mod notification;

// Re-export commonly used types
pub use article::{Block, Blocks, ListItem, Table, blocks, parse_article};
pub use delivery::{ChannelKind, DeliveryReport, DeliveryResult, DeliveryVerdict};
pub use inquiry::{Inquiry, InquiryPayload, ValidationError, is_valid_email};
pub use notification::{NotificationTemplate, escape_html};
