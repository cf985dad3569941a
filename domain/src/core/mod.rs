//! Core text helpers shared across subdomains.
//!
//! - [`text::char_len`]: length in Unicode scalar values
//! - [`text::compact_line`]: whitespace normalization used by the article classifier
//! - [`text::truncate`]: UTF-8 safe truncation for diagnostics

pub mod text;
