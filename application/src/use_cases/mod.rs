//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and coordinate with ports.

pub mod submit_inquiry;
