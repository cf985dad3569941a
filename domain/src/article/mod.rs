//! Article domain
//!
//! Insight articles are authored as plain text: paragraphs separated by
//! blank lines, with ad hoc pipe tables and formula blocks embedded. This
//! module turns that text into typed [`Block`]s without any markup
//! language.
//!
//! Classification is a fixed-priority chain of pure predicates
//! (see [`heuristics`]):
//!
//! | Priority | Rule | Block |
//! |----------|------|-------|
//! | 1 | every line has ≥ 2 pipe cells | [`Block::Table`] |
//! | 2 | `=` present, or a dash rule next to a math token | [`Block::Formula`] |
//! | 3 | first line looks like a heading | [`Block::Heading`] + body |
//! | 4 | bullets, `label: value` lines, or a short enumeration | [`Block::List`] |
//! | 5 | anything else | [`Block::Paragraph`] |

mod block;
mod classifier;
pub mod heuristics;

pub use block::{Block, ListItem, Table};
pub use classifier::{Blocks, blocks, parse_article};
