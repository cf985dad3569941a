//! Typed article blocks

use super::heuristics::{BULLET_PREFIX, is_divider_row};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static LABELLED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]{2,90}):\s+(.+)$").unwrap());

/// One renderable unit of an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Heading { text: String },
    Paragraph { text: String },
    List { items: Vec<String> },
    Table(Table),
    Formula { lines: Vec<String> },
}

impl Block {
    /// Rendering view of a list block's items; `None` for other blocks
    pub fn list_items(&self) -> Option<Vec<ListItem>> {
        match self {
            Block::List { items } => Some(items.iter().map(|i| ListItem::parse(i)).collect()),
            _ => None,
        }
    }
}

/// A pipe table with a header row and rectangular body rows
///
/// Rows are right-padded with empty cells to the widest row, and a
/// markdown-style divider row (`--- | :---:`) directly under the header is
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut rows = rows.into_iter().map(|mut row| {
            row.resize(width, String::new());
            row
        });

        let header = rows.next().unwrap_or_default();
        let mut body: Vec<Vec<String>> = rows.collect();
        if body.first().is_some_and(|row| is_divider_row(row)) {
            body.remove(0);
        }

        Self { header, rows: body }
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

/// A list entry prepared for display
///
/// `label` is set for `label: value` entries so that renderers can
/// emphasize it; `text` holds the value (or the whole entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

impl ListItem {
    /// Strip the bullet marker and split off a leading label, if any
    pub fn parse(item: &str) -> Self {
        let cleaned = BULLET_PREFIX.replace(item, "");
        let cleaned = cleaned.trim();

        match LABELLED_ITEM.captures(cleaned) {
            Some(caps) => Self {
                label: Some(caps[1].trim().to_string()),
                text: caps[2].trim().to_string(),
            },
            None => Self {
                label: None,
                text: cleaned.to_string(),
            },
        }
    }
}
