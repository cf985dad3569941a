//! Article formatter trait

use crate::cli::commands::OutputFormat;
use bergs_domain::Block;

/// Trait for turning classified article blocks into text
pub trait ArticleFormatter {
    /// Format the complete block list
    fn format(&self, blocks: &[Block]) -> String;
}

/// JSON array of `{"type": ..., ...}` blocks
pub struct JsonFormatter;

impl ArticleFormatter for JsonFormatter {
    fn format(&self, blocks: &[Block]) -> String {
        serde_json::to_string_pretty(blocks).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Pick the formatter for a CLI output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn ArticleFormatter> {
    match format {
        OutputFormat::Html => Box::new(super::html::HtmlFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
