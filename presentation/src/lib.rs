//! Presentation layer for bergs-site
//!
//! This crate contains the CLI definition, the HTTP router for the
//! invite API, and article/console formatters.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use http::{ApiError, AppState, router};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{ArticleFormatter, JsonFormatter, formatter_for};
pub use output::html::HtmlFormatter;
