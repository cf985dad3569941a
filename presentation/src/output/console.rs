//! Console output for operator commands

use bergs_application::DeliveryChannel;
use colored::Colorize;
use std::fmt::Display;
use std::sync::Arc;

/// Formats operator-facing status for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One line per delivery channel with its configuration state.
    /// Never prints credentials.
    pub fn channel_status(channels: &[Arc<dyn DeliveryChannel>]) -> String {
        let mut output = Self::header("Delivery Channels");
        output.push('\n');

        for channel in channels {
            let kind = channel.kind();
            let state = if channel.is_configured() {
                "configured".green().bold()
            } else {
                "not configured".yellow().bold()
            };
            output.push_str(&format!(
                "  {:<10} {:<10} {}\n",
                kind.as_str(),
                kind.label().dimmed(),
                state
            ));
        }

        let configured = channels.iter().filter(|c| c.is_configured()).count();
        if configured == 0 {
            output.push_str(&format!(
                "\n{} every invite request will return 503\n",
                "Warning:".red().bold()
            ));
        } else {
            output.push_str(&format!(
                "\n{} of {} channels ready\n",
                configured,
                channels.len()
            ));
        }

        output
    }

    /// Bulleted list of configuration warnings
    pub fn warnings<T: Display>(issues: &[T]) -> String {
        issues
            .iter()
            .map(|issue| format!("{} {}\n", "warning:".yellow().bold(), issue))
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
