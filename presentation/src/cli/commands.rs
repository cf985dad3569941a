//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for rendered articles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML fragment, one element per block
    #[default]
    Html,
    /// JSON array of typed blocks
    Json,
}

/// CLI arguments for bergs-site
#[derive(Parser, Debug)]
#[command(name = "bergs-site")]
#[command(author, version, about = "Bergs & Mark site services - invite delivery and article rendering")]
#[command(long_about = r#"
Runs the invite API for the Bergs & Mark marketing site and renders
plain-text insight articles.

Invite requests posted to /api/invite are validated and delivered through
every configured channel (email via Resend, WhatsApp via Twilio).

Configuration is loaded from (in priority order):
1. BERGS_* environment overrides (e.g. BERGS_SERVER__BIND)
2. Provider variables: RESEND_API_KEY, INVITE_EMAIL_FROM, INVITE_EMAIL_TO,
   TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN, TWILIO_WHATSAPP_FROM, TWILIO_WHATSAPP_TO
3. --config <path>     Explicit config file
4. ./bergs.toml        Project-level config
5. ~/.config/bergs-site/config.toml   Global config

Example:
  bergs-site serve --bind 127.0.0.1:8080
  bergs-site render insights/attribution.txt --format json
  bergs-site channels
"#)]
pub struct Cli {
    /// Command to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment still applies)
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Socket address to listen on (overrides `server.bind`)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Classify a plain-text article and print the rendered blocks
    Render {
        /// Article file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,
    },

    /// Show each delivery channel and whether it is configured
    Channels,
}

impl Cli {
    /// The command to run, falling back to `serve` with configured defaults
    pub fn command_or_serve(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve { bind: None })
    }
}
