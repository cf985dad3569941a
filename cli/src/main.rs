//! CLI entrypoint for the Bergs & Mark site
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use bergs_application::SubmitInquiryUseCase;
use bergs_domain::parse_article;
use bergs_infrastructure::{ConfigLoader, FileConfig, build_channels, config::FileLoggingConfig};
use bergs_presentation::{
    AppState, ArticleFormatter, Cli, Command, ConsoleFormatter, formatter_for, router,
};
use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Failed to load configuration")?;

    if cli.show_config {
        println!();
        println!("Effective configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let _log_guard = init_logging(cli.verbose, &config.logging)?;

    for issue in config.validate() {
        warn!("Config issue: {}", issue);
    }

    // === Dependency Injection ===
    match cli.command_or_serve() {
        Command::Serve { bind } => serve(&config, bind).await,
        Command::Render { file, format } => render(&file, format),
        Command::Channels => {
            let client = bergs_infrastructure::http_client()?;
            let channels = build_channels(&client, &config.delivery);
            print!("{}", ConsoleFormatter::channel_status(&channels));
            let issues = config.validate();
            if !issues.is_empty() {
                println!();
                print!("{}", ConsoleFormatter::warnings(&issues));
            }
            Ok(())
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` takes precedence when set. With `logging.directory`
/// configured, a daily-rolling file receives the same events; the returned
/// guard must live until exit so buffered lines are flushed.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match &logging.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).with_context(|| {
                format!("Failed to create log directory {}", directory.display())
            })?;
            let appender = tracing_appender::rolling::daily(directory, &logging.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn serve(config: &FileConfig, bind: Option<String>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", bind))?;

    let client = bergs_infrastructure::http_client().context("Failed to build HTTP client")?;
    let use_case = SubmitInquiryUseCase::new(build_channels(&client, &config.delivery));

    let configured: Vec<&str> = use_case
        .channels()
        .iter()
        .filter(|c| c.is_configured())
        .map(|c| c.kind().as_str())
        .collect();
    if configured.is_empty() {
        warn!("No delivery channel is configured; invite requests will return 503");
    } else {
        info!("Delivery channels configured: {}", configured.join(", "));
    }

    let app = router(AppState::new(use_case));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn render(file: &Path, format: bergs_presentation::OutputFormat) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read article {}", file.display()))?;

    let blocks = parse_article(&text);
    info!("Classified {} blocks from {}", blocks.len(), file.display());

    println!("{}", formatter_for(format).format(&blocks));
    Ok(())
}
