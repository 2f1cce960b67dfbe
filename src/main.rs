//! Site Engine Entry Point
//!
//! This is the main entry point for the site engine. It initializes
//! logging, loads configuration, and assembles the site into the configured
//! output directory.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use multitool_site::core::{assemble_site, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Assembling {} v{}", config.site.name, config.site.version);

    let summary = assemble_site(Arc::new(config)).await?;

    match summary.theme {
        Some(theme) => info!(
            "Done: {} pages, {} tools, theme '{}'",
            summary.pages_written, summary.tool_count, theme
        ),
        None => info!(
            "Done: {} pages, {} tools, no theme controls found",
            summary.pages_written, summary.tool_count
        ),
    }

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
