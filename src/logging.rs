//! Logging setup for the CLI.
//!
//! Built on `tracing-subscriber` with per-target level filtering. Output goes
//! to stderr so that token listings on stdout stay machine-readable.

use std::io;

use clap::ValueEnum;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::config::{LogConfig, CLI_TARGET, LEXER_TARGET};

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// Single line, no timestamps
    Compact,
    /// JSON objects, for tool integration
    Json,
}

pub fn init(log_config: &LogConfig, format: LogFormat) -> anyhow::Result<()> {
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target(LEXER_TARGET, log_config.level_for(LEXER_TARGET))
        .with_target(CLI_TARGET, log_config.global);

    tracing_subscriber::registry()
        .with(create_format_layer(format).with_filter(targets))
        .try_init()?;

    Ok(())
}

fn create_format_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync + 'static> {
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
    }
}
