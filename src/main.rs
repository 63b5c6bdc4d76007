//! # Attache CLI Entry Point
//!
//! Fetches signed upload credentials from the chat backend and uploads files
//! straight to object storage.

use anyhow::Result;
use attache::cli::{self, Cli};
use attache_core::consts::ENV_VERBOSITY;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
  let cmd = Cli::parse();

  // -v wins; otherwise fall back to $ATTACHE_VERBOSITY
  let verbosity = match cmd.verbose {
    0 => std::env::var(ENV_VERBOSITY)
      .ok()
      .and_then(|v| v.parse::<u8>().ok())
      .unwrap_or(0),
    count => count,
  };
  let level = match verbosity {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  cli::handle_cli(cmd)
}
