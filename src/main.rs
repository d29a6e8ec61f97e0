//! Post repository server.
//!
//! Serves an in-memory collection of blog posts through a JSON REST API
//! (`/posts`) and a form-driven HTML interface (`/`, `/new`, `/edit/:id`,
//! `/api/posts`).

use std::path::PathBuf;

use clap::Parser;

use postboard::config::resolve_config;
use postboard::lifecycle::startup;
use postboard::observability::logging;

#[derive(Parser)]
#[command(name = "postboard")]
#[command(about = "In-memory post repository with JSON and form APIs", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("postboard v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
