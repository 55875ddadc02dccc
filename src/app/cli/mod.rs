//! CLI Adapter.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "graft")]
#[command(version)]
#[command(
    about = "Bootstrap a project workspace from the clean-starter template",
    long_about = None
)]
struct Cli {
    /// Target directory for the new workspace
    directory: Option<String>,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.directory {
        Some(directory) => crate::setup(&directory),
        None => Err(AppError::MissingDirectory),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Reads `RUST_LOG`; defaults to `info` so step traces reach the user.
/// Output goes to stderr, keeping stdout for the wrapped tools.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time().compact())
        .init();
}
