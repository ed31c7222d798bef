// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update};
use club_standings::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    let result = commands::handle_standings_command(&args).await;
    match &result {
        Err(e) if e.is_input_error() => tracing::warn!("Rejected input: {e}"),
        Err(e) => tracing::error!("Failed to show standings: {e}"),
        Ok(()) => {}
    }
    result
}
