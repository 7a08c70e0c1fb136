//! `xlsx-export` command-line interface
//!
//! Runs the HTTP export server or converts a single request body offline.

use std::process::ExitCode;

use export_service::cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Failures are already logged by the app; only the exit status is left.
    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
