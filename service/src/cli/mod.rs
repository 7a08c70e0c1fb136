//! Command-line interface.
//!
//! `serve` runs the axum adapter; `convert` pushes a single request body
//! through the same handler and writes the workbook to disk.

mod app;
pub mod commands;
mod types;

pub use app::ExportApp;
pub use types::{ExportCli, ExportCommand};

/// Main entry point for the CLI
///
/// # Errors
/// Returns error if configuration is invalid or the command fails.
pub async fn run() -> export_core::Result<()> {
    ExportApp::from_args().run().await
}
