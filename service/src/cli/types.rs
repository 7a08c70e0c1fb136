//! CLI type definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Row-matrix to XLSX export service
#[derive(Parser, Debug)]
#[command(name = "xlsx-export", version, about = "Turn posted rows into XLSX downloads")]
pub struct ExportCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// YAML configuration file (overrides XLSX_EXPORT_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: ExportCommand,
}

/// Subcommands, one per deployment adapter
#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    /// Run the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Attach a permissive CORS layer
        #[arg(long)]
        cors: bool,
    },

    /// Run one request body through the exporter and write the workbook
    Convert {
        /// Request body file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
        /// Declared content type of the body
        #[arg(long, default_value = "application/json")]
        content_type: String,
        /// Output file path
        #[arg(short, long, conflicts_with = "out_dir", required_unless_present = "out_dir")]
        output: Option<PathBuf>,
        /// Directory to write the workbook into, named after the request's filename
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}
