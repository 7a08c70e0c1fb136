//! CLI application: logging set-up, configuration, dispatch.

use clap::Parser;
use export_core::{ExportConfig, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use super::commands::{ConvertCommand, ServeCommand};
use super::types::{ExportCli, ExportCommand};
use crate::config::{load_and_validate_config, load_environment_config, validate_values};

/// Main CLI application
pub struct ExportApp {
    cli: ExportCli,
}

impl ExportApp {
    /// Create the application from command line arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self {
            cli: ExportCli::parse(),
        }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns error if configuration is invalid or the command fails.
    pub async fn run(self) -> Result<()> {
        self.init_logging();

        match self.execute_command().await {
            Ok(()) => Ok(()),
            Err(err) => {
                error!("Command failed: {err}");
                Err(err)
            }
        }
    }

    /// Configure tracing subscriber based on CLI flags; `RUST_LOG` wins when set
    fn init_logging(&self) {
        let level = if self.cli.quiet {
            "error"
        } else if self.cli.verbose {
            "debug"
        } else {
            "info"
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    fn load_configuration(&self) -> Result<ExportConfig> {
        match &self.cli.config {
            Some(path) => load_and_validate_config(path),
            None => load_environment_config(),
        }
    }

    async fn execute_command(&self) -> Result<()> {
        let mut config = self.load_configuration()?;

        match &self.cli.command {
            ExportCommand::Serve { host, port, cors } => {
                if let Some(host) = host {
                    config.server.host.clone_from(host);
                }
                if let Some(port) = port {
                    config.server.port = *port;
                }
                config.server.cors |= *cors;
                validate_values(&config)?;

                ServeCommand::new(config).execute().await
            }
            ExportCommand::Convert {
                input,
                content_type,
                output,
                out_dir,
            } => {
                let command = ConvertCommand::new(input, content_type, output.clone(), out_dir.clone());
                let written = command.execute(&config)?;
                info!("Wrote {}", written.display());
                Ok(())
            }
        }
    }
}
