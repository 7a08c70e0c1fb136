//! `serve`: run the axum adapter

use export_core::{ExportConfig, Result};
use tracing::info;

use crate::server;

/// Command for serving the export endpoint over HTTP
pub struct ServeCommand {
    config: ExportConfig,
}

impl ServeCommand {
    /// Create a new serve command
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Get the server URL
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.config.server.bind_address())
    }

    /// Execute the serve command
    ///
    /// # Errors
    ///
    /// Returns error if the server fails to bind or terminates abnormally.
    pub async fn execute(&self) -> Result<()> {
        info!("Starting XLSX export server at {}", self.url());
        info!(
            "Defaults: sheet '{}', file '{}', freeze header: {}, autofilter: {}",
            self.config.export.default_sheet_name,
            self.config.export.default_filename,
            self.config.export.freeze_header,
            self.config.export.autofilter
        );
        server::serve(&self.config).await
    }
}
