//! Configuration structures for the export service
//!
//! Values are loaded from YAML by the service crate; the `Default` impls here
//! are what a process gets when no configuration file is supplied.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_FILENAME, DEFAULT_SHEET_NAME};

/// Complete export service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Workbook generation defaults
    pub export: ExportDefaults,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Path the export endpoint is mounted at
    pub route: String,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
    /// Attach a permissive CORS layer
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            route: "/api/export-xlsx".to_string(),
            max_body_bytes: 10 * 1024 * 1024,
            cors: false,
        }
    }
}

/// Workbook generation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportDefaults {
    /// Sheet name used when the request has none
    pub default_sheet_name: String,
    /// Filename used when the request has none
    pub default_filename: String,
    /// Freeze the header row
    pub freeze_header: bool,
    /// Add an auto-filter over the written range
    pub autofilter: bool,
    /// Column width floor, in character units
    pub min_column_width: f64,
    /// Added to the header text length when sizing a column
    pub column_padding: f64,
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            default_sheet_name: DEFAULT_SHEET_NAME.to_string(),
            default_filename: DEFAULT_FILENAME.to_string(),
            freeze_header: true,
            autofilter: true,
            min_column_width: 10.0,
            column_padding: 2.0,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_shape_uses_defaults() {
        let config: ExportConfig =
            serde_json::from_str(r#"{"server": {"port": 9000}}"#).expect("valid json");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.export, ExportDefaults::default());
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(ServerConfig::default().bind_address(), "127.0.0.1:8080");
    }
}
