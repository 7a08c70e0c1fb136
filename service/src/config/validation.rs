//! Configuration value checks

use export_core::{ExportConfig, ExportError, Result};

use crate::request::sanitize_sheet_name;

/// Validate specific configuration values
///
/// # Errors
///
/// Returns `ExportError::Config` if:
/// - The host is empty or the port is 0
/// - The route does not start with `/`
/// - The body limit is 0
/// - The default sheet name is empty or reserved once sanitized
/// - The default filename is empty
/// - The minimum column width is not positive
pub fn validate_values(config: &ExportConfig) -> Result<()> {
    let server = &config.server;
    if server.host.trim().is_empty() {
        return Err(ExportError::config("Host cannot be empty"));
    }
    if server.port == 0 {
        return Err(ExportError::config("Port must be > 0"));
    }
    if !server.route.starts_with('/') {
        return Err(ExportError::config(format!(
            "Route '{}' must start with '/'",
            server.route
        )));
    }
    if server.max_body_bytes == 0 {
        return Err(ExportError::config("max_body_bytes must be > 0"));
    }

    let export = &config.export;
    let sheet_name = sanitize_sheet_name(&export.default_sheet_name);
    if sheet_name.trim().is_empty() {
        return Err(ExportError::config(format!(
            "Default sheet name '{}' is empty once illegal characters are removed",
            export.default_sheet_name
        )));
    }
    if sheet_name.eq_ignore_ascii_case("history") {
        return Err(ExportError::config(
            "Default sheet name 'History' is reserved by Excel",
        ));
    }
    if export.default_filename.trim().is_empty() {
        return Err(ExportError::config("Default filename cannot be empty"));
    }
    if export.min_column_width.is_nan() || export.min_column_width <= 0.0 {
        return Err(ExportError::config("min_column_width must be > 0"));
    }
    if !export.column_padding.is_finite() {
        return Err(ExportError::config("column_padding must be finite"));
    }

    Ok(())
}
