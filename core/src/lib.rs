//! # Export Core
//!
//! Core types and traits for turning a row matrix into a downloadable XLSX
//! workbook.
//!
//! This crate has no HTTP or spreadsheet-library dependency. It defines the
//! request and artifact types every adapter agrees on, the encoder seam, the
//! error taxonomy, and the configuration shape.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types for export operations
pub mod error;

/// Trait definitions for pluggable encoders
pub mod traits;

/// Request and artifact types
pub mod types;

/// Configuration types for the export service
pub mod configuration;

// Re-export commonly used types
pub use configuration::{ExportConfig, ExportDefaults, ServerConfig};
pub use error::{ExportError, Result};
pub use serde_json::Value;
pub use traits::SpreadsheetEncoder;
pub use types::{
    BodyKind, EncodeOptions, ExportRequest, RequestBody, Row, SpreadsheetArtifact,
    XLSX_CONTENT_TYPE,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::configuration::*;
    pub use crate::error::{ExportError, Result};
    pub use crate::traits::*;
    pub use crate::types::*;
}
