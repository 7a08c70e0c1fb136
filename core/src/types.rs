//! Request-scoped types shared by every export adapter

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MIME type of the modern XLSX format
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Worksheet names are limited to 31 characters by the file format
pub const MAX_SHEET_NAME_CHARS: usize = 31;

/// Sheet name used when the request does not provide one
pub const DEFAULT_SHEET_NAME: &str = "Results";

/// Attachment filename used when the request does not provide one
pub const DEFAULT_FILENAME: &str = "results.xlsx";

/// One row of cells, in column order
pub type Row = Vec<Value>;

/// How the request body should be read, derived from the declared content type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// `application/json`
    Json,
    /// `application/x-www-form-urlencoded`
    Form,
    /// Anything else, including a missing header
    Other,
}

impl BodyKind {
    /// Classify a `Content-Type` header value.
    ///
    /// Matching is case-insensitive and by prefix, so parameters such as
    /// `; charset=utf-8` are accepted.
    #[must_use]
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let ct = content_type.unwrap_or_default().trim().to_ascii_lowercase();
        if ct.starts_with("application/json") {
            Self::Json
        } else if ct.starts_with("application/x-www-form-urlencoded") {
            Self::Form
        } else {
            Self::Other
        }
    }
}

/// Request body after the content-type branch has been taken
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Parsed JSON document; unparseable input has already become `{}`
    Json(Value),
    /// Decoded URL-encoded pairs in submission order
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// An empty JSON object, the fallback for anything that cannot be parsed
    #[must_use]
    pub fn empty() -> Self {
        Self::Json(Value::Object(serde_json::Map::new()))
    }
}

/// Validated and defaulted export request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Row matrix, header row first
    pub rows: Vec<Row>,
    /// Worksheet name, already sanitized and truncated
    pub sheet_name: String,
    /// Suggested download filename, verbatim
    pub filename: String,
}

impl ExportRequest {
    /// Widest row in the matrix
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Per-request options handed to a [`crate::traits::SpreadsheetEncoder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Worksheet name
    pub sheet_name: String,
}

/// A finished workbook ready to be written to the response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetArtifact {
    /// Serialized workbook
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`
    pub content_type: &'static str,
    /// Suggested download filename
    pub filename: String,
}

impl SpreadsheetArtifact {
    /// Wrap an XLSX buffer
    #[must_use]
    pub fn xlsx(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: XLSX_CONTENT_TYPE,
            filename: filename.into(),
        }
    }
}
