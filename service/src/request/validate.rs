//! Validation and defaulting of the effective request object

use export_core::prelude::*;
use serde_json::{Map, Value};
use tracing::warn;

/// Message shared by every malformed-rows rejection
const ROWS_REQUIRED: &str =
    "Body must contain { rows: Array<Array<any>> } with at least one header row.";

/// Characters the XLSX format forbids in worksheet names
const ILLEGAL_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Check the effective object and build an [`ExportRequest`].
///
/// # Errors
///
/// Returns `ExportError::InvalidRows` when the value is not an object, when
/// `rows` is missing, not an array or empty, or when `rows[0]` is not an
/// array.
pub fn validate_request(object: Value, defaults: &ExportDefaults) -> Result<ExportRequest> {
    let Value::Object(mut fields) = object else {
        return Err(reject("body is not a JSON object"));
    };

    let rows = match fields.remove("rows") {
        None | Some(Value::Null) => return Err(reject("`rows` is missing")),
        Some(Value::Array(rows)) => rows,
        Some(_) => return Err(reject("`rows` is not an array")),
    };
    match rows.first() {
        None => return Err(reject("`rows` is empty")),
        Some(header) if !header.is_array() => {
            return Err(reject("`rows[0]` (the header row) is not an array"));
        }
        Some(_) => {}
    }

    let rows = rows.into_iter().map(into_row).collect();

    Ok(ExportRequest {
        rows,
        sheet_name: resolve_sheet_name(&fields, defaults),
        filename: truthy_text(fields.get("filename"))
            .unwrap_or_else(|| defaults.default_filename.clone()),
    })
}

/// Strip characters the format forbids and cut to the 31-character limit.
///
/// Leading and trailing apostrophes are also removed because worksheet names
/// may not start or end with one.
pub fn sanitize_sheet_name(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| !ILLEGAL_SHEET_CHARS.contains(c))
        .collect();
    stripped
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME_CHARS)
        .collect::<String>()
        .trim_end_matches('\'')
        .to_string()
}

fn resolve_sheet_name(fields: &Map<String, Value>, defaults: &ExportDefaults) -> String {
    truthy_text(fields.get("sheetName"))
        .map(|name| sanitize_sheet_name(&name))
        .filter(|name| !name.trim().is_empty() && !name.eq_ignore_ascii_case("history"))
        .unwrap_or_else(|| sanitize_sheet_name(&defaults.default_sheet_name))
}

/// Text of a field unless it is absent or falsy (`null`, `false`, `0`, `""`).
fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        other => Some(other.to_string()),
    }
}

/// Rows after the header are used as-is when they are arrays; `null` is an
/// empty row and any other scalar is a one-cell row.
fn into_row(value: Value) -> Row {
    match value {
        Value::Array(cells) => cells,
        Value::Null => Vec::new(),
        scalar => vec![scalar],
    }
}

fn reject(reason: &str) -> ExportError {
    warn!("Rejecting export request: {reason}");
    ExportError::invalid_rows(ROWS_REQUIRED)
}
