//! Request handling before encoding.
//!
//! Bodies arrive in one of several shapes. [`body`] turns raw bytes into a
//! [`RequestBody`](export_core::RequestBody) and then into a single JSON
//! value; [`validate`] checks that value and fills in defaults to produce an
//! [`ExportRequest`](export_core::ExportRequest).

pub mod body;
pub mod validate;

pub use body::{effective_object, read_body};
pub use validate::{sanitize_sheet_name, validate_request};
