//! Trait seams between the handler and the spreadsheet library

use crate::error::Result;
use crate::types::{EncodeOptions, Row};

/// Turns a row matrix into a serialized single-sheet workbook.
///
/// Implementations must be stateless across calls: the same rows and options
/// always yield an equivalent workbook, and concurrent calls need no
/// coordination.
pub trait SpreadsheetEncoder: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Encode `rows` into a complete in-memory workbook.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Encoding` if the library rejects the input
    /// (oversized strings, too many rows or columns) or fails to serialize.
    fn encode(&self, rows: &[Row], options: &EncodeOptions) -> Result<Vec<u8>>;
}
