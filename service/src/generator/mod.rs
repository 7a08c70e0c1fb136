//! Workbook generation.
//!
//! Encoders implement [`export_core::SpreadsheetEncoder`]; the handler only
//! ever sees that trait. [`excel`] is the `rust_xlsxwriter` backed encoder.

pub mod excel;

pub use excel::{ColumnWidthRule, ExcelFeatures, XlsxEncoder};
