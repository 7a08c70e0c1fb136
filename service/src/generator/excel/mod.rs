//! XLSX encoder built on `rust_xlsxwriter`.
//!
//! Split into focused submodules: feature flags, the encoder type and its
//! builder, cell conversion, index casts, and workbook assembly.

mod cast;
mod cells;
mod features;
mod generator;
mod workbook;

pub use cells::header_text;
pub use features::ExcelFeatures;
pub use generator::{ColumnWidthRule, XlsxEncoder};
