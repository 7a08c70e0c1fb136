use export_core::{ExportError, Result};

/// Columns per worksheet in the XLSX format.
const MAX_EXCEL_COLUMNS: usize = 16_384;

/// Rows per worksheet in the XLSX format.
const MAX_EXCEL_ROWS: usize = 1_048_576;

/// Safely cast usize to u16 for Excel column indices.
pub(super) fn usize_to_u16_column(value: usize) -> Result<u16> {
    if value >= MAX_EXCEL_COLUMNS {
        return Err(ExportError::encoding(format!(
            "Too many columns for Excel: {} (max: {MAX_EXCEL_COLUMNS})",
            value + 1
        )));
    }

    u16::try_from(value)
        .map_err(|_| ExportError::encoding(format!("Column index {value} cannot fit in u16")))
}

/// Safely cast usize to u32 for Excel row indices.
pub(super) fn usize_to_u32_row(value: usize) -> Result<u32> {
    if value >= MAX_EXCEL_ROWS {
        return Err(ExportError::encoding(format!(
            "Too many rows for Excel: {} (max: {MAX_EXCEL_ROWS})",
            value + 1
        )));
    }

    u32::try_from(value)
        .map_err(|_| ExportError::encoding(format!("Row index {value} cannot fit in u32")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_limit() {
        assert_eq!(usize_to_u16_column(0).ok(), Some(0));
        assert_eq!(usize_to_u16_column(16_383).ok(), Some(16_383));
        assert!(usize_to_u16_column(16_384).is_err());
    }

    #[test]
    fn test_row_limit() {
        assert_eq!(usize_to_u32_row(1_048_575).ok(), Some(1_048_575));
        assert!(usize_to_u32_row(1_048_576).is_err());
    }
}
