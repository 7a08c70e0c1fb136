use export_core::{EncodeOptions, ExportError, Result, Row, SpreadsheetEncoder, Value};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use tracing::debug;

use super::cast;
use super::cells::write_cell;
use super::generator::XlsxEncoder;

fn encoding_error(err: XlsxError) -> ExportError {
    ExportError::encoding(err.to_string())
}

impl XlsxEncoder {
    /// Build the single-sheet workbook in memory.
    fn generate_workbook(&self, rows: &[Row], sheet_name: &str) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook
            .add_worksheet()
            .set_name(sheet_name)
            .map_err(encoding_error)?;

        Self::write_rows(worksheet, rows)?;
        self.size_columns(worksheet, rows.first().map_or(&[][..], Vec::as_slice))?;

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width > 0 {
            self.decorate(worksheet, rows.len(), width)?;
        }

        Ok(workbook)
    }

    fn write_rows(worksheet: &mut Worksheet, rows: &[Row]) -> Result<()> {
        for (r, row) in rows.iter().enumerate() {
            let row_index = cast::usize_to_u32_row(r)?;
            for (c, value) in row.iter().enumerate() {
                let col_index = cast::usize_to_u16_column(c)?;
                write_cell(worksheet, row_index, col_index, value).map_err(encoding_error)?;
            }
        }
        Ok(())
    }

    fn size_columns(&self, worksheet: &mut Worksheet, header: &[Value]) -> Result<()> {
        for (c, cell) in header.iter().enumerate() {
            let col_index = cast::usize_to_u16_column(c)?;
            worksheet
                .set_column_width(col_index, self.widths.width_for(cell))
                .map_err(encoding_error)?;
        }
        Ok(())
    }

    /// Header freeze and auto-filter; skipped entirely when nothing was written.
    fn decorate(&self, worksheet: &mut Worksheet, height: usize, width: usize) -> Result<()> {
        if self.freeze_header() {
            worksheet.set_freeze_panes(1, 0).map_err(encoding_error)?;
        }

        if self.add_filter() {
            let last_row = cast::usize_to_u32_row(height.saturating_sub(1))?;
            let last_col = cast::usize_to_u16_column(width.saturating_sub(1))?;
            worksheet
                .autofilter(0, 0, last_row, last_col)
                .map_err(encoding_error)?;
        }

        Ok(())
    }
}

impl SpreadsheetEncoder for XlsxEncoder {
    fn name(&self) -> &'static str {
        "rust_xlsxwriter"
    }

    fn encode(&self, rows: &[Row], options: &EncodeOptions) -> Result<Vec<u8>> {
        let mut workbook = self.generate_workbook(rows, &options.sheet_name)?;
        let buffer = workbook.save_to_buffer().map_err(encoding_error)?;
        debug!(
            "Encoded {} rows into {} bytes (sheet '{}')",
            rows.len(),
            buffer.len(),
            options.sheet_name
        );
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(name: &str) -> EncodeOptions {
        EncodeOptions {
            sheet_name: name.to_string(),
        }
    }

    #[test]
    fn test_xlsx_generation() {
        let rows = vec![
            vec![json!("name"), json!("qty"), json!("in stock")],
            vec![json!("apples"), json!(3), json!(true)],
            vec![json!("pears"), json!(null), json!(false)],
        ];
        let bytes = XlsxEncoder::new()
            .encode(&rows, &options("Results"))
            .expect("should generate workbook");
        // XLSX is a zip container.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_header_skips_decorations() {
        let rows = vec![Vec::new()];
        let bytes = XlsxEncoder::new()
            .encode(&rows, &options("Results"))
            .expect("should generate workbook");
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_too_many_columns_is_encoding_error() {
        let rows = vec![vec![json!(1); 16_385]];
        let err = XlsxEncoder::new()
            .encode(&rows, &options("Results"))
            .expect_err("column limit");
        assert!(matches!(err, ExportError::Encoding(_)));
    }

    #[test]
    fn test_invalid_sheet_name_is_encoding_error() {
        let err = XlsxEncoder::new()
            .encode(&[vec![json!("h")]], &options("bad/name"))
            .expect_err("illegal character");
        assert!(matches!(err, ExportError::Encoding(_)));
    }
}
