use rust_xlsxwriter::{Worksheet, XlsxError};
use serde_json::Value;

/// Write one JSON value into a cell.
///
/// `null` leaves the cell blank. Nested arrays and objects are written as
/// their JSON text.
pub(super) fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Value,
) -> Result<(), XlsxError> {
    match value {
        Value::Null => {}
        Value::Bool(flag) => {
            worksheet.write_boolean(row, col, *flag)?;
        }
        Value::Number(number) => match number.as_f64() {
            Some(n) => {
                worksheet.write_number(row, col, n)?;
            }
            None => {
                worksheet.write_string(row, col, number.to_string())?;
            }
        },
        Value::String(text) => {
            worksheet.write_string(row, col, text)?;
        }
        nested @ (Value::Array(_) | Value::Object(_)) => {
            worksheet.write_string(row, col, nested.to_string())?;
        }
    }
    Ok(())
}

/// Text a header cell contributes to its column width.
pub fn header_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_text() {
        assert_eq!(header_text(&json!(null)), "");
        assert_eq!(header_text(&json!("Název")), "Název");
        assert_eq!(header_text(&json!(1.5)), "1.5");
        assert_eq!(header_text(&json!(true)), "true");
        assert_eq!(header_text(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_write_cell_rejects_oversized_string() {
        let mut worksheet = Worksheet::new();
        let huge = Value::String("x".repeat(40_000));
        assert!(write_cell(&mut worksheet, 0, 0, &huge).is_err());
        assert!(write_cell(&mut worksheet, 0, 0, &json!("fine")).is_ok());
    }
}
