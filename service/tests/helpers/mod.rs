//! Shared helpers for reading exported workbooks back with calamine

#![allow(dead_code)]

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use serde_json::Value;

/// Open an in-memory workbook
pub fn open_workbook(bytes: &[u8]) -> Xlsx<Cursor<Vec<u8>>> {
    Xlsx::new(Cursor::new(bytes.to_vec())).expect("exported bytes should be a valid xlsx")
}

/// Names of all sheets in the workbook
pub fn sheet_names(bytes: &[u8]) -> Vec<String> {
    open_workbook(bytes).sheet_names()
}

/// The single worksheet's cell range
pub fn only_sheet(bytes: &[u8]) -> (String, Range<Data>) {
    let mut workbook = open_workbook(bytes);
    let names = workbook.sheet_names();
    assert_eq!(names.len(), 1, "expected exactly one sheet, got {names:?}");
    let range = workbook
        .worksheet_range(&names[0])
        .expect("sheet should be readable");
    (names[0].clone(), range)
}

/// The cell calamine should report for a JSON value
pub fn expected_cell(value: &Value) -> Data {
    match value {
        Value::Null => Data::Empty,
        Value::Bool(b) => Data::Bool(*b),
        Value::Number(n) => Data::Float(n.as_f64().expect("finite number")),
        Value::String(s) => Data::String(s.clone()),
        nested => Data::String(nested.to_string()),
    }
}

/// Compare every cell of `rows` against the sheet, by absolute position
pub fn assert_grid_matches(range: &Range<Data>, rows: &[Vec<Value>]) {
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let actual = range
                .get_value((r as u32, c as u32))
                .cloned()
                .unwrap_or(Data::Empty);
            assert_eq!(
                actual,
                expected_cell(value),
                "cell mismatch at row {r}, column {c}"
            );
        }
    }

    let written_rows = rows
        .iter()
        .rposition(|row| row.iter().any(|v| !v.is_null()))
        .map_or(0, |last| last + 1);
    let range_rows = range.end().map_or(0, |(row, _)| row as usize + 1);
    assert_eq!(range_rows, written_rows, "unexpected number of rows");
}

/// Pull the RFC 5987 `filename*` value out of a Content-Disposition header
/// and percent-decode it.
pub fn extended_filename(disposition: &str) -> String {
    let encoded = disposition
        .split("filename*=UTF-8''")
        .nth(1)
        .expect("filename* parameter present");
    urlencoding::decode(encoded)
        .expect("valid percent encoding")
        .into_owned()
}

/// The quoted ASCII `filename` parameter of a Content-Disposition header
pub fn ascii_filename(disposition: &str) -> String {
    disposition
        .split("filename=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .expect("filename parameter present")
        .to_string()
}
