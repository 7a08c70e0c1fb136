//! Content-type aware body parsing.
//!
//! None of these functions fail. Anything that cannot be parsed degrades to
//! an empty JSON object so the caller sees a validation error, not a crash.

use export_core::{BodyKind, RequestBody};
use serde_json::{Map, Value};
use tracing::debug;

/// Form key whose value may carry the whole request as a JSON string
const PAYLOAD_KEY: &str = "payload";

/// Read the raw body according to its declared kind.
pub fn read_body(kind: BodyKind, raw: &[u8]) -> RequestBody {
    match kind {
        BodyKind::Json | BodyKind::Other => parse_json_lenient(raw),
        BodyKind::Form => match serde_urlencoded::from_bytes::<Vec<(String, String)>>(raw) {
            Ok(pairs) => RequestBody::Form(pairs),
            Err(e) => {
                debug!("Discarding malformed form body: {e}");
                RequestBody::empty()
            }
        },
    }
}

/// Collapse a parsed body into the object that validation inspects.
pub fn effective_object(body: RequestBody) -> Value {
    match body {
        RequestBody::Json(value) => value,
        RequestBody::Form(pairs) => resolve_form(pairs),
    }
}

fn parse_json_lenient(raw: &[u8]) -> RequestBody {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return RequestBody::empty();
    }
    match serde_json::from_slice::<Value>(raw) {
        Ok(value) => RequestBody::Json(value),
        Err(e) => {
            debug!("Discarding unparseable JSON body: {e}");
            RequestBody::empty()
        }
    }
}

/// Form submissions cannot nest arrays, so rows travel as JSON text either in
/// a `payload` field holding the whole request or in a `rows` field.
fn resolve_form(pairs: Vec<(String, String)>) -> Value {
    let payload = pairs
        .iter()
        .find(|(key, _)| key == PAYLOAD_KEY)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty());

    if let Some(payload) = payload {
        return serde_json::from_str(payload).unwrap_or_else(|_| {
            let mut object = Map::new();
            object.insert(PAYLOAD_KEY.to_string(), Value::String(payload.to_string()));
            Value::Object(object)
        });
    }

    // Later duplicates overwrite earlier ones.
    let mut object: Map<String, Value> = pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    let parsed_rows = match object.get("rows") {
        Some(Value::String(text)) => serde_json::from_str::<Value>(text).ok(),
        _ => None,
    };
    if let Some(rows) = parsed_rows {
        object.insert("rows".to_string(), rows);
    }

    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resolve(kind: BodyKind, raw: &str) -> Value {
        effective_object(read_body(kind, raw.as_bytes()))
    }

    #[test]
    fn test_json_body_parsed_directly() {
        let value = resolve(BodyKind::Json, r#"{"rows": [["a"]], "sheetName": "S"}"#);
        assert_eq!(value, json!({"rows": [["a"]], "sheetName": "S"}));
    }

    #[test]
    fn test_malformed_json_becomes_empty_object() {
        assert_eq!(resolve(BodyKind::Json, "{not json"), json!({}));
        assert_eq!(resolve(BodyKind::Json, ""), json!({}));
        assert_eq!(resolve(BodyKind::Other, "   \n"), json!({}));
    }

    #[test]
    fn test_unknown_content_type_tries_json() {
        assert_eq!(resolve(BodyKind::Other, r#"{"rows": [[1]]}"#), json!({"rows": [[1]]}));
        assert_eq!(resolve(BodyKind::Other, "rows=1"), json!({}));
    }

    #[test]
    fn test_form_payload_json() {
        let value = resolve(
            BodyKind::Form,
            "payload=%7B%22rows%22%3A%5B%5B%22a%22%2C1%5D%5D%2C%22filename%22%3A%22x.xlsx%22%7D",
        );
        assert_eq!(value, json!({"rows": [["a", 1]], "filename": "x.xlsx"}));
    }

    #[test]
    fn test_form_payload_not_json_is_kept_raw() {
        let value = resolve(BodyKind::Form, "payload=hello+world&rows=%5B%5B1%5D%5D");
        assert_eq!(value, json!({"payload": "hello world"}));
    }

    #[test]
    fn test_form_empty_payload_falls_through_to_fields() {
        let value = resolve(BodyKind::Form, "payload=&rows=%5B%5B1%5D%5D");
        assert_eq!(value, json!({"payload": "", "rows": [[1]]}));
    }

    #[test]
    fn test_form_flat_fields_with_rows_json() {
        let value = resolve(
            BodyKind::Form,
            "rows=%5B%5B%22h%22%5D%2C%5B%22v%22%5D%5D&sheetName=Data&filename=out.xlsx",
        );
        assert_eq!(
            value,
            json!({"rows": [["h"], ["v"]], "sheetName": "Data", "filename": "out.xlsx"})
        );
    }

    #[test]
    fn test_form_rows_unparseable_stays_string() {
        let value = resolve(BodyKind::Form, "rows=not-json");
        assert_eq!(value, json!({"rows": "not-json"}));
    }

    #[test]
    fn test_form_last_duplicate_wins() {
        let value = resolve(BodyKind::Form, "sheetName=first&sheetName=second");
        assert_eq!(value, json!({"sheetName": "second"}));
    }
}
