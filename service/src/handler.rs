//! The export handler shared by every deployment adapter.
//!
//! `handle` is a pure request-in, response-out function with two decision
//! points: the content-type branch and the validation branch. It holds no
//! per-request state, so one instance can serve concurrent requests.

use axum::body::Bytes;
use axum::http::Method;
use export_core::prelude::*;
use tracing::{debug, error, info};

use crate::generator::XlsxEncoder;
use crate::request::{effective_object, read_body, validate_request};
use crate::response::ExportReply;

/// Runtime-independent view of an incoming request
#[derive(Debug, Clone)]
pub struct ExportInput {
    /// HTTP method
    pub method: Method,
    /// Declared `Content-Type`, if any
    pub content_type: Option<String>,
    /// Complete raw body
    pub body: Bytes,
}

impl ExportInput {
    /// A POST request with the given content type and body
    pub fn post(content_type: Option<&str>, body: impl Into<Bytes>) -> Self {
        Self {
            method: Method::POST,
            content_type: content_type.map(str::to_owned),
            body: body.into(),
        }
    }
}

/// Parses, validates, encodes and wraps the result in an [`ExportReply`]
pub struct ExportHandler<E = XlsxEncoder> {
    encoder: E,
    defaults: ExportDefaults,
}

impl ExportHandler<XlsxEncoder> {
    /// Handler using the XLSX encoder configured from `defaults`
    #[must_use]
    pub fn new(defaults: ExportDefaults) -> Self {
        let encoder = XlsxEncoder::from_defaults(&defaults);
        Self { encoder, defaults }
    }

    /// Handler built from a full configuration
    #[must_use]
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.export.clone())
    }
}

impl Default for ExportHandler<XlsxEncoder> {
    fn default() -> Self {
        Self::new(ExportDefaults::default())
    }
}

impl<E: SpreadsheetEncoder> ExportHandler<E> {
    /// Handler with a custom encoder
    pub fn with_encoder(encoder: E, defaults: ExportDefaults) -> Self {
        Self { encoder, defaults }
    }

    /// The encoder in use
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Run the whole pipeline and always produce a well-formed reply.
    pub fn handle(&self, input: ExportInput) -> ExportReply {
        let reply = self
            .export(&input)
            .and_then(ExportReply::attachment)
            .unwrap_or_else(|err| {
                if !err.is_client_error() {
                    error!("Export failed: {err}");
                }
                ExportReply::from_error(&err)
            });
        info!(
            "{} export -> {} ({} bytes)",
            input.method,
            reply.status.as_u16(),
            reply.body.len()
        );
        reply
    }

    /// Method guard, parse, validate and encode.
    ///
    /// # Errors
    ///
    /// - `ExportError::MethodNotAllowed` for anything but POST
    /// - `ExportError::InvalidRows` when the body has no usable row matrix
    /// - `ExportError::Encoding` when the spreadsheet library fails
    pub fn export(&self, input: &ExportInput) -> Result<SpreadsheetArtifact> {
        if input.method != Method::POST {
            return Err(ExportError::method_not_allowed(input.method.as_str()));
        }
        let request = self.parse(input.content_type.as_deref(), &input.body)?;
        self.render(&request)
    }

    /// Turn a raw body into a validated request.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidRows` when validation fails; parse
    /// failures never surface on their own.
    pub fn parse(&self, content_type: Option<&str>, body: &[u8]) -> Result<ExportRequest> {
        let kind = BodyKind::from_content_type(content_type);
        debug!("Reading {} byte body as {kind:?}", body.len());
        let object = effective_object(read_body(kind, body));
        let request = validate_request(object, &self.defaults)?;
        debug!(
            "Validated {} rows x {} columns for sheet '{}'",
            request.rows.len(),
            request.column_count(),
            request.sheet_name
        );
        Ok(request)
    }

    /// Encode a validated request into a buffered artifact.
    ///
    /// # Errors
    ///
    /// Propagates the encoder's `ExportError::Encoding`.
    pub fn render(&self, request: &ExportRequest) -> Result<SpreadsheetArtifact> {
        let options = EncodeOptions {
            sheet_name: request.sheet_name.clone(),
        };
        let bytes = self.encoder.encode(&request.rows, &options)?;
        debug!("{} produced {} bytes", self.encoder.name(), bytes.len());
        Ok(SpreadsheetArtifact::xlsx(bytes, request.filename.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and returns a fixed buffer
    #[derive(Default)]
    struct CountingEncoder {
        calls: AtomicUsize,
    }

    impl SpreadsheetEncoder for CountingEncoder {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn encode(&self, _rows: &[Row], _options: &EncodeOptions) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(b"PK".to_vec())
        }
    }

    struct FailingEncoder;

    impl SpreadsheetEncoder for FailingEncoder {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn encode(&self, _rows: &[Row], _options: &EncodeOptions) -> Result<Vec<u8>> {
            Err(ExportError::encoding("library exploded"))
        }
    }

    fn counting() -> ExportHandler<CountingEncoder> {
        ExportHandler::with_encoder(CountingEncoder::default(), ExportDefaults::default())
    }

    #[test]
    fn test_invalid_rows_never_reach_encoder() {
        let handler = counting();
        for body in [r#"{"rows": []}"#, r#"{"rows": [1]}"#, "{", ""] {
            let reply = handler.handle(ExportInput::post(Some("application/json"), body));
            assert_eq!(reply.status, StatusCode::BAD_REQUEST, "{body}");
        }
        assert_eq!(handler.encoder.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_non_post_is_rejected_before_parsing() {
        let handler = counting();
        let input = ExportInput {
            method: Method::GET,
            ..ExportInput::post(Some("application/json"), r#"{"rows": [["a"]]}"#)
        };
        let reply = handler.handle(input);
        assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(reply.header("allow"), Some("POST"));
        assert_eq!(handler.encoder.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_valid_request_encodes_once() {
        let handler = counting();
        let reply = handler.handle(ExportInput::post(
            Some("application/json"),
            r#"{"rows": [["a"]], "filename": "out.xlsx"}"#,
        ));
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, b"PK");
        assert_eq!(
            reply.header("content-disposition"),
            Some("attachment; filename=\"out.xlsx\"; filename*=UTF-8''out.xlsx")
        );
        assert_eq!(handler.encoder.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_encoder_failure_is_500_with_detail() {
        let handler = ExportHandler::with_encoder(FailingEncoder, ExportDefaults::default());
        let reply = handler.handle(ExportInput::post(None, r#"{"rows": [["a"]]}"#));
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_slice(&reply.body).expect("json body");
        assert_eq!(body["error"], "Export failed");
        assert!(
            body["detail"]
                .as_str()
                .is_some_and(|d| d.contains("library exploded"))
        );
    }

    #[test]
    fn test_parse_applies_defaults() {
        let handler = ExportHandler::default();
        let request = handler
            .parse(
                Some("application/x-www-form-urlencoded"),
                b"rows=%5B%5B%22h%22%5D%5D",
            )
            .expect("valid form");
        assert_eq!(request.sheet_name, "Results");
        assert_eq!(request.filename, "results.xlsx");
    }
}
