//! Response construction.
//!
//! [`ExportReply`] is an owned status, header map and body. Adapters turn it
//! into whatever their runtime expects; for axum that is the
//! [`IntoResponse`] impl below.

use axum::body::Body;
use axum::http::header::{ALLOW, CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use export_core::{ExportError, Result, SpreadsheetArtifact};
use serde::Serialize;

/// Generic message of every 500 response
pub const EXPORT_FAILED: &str = "Export failed";

const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// JSON body of 400 and 500 responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short message
    pub error: String,
    /// Underlying error text, only on 500
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A complete HTTP reply, fully buffered
#[derive(Debug, Clone)]
pub struct ExportReply {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

impl ExportReply {
    /// 200 reply carrying the workbook as a download.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Service` if a header value cannot be built.
    pub fn attachment(artifact: SpreadsheetArtifact) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, header_value(artifact.content_type)?);
        headers.insert(
            CONTENT_DISPOSITION,
            header_value(&content_disposition(&artifact.filename))?,
        );
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

        Ok(Self {
            status: StatusCode::OK,
            headers,
            body: artifact.bytes,
        })
    }

    /// Reply for a failed export.
    ///
    /// Invalid rows give 400, a wrong method gives 405, everything else 500.
    pub fn from_error(err: &ExportError) -> Self {
        match err {
            ExportError::InvalidRows { message } => Self::json(
                StatusCode::BAD_REQUEST,
                &ErrorBody {
                    error: message.clone(),
                    detail: None,
                },
            ),
            ExportError::MethodNotAllowed { .. } => {
                let mut reply = Self::text(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
                reply.headers.insert(ALLOW, HeaderValue::from_static("POST"));
                reply
            }
            other => Self::json(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorBody {
                    error: EXPORT_FAILED.to_string(),
                    detail: Some(other.to_string()),
                },
            ),
        }
    }

    /// Header value as text, if present and visible ASCII
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn json(status: StatusCode, body: &ErrorBody) -> Self {
        let bytes = serde_json::to_vec(body)
            .unwrap_or_else(|_| format!(r#"{{"error":"{EXPORT_FAILED}"}}"#).into_bytes());
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Self {
            status,
            headers,
            body: bytes,
        }
    }

    fn text(status: StatusCode, body: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_CONTENT_TYPE));
        Self {
            status,
            headers,
            body: body.as_bytes().to_vec(),
        }
    }
}

impl IntoResponse for ExportReply {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// `attachment; filename="<ascii>"; filename*=UTF-8''<percent-encoded>`
///
/// Legacy clients read the sanitized `filename`; RFC 5987 aware clients use
/// `filename*` and recover the original UTF-8 name.
pub fn content_disposition(filename: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_fallback_filename(filename),
        urlencoding::encode(filename)
    )
}

/// Replace every character outside `[A-Za-z0-9_.-]` with `_`.
pub fn ascii_fallback_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ExportError::service(format!("Invalid header value '{value}': {e}")))
}
