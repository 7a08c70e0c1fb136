//! # XLSX Export Service
//!
//! Accepts a row matrix over HTTP and answers with an XLSX attachment.
//!
//! ## Overview
//!
//! One handler does all the work: parse the body (JSON or form-encoded),
//! validate that it carries a 2D array of rows, hand the rows to
//! `rust_xlsxwriter`, and send the buffered workbook back with download
//! headers. Deployment targets are thin adapters around that handler:
//!
//! - [`server`] mounts it on an axum router
//! - [`cli`] exposes `serve` and a one-shot `convert` command
//!
//! ## Quick Start
//!
//! ```rust
//! use export_service::handler::{ExportHandler, ExportInput};
//!
//! let handler = ExportHandler::default();
//! let reply = handler.handle(ExportInput::post(
//!     Some("application/json"),
//!     r#"{"rows": [["name", "qty"], ["apples", 3]]}"#,
//! ));
//! assert_eq!(reply.status.as_u16(), 200);
//! ```
//!
//! ## Request Fields
//!
//! | Field | Required | Default |
//! |-------|----------|---------|
//! | `rows` | yes | |
//! | `sheetName` | no | `Results` |
//! | `filename` | no | `results.xlsx` |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)] // subjective determination
#![allow(clippy::return_self_not_must_use)] // builder patterns
#![allow(clippy::doc_markdown)] // XLSX, RFC, etc. are proper nouns

/// Request body parsing, validation and defaulting
pub mod request;

/// Workbook generation
pub mod generator;

/// Response construction
pub mod response;

/// The runtime-independent export handler
pub mod handler;

/// Axum adapter
pub mod server;

/// Configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

pub use export_core::{ExportError, Result};
pub use generator::excel::{ExcelFeatures, XlsxEncoder};
pub use handler::{ExportHandler, ExportInput};
pub use response::ExportReply;
pub use server::ExportRouterFactory;
