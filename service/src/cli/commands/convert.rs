//! `convert`: the one-shot adapter.
//!
//! Reads a request body from a file or stdin, runs it through the same
//! [`ExportHandler`] the HTTP adapter uses, and writes the workbook to disk.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use export_core::{ExportConfig, ExportError, Result, SpreadsheetArtifact};
use tracing::{debug, warn};

use crate::handler::{ExportHandler, ExportInput};
use crate::response::ExportReply;

/// Where the request body comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin().read_to_end(&mut buffer)?;
                Ok(buffer)
            }
            Self::File(path) => std::fs::read(path).map_err(|e| {
                ExportError::other_with_source(format!("Failed to read {}", path.display()), e)
            }),
        }
    }
}

/// Write the reply body an HTTP caller would have received, newline terminated
fn report_failure(err: &ExportError, out: &mut impl Write) -> std::io::Result<()> {
    let reply = ExportReply::from_error(err);
    out.write_all(&reply.body)?;
    writeln!(out)
}

/// Command for converting a single request body
pub struct ConvertCommand {
    input: InputSource,
    content_type: String,
    output: Option<PathBuf>,
    out_dir: Option<PathBuf>,
}

impl ConvertCommand {
    /// Create a new convert command; an input of `-` means stdin
    #[must_use]
    pub fn new(
        input: &str,
        content_type: &str,
        output: Option<PathBuf>,
        out_dir: Option<PathBuf>,
    ) -> Self {
        let input = if input == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(input))
        };
        Self {
            input,
            content_type: content_type.to_string(),
            output,
            out_dir,
        }
    }

    /// Execute the conversion and return the path written
    ///
    /// # Errors
    ///
    /// Returns the handler's error (invalid rows, encoding failure) after
    /// printing the error body to stderr, or an IO error if the body cannot
    /// be read or the workbook cannot be written.
    pub fn execute(&self, config: &ExportConfig) -> Result<PathBuf> {
        let body = self.input.read()?;
        debug!("Read {} byte request body from {:?}", body.len(), self.input);

        let handler = ExportHandler::from_config(config);
        let input = ExportInput::post(Some(self.content_type.as_str()), body);

        let artifact = handler.export(&input).inspect_err(|err| {
            if let Err(e) = report_failure(err, &mut std::io::stderr().lock()) {
                warn!("Could not write error body to stderr: {e}");
            }
        })?;

        let target = self.target_path(&artifact, &config.export.default_filename);
        std::fs::write(&target, &artifact.bytes).map_err(|e| {
            ExportError::other_with_source(format!("Failed to write {}", target.display()), e)
        })?;
        Ok(target)
    }

    /// Explicit output path, or the artifact's filename inside `out_dir`
    fn target_path(&self, artifact: &SpreadsheetArtifact, fallback: &str) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        // Only the final component of the requested name is trusted.
        let name = Path::new(&artifact.filename)
            .file_name()
            .map_or_else(|| PathBuf::from(fallback), PathBuf::from);
        self.out_dir
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
            .join(name)
    }
}
