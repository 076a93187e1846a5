// File: services/lokal_cli/src/output.rs
//! Rendering of gateway results on stdout.
//!
//! Every command prints the `{"data": ...}` / `{"error": "..."}` envelope.
//! An error envelope is still printed, then surfaces as
//! `LokalError::ApiError` so the process exits non-zero.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lokal_common::LokalError;
use lokal_gateway::{ApiResult, Download};
use serde::Serialize;
use serde_json::json;
use tracing::info;

#[derive(Debug, Clone, Copy)]
pub struct Output {
    compact: bool,
}

impl Output {
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }

    pub fn render<T: Serialize>(&self, result: &ApiResult<T>) -> Result<String, LokalError> {
        let rendered = if self.compact {
            serde_json::to_string(result)?
        } else {
            serde_json::to_string_pretty(result)?
        };
        Ok(rendered)
    }

    pub fn emit<T: Serialize>(&self, result: ApiResult<T>) -> Result<(), LokalError> {
        let rendered = self.render(&result)?;
        writeln!(io::stdout(), "{}", rendered)?;
        result.into_result().map(|_| ())
    }

    /// Writes an export to `target`, or to the server-suggested file name
    /// (else `fallback`) in the current directory.
    pub fn save_download(
        &self,
        result: ApiResult<Download>,
        target: Option<PathBuf>,
        fallback: &str,
    ) -> Result<(), LokalError> {
        let download = match result {
            ApiResult::Data(download) => download,
            ApiResult::Error(message) => return self.emit(ApiResult::<()>::Error(message)),
        };

        let path = target.unwrap_or_else(|| PathBuf::from(download.filename_or(fallback)));
        write_file(&path, &download.bytes)?;
        info!("Wrote {} bytes to {}", download.bytes.len(), path.display());

        self.emit(ApiResult::Data(json!({
            "file": path.display().to_string(),
            "bytes": download.bytes.len(),
            "content_type": download.content_type,
        })))
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), LokalError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
