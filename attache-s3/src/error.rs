use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by an upload attempt
#[derive(Debug, Error)]
pub enum UploadError {
  #[error("Failed to read upload source {}: {source}", path.display())]
  ReadSource {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Invalid MIME type '{0}'")]
  InvalidMimeType(String),

  #[error("Upload request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Upload rejected: HTTP {status} - {body}")]
  Status { status: StatusCode, body: String },
}
