//! # Uploader
//!
//! Sends one multipart POST per upload to the endpoint named in the
//! credentials. Each call builds its own form; nothing is shared between
//! concurrent uploads except the connection pool inside [`reqwest::Client`].

use std::fmt;

use attache_core::UploadCredentials;
use reqwest::{Client, StatusCode};
use reqwest::header::LOCATION;
use reqwest::multipart::Part;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::error::UploadError;
use crate::form::{PolicyFields, file_part};
use crate::source::UploadSource;

/// Lifecycle of a single upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
  Idle,
  InFlight,
  Succeeded,
  Failed,
}

impl UploadState {
  pub const fn is_terminal(self) -> bool {
    matches!(self, UploadState::Succeeded | UploadState::Failed)
  }
}

impl fmt::Display for UploadState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      UploadState::Idle => "idle",
      UploadState::InFlight => "in flight",
      UploadState::Succeeded => "succeeded",
      UploadState::Failed => "failed",
    };
    f.write_str(name)
  }
}

/// What the storage service answered to a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
  pub status: StatusCode,
  /// `Location` header, when the service sends one
  pub location: Option<String>,
}

/// Uploads content to S3-compatible storage using signed form credentials
#[derive(Debug, Clone, Default)]
pub struct Uploader {
  client: Client,
}

/// Everything needed to send an upload, owned so it can move to a task
struct PreparedUpload {
  endpoint_url: String,
  object_key: String,
  fields: PolicyFields,
  source: UploadSource,
  mime_type: String,
}

impl Uploader {
  pub fn new() -> Self {
    Self::default()
  }

  /// Use an existing HTTP client, e.g. one with custom timeouts
  pub const fn with_client(client: Client) -> Self {
    Self { client }
  }

  /// Start an upload in the background and report the result to
  /// `on_complete`.
  ///
  /// Returns as soon as the task is spawned. `on_complete` runs exactly once,
  /// on a runtime worker thread, with `(true, None)` for a 2xx response and
  /// `(false, Some(error))` otherwise. The returned handle resolves to the
  /// terminal state after the callback has run.
  ///
  /// Must be called from within a tokio runtime.
  pub fn upload<F>(
    &self,
    source: UploadSource,
    mime_type: &str,
    credentials: &UploadCredentials,
    on_complete: F,
  ) -> JoinHandle<UploadState>
  where
    F: FnOnce(bool, Option<UploadError>) + Send + 'static,
  {
    let prepared = PreparedUpload::new(source, mime_type, credentials);
    let client = self.client.clone();

    tokio::spawn(async move {
      match prepared.send(&client).await {
        Ok(_) => {
          on_complete(true, None);
          UploadState::Succeeded
        }
        Err(err) => {
          on_complete(false, Some(err));
          UploadState::Failed
        }
      }
    })
  }

  /// Upload and wait for the storage service's answer
  pub async fn upload_async(
    &self,
    source: UploadSource,
    mime_type: &str,
    credentials: &UploadCredentials,
  ) -> Result<UploadOutcome, UploadError> {
    PreparedUpload::new(source, mime_type, credentials)
      .send(&self.client)
      .await
  }
}

impl PreparedUpload {
  fn new(source: UploadSource, mime_type: &str, credentials: &UploadCredentials) -> Self {
    Self {
      endpoint_url: credentials.endpoint_url().to_string(),
      object_key: credentials.object_key().to_string(),
      fields: PolicyFields::from_credentials(credentials),
      source,
      mime_type: mime_type.to_string(),
    }
  }

  async fn send(self, client: &Client) -> Result<UploadOutcome, UploadError> {
    let span = info_span!("upload", key = %self.object_key, endpoint = %self.endpoint_url);
    let result = self.transfer(client).instrument(span.clone()).await;

    span.in_scope(|| match &result {
      Ok(outcome) => info!(state = %UploadState::Succeeded, status = %outcome.status, "Upload finished"),
      Err(err) => error!(state = %UploadState::Failed, error = %err, "Upload failed"),
    });
    result
  }

  async fn transfer(self, client: &Client) -> Result<UploadOutcome, UploadError> {
    debug!(state = %UploadState::Idle, "Preparing upload");
    let file = load_file_part(self.source, &self.mime_type).await?;
    let form = self.fields.into_form(file);

    debug!(state = %UploadState::InFlight, "Sending upload");
    let response = client.post(&self.endpoint_url).multipart(form).send().await?;
    let status = response.status();

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      error!(%status, %body, "Storage service rejected the upload");
      return Err(UploadError::Status { status, body });
    }

    let location = response
      .headers()
      .get(LOCATION)
      .and_then(|value| value.to_str().ok())
      .map(str::to_string);

    Ok(UploadOutcome { status, location })
  }
}

async fn load_file_part(source: UploadSource, mime_type: &str) -> Result<Option<Part>, UploadError> {
  match source {
    UploadSource::File(path) => {
      let data = tokio::fs::read(&path)
        .await
        .map_err(|source| UploadError::ReadSource { path, source })?;
      debug!(bytes = data.len(), "Read upload file");
      file_part(data, mime_type).map(Some)
    }
    UploadSource::Bytes(data) => file_part(data, mime_type).map(Some),
    UploadSource::Empty => {
      warn!("No upload content given, sending the form without a file part");
      Ok(None)
    }
  }
}
