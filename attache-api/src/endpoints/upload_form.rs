//! # Upload Form Endpoints
//!
//! Fetches signed S3 POST-policy form fields for private attachments and
//! public avatars, and decodes them into [`UploadCredentials`].

use attache_core::{UploadCredentials, parse_upload_credentials_str};
use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};

use crate::client::CredentialClient;
use crate::error::CredentialFetchError;
use crate::failure::FailureHandler;
use crate::models::CredentialScope;

impl CredentialClient {
  /// Fetch and decode upload credentials for `scope`
  #[instrument(skip(self), level = "debug")]
  pub async fn fetch_upload_credentials(
    &self,
    scope: CredentialScope,
  ) -> Result<UploadCredentials, CredentialFetchError> {
    let path = scope.path();

    let response = self.get(path).send().await.map_err(CredentialFetchError::Network)?;
    let status = response.status();
    debug!(%status, "Received upload form fields response");

    match status {
      _ if status.is_success() => {
        let body = response.text().await.map_err(CredentialFetchError::Network)?;
        let credentials = parse_upload_credentials_str(&body)?;
        info!(%scope, key = credentials.object_key(), "Fetched upload credentials");
        Ok(credentials)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CredentialFetchError::Unauthorized),
      StatusCode::NOT_FOUND => Err(CredentialFetchError::NotFound(path.to_string())),
      _ => Err(CredentialFetchError::Status {
        status,
        body: response.text().await.unwrap_or_default(),
      }),
    }
  }

  /// Fetch upload credentials and report the outcome through callbacks.
  ///
  /// Exactly one of `on_success` or the failure handler runs. Failures go to
  /// `on_failure` when given, otherwise to the client's default handler. A
  /// response that does not decode into credentials counts as a failure.
  pub async fn fetch<S>(&self, scope: CredentialScope, on_failure: Option<&dyn FailureHandler>, on_success: S)
  where
    S: FnOnce(UploadCredentials),
  {
    match self.fetch_upload_credentials(scope).await {
      Ok(credentials) => on_success(credentials),
      Err(err) => {
        warn!(%scope, error = %err, "Failed to fetch upload credentials");
        let (reason, detail) = (err.reason(), err.detail());
        match on_failure {
          Some(handler) => handler.handle(reason, detail),
          None => self.default_failure_handler.handle(reason, detail),
        }
      }
    }
  }

  /// [`fetch`](Self::fetch) for private attachments
  pub async fn fetch_private<S>(&self, on_failure: Option<&dyn FailureHandler>, on_success: S)
  where
    S: FnOnce(UploadCredentials),
  {
    self.fetch(CredentialScope::Private, on_failure, on_success).await
  }

  /// [`fetch`](Self::fetch) for public uploads such as avatars
  pub async fn fetch_public<S>(&self, on_failure: Option<&dyn FailureHandler>, on_success: S)
  where
    S: FnOnce(UploadCredentials),
  {
    self.fetch(CredentialScope::Public, on_failure, on_success).await
  }
}
