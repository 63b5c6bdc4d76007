use attache_core::CredentialParseError;
use reqwest::StatusCode;
use thiserror::Error;

use crate::failure::FailureReason;

/// Errors raised while fetching upload credentials
#[derive(Debug, Error)]
pub enum CredentialFetchError {
  #[error("Authentication failed. Please check your API credentials.")]
  Unauthorized,

  #[error("Credential endpoint {0} not found")]
  NotFound(String),

  #[error("Unexpected error: HTTP {status} - {body}")]
  Status { status: StatusCode, body: String },

  #[error("Failed to reach the attachment API: {0}")]
  Network(#[source] reqwest::Error),

  #[error("Failed to parse upload credentials: {0}")]
  Parse(#[from] CredentialParseError),
}

impl CredentialFetchError {
  /// Failure category passed to a [`FailureHandler`](crate::FailureHandler)
  pub const fn reason(&self) -> FailureReason {
    match self {
      CredentialFetchError::Unauthorized => FailureReason::Unauthorized,
      CredentialFetchError::NotFound(_) => FailureReason::NotFound,
      CredentialFetchError::Status { .. } => FailureReason::ServerError,
      CredentialFetchError::Network(_) => FailureReason::Network,
      CredentialFetchError::Parse(_) => FailureReason::InvalidResponse,
    }
  }

  /// Human-readable detail passed alongside the reason
  pub fn detail(&self) -> Option<String> {
    match self {
      CredentialFetchError::Unauthorized => None,
      _ => Some(self.to_string()),
    }
  }
}
