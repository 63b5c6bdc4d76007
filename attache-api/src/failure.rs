//! # Failure Handling
//!
//! Credential fetch failures are reported through a [`FailureHandler`]. A
//! [`CredentialClient`](crate::CredentialClient) is built with a default
//! handler, and each fetch may pass its own handler to override it.

use std::fmt;

use tracing::error;

/// Category of a failed API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
  /// The backend rejected the API credentials (401/403)
  Unauthorized,
  /// The endpoint does not exist (404)
  NotFound,
  /// Any other non-success HTTP status
  ServerError,
  /// The request never produced a response
  Network,
  /// The response body did not hold a usable upload policy
  InvalidResponse,
}

impl fmt::Display for FailureReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      FailureReason::Unauthorized => "unauthorized",
      FailureReason::NotFound => "not found",
      FailureReason::ServerError => "server error",
      FailureReason::Network => "network error",
      FailureReason::InvalidResponse => "invalid response",
    };
    f.write_str(name)
  }
}

/// Receives failures of API calls that did not produce a value
pub trait FailureHandler: Send + Sync {
  fn handle(&self, reason: FailureReason, detail: Option<String>);
}

impl<F> FailureHandler for F
where
  F: Fn(FailureReason, Option<String>) + Send + Sync,
{
  fn handle(&self, reason: FailureReason, detail: Option<String>) {
    self(reason, detail)
  }
}

/// Default handler that records the failure in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingFailureHandler;

impl FailureHandler for LoggingFailureHandler {
  fn handle(&self, reason: FailureReason, detail: Option<String>) {
    match detail {
      Some(detail) => error!(%reason, %detail, "Attachment API request failed"),
      None => error!(%reason, "Attachment API request failed"),
    }
  }
}
