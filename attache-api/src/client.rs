//! # Attachment API HTTP Client
//!
//! HTTP client for the chat backend's attachment endpoints. Holds the base
//! URL, the API login and the failure handler used when a caller does not
//! supply one.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder};

use crate::consts::{ACCEPT, USER_AGENT};
use crate::failure::{FailureHandler, LoggingFailureHandler};
use crate::models::ApiAuth;

/// Represents an attachment API client
pub struct CredentialClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: ApiAuth,
  pub(crate) default_failure_handler: Arc<dyn FailureHandler>,
}

impl CredentialClient {
  /// Create a new client that reports unhandled failures to
  /// `default_failure_handler`
  pub fn new(base_url: &str, auth: ApiAuth, default_failure_handler: Arc<dyn FailureHandler>) -> Self {
    Self {
      client: Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
      default_failure_handler,
    }
  }

  /// Create a new client that logs unhandled failures
  pub fn with_default_handler(base_url: &str, auth: ApiAuth) -> Self {
    Self::new(base_url, auth, Arc::new(LoggingFailureHandler))
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Authenticated GET with the standard headers
  pub(crate) fn get(&self, path: &str) -> RequestBuilder {
    self
      .client
      .get(format!("{}{}", self.base_url, path))
      .header("Accept", ACCEPT)
      .header("User-Agent", USER_AGENT)
      .basic_auth(&self.auth.username, Some(&self.auth.token))
  }
}

/// Create a credential client from an API login
pub fn create_credential_client(base_url: &str, username: &str, token: &str) -> CredentialClient {
  let auth = ApiAuth {
    username: username.to_string(),
    token: token.to_string(),
  };

  CredentialClient::with_default_handler(base_url, auth)
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  #[test]
  fn test_client_creation() {
    let client = create_credential_client("https://chat.example.com/", "alice", "s3cret");

    assert_eq!(client.base_url(), "https://chat.example.com");
    assert_eq!(client.auth.username, "alice");
    assert_eq!(client.auth.token, "s3cret");
  }

  #[tokio::test]
  async fn test_get_sends_auth_and_headers() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_credential_client(&mock_server.uri(), "alice", "s3cret");

    Mock::given(method("GET"))
      .and(path("/ping"))
      .and(basic_auth("alice", "s3cret"))
      .and(header("Accept", ACCEPT))
      .and(header("User-Agent", USER_AGENT))
      .respond_with(ResponseTemplate::new(200))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = client.get("/ping").send().await?;
    assert!(response.status().is_success());

    Ok(())
  }
}
