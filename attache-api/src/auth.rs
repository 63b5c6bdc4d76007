//! Authentication helpers for the attachment API client.
//!
//! Loads the API login from the user's `.netrc` and builds ready-to-use
//! clients, so the CLI and integration tests share one discovery path.

use std::path::Path;

use anyhow::{Context, Result};
use attache_core::creds::get_api_credentials;
use tokio::runtime::Runtime;

use crate::{CredentialClient, create_credential_client};

/// Creates an authenticated client using credentials from .netrc.
pub fn create_credential_client_from_netrc(home: &Path, api_host: &str) -> Result<CredentialClient> {
  let credentials = get_api_credentials(home, api_host).context("Failed to get API credentials")?;

  Ok(create_credential_client(
    api_host,
    &credentials.username,
    &credentials.password,
  ))
}

/// Creates a tokio runtime and an authenticated client.
pub fn create_credential_runtime_and_client(home: &Path, api_host: &str) -> Result<(Runtime, CredentialClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_credential_client_from_netrc(home, api_host)?;
  Ok((rt, client))
}

#[cfg(test)]
mod tests {
  use attache_test_utils::NetrcGuard;

  use super::*;

  #[test]
  fn test_create_client_from_netrc() {
    let guard = NetrcGuard::new("machine chat.example.com\n  login alice\n  password s3cret\n");

    let client = create_credential_client_from_netrc(guard.home_dir(), "https://chat.example.com").unwrap();
    assert_eq!(client.base_url(), "https://chat.example.com");
    assert_eq!(client.auth.username, "alice");
    assert_eq!(client.auth.token, "s3cret");
  }

  #[test]
  fn test_create_client_from_netrc_missing_entry() {
    let guard = NetrcGuard::new("machine github.com login octocat password gh-token\n");

    let Err(err) = create_credential_client_from_netrc(guard.home_dir(), "https://chat.example.com") else {
      panic!("expected an error for a missing netrc entry");
    };
    assert!(format!("{err:#}").contains("chat.example.com"));
  }
}
