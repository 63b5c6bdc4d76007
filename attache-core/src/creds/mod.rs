//! # Credential Management
//!
//! Discovery of the API login used to authenticate against the chat backend.
//! Logins are read from the user's `.netrc`, keyed by the API host name.

pub mod netrc;

use std::path::Path;

use anyhow::{Context, Result};
use url::Url;

pub use self::netrc::{get_netrc_path, parse_netrc_file};

/// Represents credentials for a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Extract the `.netrc` machine name from an API base URL
pub fn machine_for_host(api_host: &str) -> Result<String> {
  let url = Url::parse(api_host).with_context(|| format!("Invalid API host '{api_host}'"))?;
  url
    .host_str()
    .map(str::to_string)
    .ok_or_else(|| anyhow::anyhow!("API host '{api_host}' has no host name"))
}

/// Check if API credentials are available for the given host.
pub fn check_api_credentials(home: &Path, api_host: &str) -> Result<bool> {
  let machine = machine_for_host(api_host)?;
  let netrc_path = get_netrc_path(home);
  if !netrc_path.exists() {
    return Ok(false);
  }
  Ok(parse_netrc_file(&netrc_path, &machine)?.is_some())
}

/// Load API credentials for the given host from `.netrc`.
pub fn get_api_credentials(home: &Path, api_host: &str) -> Result<Credentials> {
  let machine = machine_for_host(api_host)?;
  let netrc_path = get_netrc_path(home);

  if !netrc_path.exists() {
    return Err(anyhow::anyhow!(
      "No .netrc file found at {}. Add credentials for machine '{machine}'.",
      netrc_path.display()
    ));
  }

  parse_netrc_file(&netrc_path, &machine)?.ok_or_else(|| {
    anyhow::anyhow!("API credentials not found in .netrc file. Please add credentials for machine '{machine}'.")
  })
}
