//! # Configuration Management
//!
//! Handles configuration directories and the `config.toml` settings file,
//! including XDG base directory support and the API host override.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::consts::{APP_NAME, APP_ORGANIZATION, CONFIG_FILE_NAME, DEFAULT_MIME_TYPE, ENV_API_HOST};

/// Represents the configuration directories for attache
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs =
      ProjectDirs::from(APP_ORGANIZATION, "", APP_NAME).context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the path to the settings file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }

  /// Load the settings file, falling back to defaults when it does not exist
  pub fn load_config(&self) -> Result<AttacheConfig> {
    let config_path = self.config_path();

    if !config_path.exists() {
      return Ok(AttacheConfig::default());
    }

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", config_path.display()))
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

/// User settings stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttacheConfig {
  /// Base URL of the chat backend API
  pub api_host: Option<String>,
  /// MIME type sent with uploads when none is given on the command line
  pub default_mime_type: String,
}

impl Default for AttacheConfig {
  fn default() -> Self {
    Self {
      api_host: None,
      default_mime_type: DEFAULT_MIME_TYPE.to_string(),
    }
  }
}

impl AttacheConfig {
  /// Resolve the API base URL.
  ///
  /// `$ATTACHE_API_HOST` takes precedence over the configured `api_host`. A
  /// host without a scheme is assumed to be `https://`.
  pub fn api_host(&self) -> Result<String> {
    let from_env = std::env::var(ENV_API_HOST).ok();
    select_api_host(from_env.as_deref(), self.api_host.as_deref())
  }
}

fn select_api_host(from_env: Option<&str>, configured: Option<&str>) -> Result<String> {
  let host = from_env
    .filter(|host| !host.trim().is_empty())
    .or(configured)
    .ok_or_else(|| anyhow::anyhow!("API host not configured. Set '{ENV_API_HOST}' or `api_host` in the config file"))?;

  ensure_scheme(host)
}

/// Ensure a host URL has a scheme, defaulting to https:// if none is present
pub fn ensure_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  // `Url` reads "localhost:3000" as scheme "localhost", so a URL only counts
  // when it also has a host.
  let url = match Url::parse(trimmed) {
    Ok(url) if url.scheme().len() > 1 && url.host().is_some() => url,
    _ => parse_with_https_prefix(trimmed)?,
  };

  Ok(normalize_url(&url))
}

fn parse_with_https_prefix(input: &str) -> Result<Url> {
  let with_scheme = format!("https://{input}");
  Url::parse(&with_scheme).map_err(|_| anyhow::anyhow!("Failed to parse URL: '{input}'. Ensure it has a valid scheme."))
}

/// Remove trailing slash if it's just the root path
fn normalize_url(url: &Url) -> String {
  let mut result = url.to_string();
  if result.ends_with('/') && url.path() == "/" {
    result.pop();
  }
  result
}

#[cfg(test)]
mod tests {
  use attache_test_utils::EnvTestGuard;

  use super::*;

  #[test]
  fn test_config_dirs_live_under_xdg_override() {
    let env = EnvTestGuard::new();
    let dirs = ConfigDirs::new().unwrap();

    assert!(dirs.config_dir().starts_with(env.temp_dir.path()));
    assert!(dirs.config_path().ends_with(CONFIG_FILE_NAME));
  }

  #[test]
  fn test_load_missing_config_returns_default() {
    let _env = EnvTestGuard::new();
    let dirs = ConfigDirs::new().unwrap();

    let config = dirs.load_config().unwrap();
    assert_eq!(config, AttacheConfig::default());
    assert_eq!(config.default_mime_type, DEFAULT_MIME_TYPE);
  }

  #[test]
  fn test_load_config_file() {
    let _env = EnvTestGuard::new();
    let dirs = ConfigDirs::new().unwrap();
    fs::create_dir_all(dirs.config_dir()).unwrap();
    fs::write(
      dirs.config_path(),
      "api_host = \"chat.example.com\"\ndefault_mime_type = \"image/jpeg\"\n",
    )
    .unwrap();

    let config = dirs.load_config().unwrap();
    assert_eq!(config.api_host.as_deref(), Some("chat.example.com"));
    assert_eq!(config.default_mime_type, "image/jpeg");
  }

  #[test]
  fn test_load_invalid_config_fails() {
    let _env = EnvTestGuard::new();
    let dirs = ConfigDirs::new().unwrap();
    fs::create_dir_all(dirs.config_dir()).unwrap();
    fs::write(dirs.config_path(), "api_host = [").unwrap();

    let err = dirs.load_config().unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
  }

  #[test]
  fn test_partial_config_uses_defaults() {
    let config: AttacheConfig = toml::from_str(r#"api_host = "chat.example.com""#).unwrap();

    assert_eq!(config.api_host.as_deref(), Some("chat.example.com"));
    assert_eq!(config.default_mime_type, DEFAULT_MIME_TYPE);
  }

  #[test]
  fn test_select_api_host_prefers_env() {
    let host = select_api_host(Some("env.example.com"), Some("config.example.com")).unwrap();
    assert_eq!(host, "https://env.example.com");
  }

  #[test]
  fn test_select_api_host_ignores_blank_env() {
    let host = select_api_host(Some("  "), Some("http://config.example.com")).unwrap();
    assert_eq!(host, "http://config.example.com");
  }

  #[test]
  fn test_select_api_host_missing() {
    let err = select_api_host(None, None).unwrap_err();
    assert!(err.to_string().contains(ENV_API_HOST));
  }

  #[test]
  fn test_ensure_scheme_with_https() {
    assert_eq!(ensure_scheme("https://chat.example.com").unwrap(), "https://chat.example.com");
  }

  #[test]
  fn test_ensure_scheme_without_scheme() {
    assert_eq!(ensure_scheme("chat.example.com").unwrap(), "https://chat.example.com");
  }

  #[test]
  fn test_ensure_scheme_host_with_port() {
    assert_eq!(ensure_scheme("localhost:3000").unwrap(), "https://localhost:3000");
  }

  #[test]
  fn test_ensure_scheme_keeps_path() {
    assert_eq!(
      ensure_scheme("https://chat.example.com/backend/").unwrap(),
      "https://chat.example.com/backend/"
    );
  }

  #[test]
  fn test_ensure_scheme_empty_string() {
    let err = ensure_scheme("   ").unwrap_err();
    assert!(err.to_string().contains("Host cannot be empty"));
  }
}
