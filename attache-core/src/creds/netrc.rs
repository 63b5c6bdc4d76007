//! Helpers for reading credentials stored in `.netrc` files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use attache_core::creds::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Returns `Ok(None)` when the machine entry is missing or lacks a `login` or
/// `password`.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let content = fs::read_to_string(path).context("Failed to read .netrc file")?;
  Ok(parse_netrc(&content, target_machine))
}

/// Parses `.netrc` content.
///
/// Entries may be written on one line (`machine host login user password pw`)
/// or spread over several. Lines starting with `#` are ignored.
pub fn parse_netrc(content: &str, target_machine: &str) -> Option<Credentials> {
  let mut tokens = content
    .lines()
    .filter(|line| !line.trim_start().starts_with('#'))
    .flat_map(str::split_whitespace);

  let mut in_target = false;
  let mut username = None;
  let mut password = None;

  while let Some(token) = tokens.next() {
    match token {
      "machine" => {
        if in_target {
          break;
        }
        in_target = tokens.next() == Some(target_machine);
      }
      "default" => {
        if in_target {
          break;
        }
      }
      "login" => {
        let value = tokens.next();
        if in_target {
          username = value.map(str::to_string);
        }
      }
      "password" => {
        let value = tokens.next();
        if in_target {
          password = value.map(str::to_string);
        }
      }
      _ => {}
    }
  }

  match (username, password) {
    (Some(username), Some(password)) => Some(Credentials { username, password }),
    _ => None,
  }
}
