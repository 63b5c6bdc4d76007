//! Environment variable management for testing
//!
//! Overrides the XDG config directory with a per-test temporary directory so
//! configuration tests never touch the real user config.

use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

static XDG_LOCK: Mutex<()> = Mutex::new(());

/// A test environment that overrides the XDG config directory to use a per-test
/// temporary directory
pub struct EnvTestGuard {
  /// The temporary directory holding the XDG config directory
  pub temp_dir: TempDir,
  original_config_home: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";

  /// Create a new test environment with an overridden XDG config directory
  pub fn new() -> Self {
    let lock = crate::lock(&XDG_LOCK);
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    let original_config_home = env::var(Self::XDG_CONFIG_HOME).ok();

    let temp_path = temp_dir.path().to_path_buf();
    std::fs::create_dir_all(temp_path.join("config")).expect("Failed to create config directory");

    unsafe {
      env::set_var(Self::XDG_CONFIG_HOME, temp_path.join("config"));
    }

    Self {
      temp_dir,
      original_config_home,
      _lock: lock,
    }
  }

  /// Get the path to the XDG config directory
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }
}

fn restore(name: &str, original: Option<&String>) {
  match original {
    Some(val) => unsafe { env::set_var(name, val) },
    None => unsafe { env::remove_var(name) },
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    restore(Self::XDG_CONFIG_HOME, self.original_config_home.as_ref());
  }
}
