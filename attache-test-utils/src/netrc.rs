use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

static HOME_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard for test .netrc files
///
/// Creates a temporary home directory holding a `.netrc` with the given
/// content, points `HOME` at it, and restores the original `HOME` when
/// dropped.
pub struct NetrcGuard {
  temp_dir: TempDir,
  netrc_path: PathBuf,
  original_home: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl NetrcGuard {
  /// Create a new NetrcGuard with the given content
  pub fn new(content: &str) -> Self {
    let lock = crate::lock(&HOME_LOCK);
    let original_home = env::var("HOME").ok();

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");
    fs::write(&netrc_path, content).expect("Failed to write test .netrc");

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      fs::set_permissions(&netrc_path, fs::Permissions::from_mode(0o600)).expect("Failed to secure test .netrc");
    }

    unsafe {
      env::set_var("HOME", temp_dir.path());
    }

    Self {
      temp_dir,
      netrc_path,
      original_home,
      _lock: lock,
    }
  }

  /// Get the path to the .netrc file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Get the path to the temporary home directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}

impl Drop for NetrcGuard {
  fn drop(&mut self) {
    match &self.original_home {
      Some(home) => unsafe { env::set_var("HOME", home) },
      None => unsafe { env::remove_var("HOME") },
    }
  }
}
