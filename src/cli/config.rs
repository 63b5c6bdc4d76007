//! # Config Command
//!
//! Shows where attache reads its settings from and whether an API login is
//! available.

use anyhow::Result;
use attache_core::consts::ENV_API_HOST;
use attache_core::creds::{check_api_credentials, get_netrc_path, machine_for_host};
use attache_core::get_config_dirs;
use attache_core::output::{format_command, format_path, format_url, print_field, print_success, print_warning};

use super::home_dir;

pub(crate) fn handle_config_command() -> Result<()> {
  let config_dirs = get_config_dirs()?;
  let config = config_dirs.load_config()?;

  print_field("config file", &format_path(&config_dirs.config_path().display().to_string()));
  print_field("mime type", &config.default_mime_type);

  let api_host = match config.api_host() {
    Ok(host) => host,
    Err(e) => {
      print_warning(&format!("{e}"));
      println!(
        "Set it with {} or add `api_host` to the config file.",
        format_command(&format!("export {ENV_API_HOST}=chat.example.com"))
      );
      return Ok(());
    }
  };
  print_field("api host", &format_url(&api_host));

  let home = home_dir()?;
  let machine = machine_for_host(&api_host)?;
  if check_api_credentials(&home, &api_host)? {
    print_success(&format!("API credentials found for '{machine}'."));
  } else {
    print_warning(&format!(
      "No API credentials for '{machine}' in {}.",
      format_path(&get_netrc_path(&home).display().to_string())
    ));
  }

  Ok(())
}
