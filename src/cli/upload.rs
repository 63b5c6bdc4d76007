//! # Upload Command
//!
//! Fetches fresh credentials and uploads one file or standard input.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use attache_api::CredentialScope;
use attache_api::auth::create_credential_runtime_and_client;
use attache_core::get_config_dirs;
use attache_core::output::{format_path, format_url, print_info, print_success};
use attache_s3::{UploadSource, Uploader};
use clap::Args;
use tracing::info;

use super::{ScopeArg, home_dir};

/// Command for uploading a file
#[derive(Args)]
pub struct UploadArgs {
  /// File to upload, or '-' for standard input
  #[arg(value_name = "PATH")]
  pub path: PathBuf,

  /// Which upload policy to request
  #[arg(long, value_enum, default_value_t = ScopeArg::Private)]
  pub scope: ScopeArg,

  /// MIME type of the content (defaults to `default_mime_type` from the
  /// config file)
  #[arg(long = "mime-type", short = 'm', value_name = "TYPE")]
  pub mime_type: Option<String>,
}

pub(crate) fn handle_upload_command(args: UploadArgs) -> Result<()> {
  let config = get_config_dirs()?.load_config()?;
  let api_host = config.api_host()?;
  let scope = CredentialScope::from(args.scope);
  let mime_type = args.mime_type.unwrap_or(config.default_mime_type);
  let source = read_source(args.path)?;
  let label = match &source {
    UploadSource::File(path) => format_path(&path.display().to_string()),
    _ => "standard input".to_string(),
  };

  let (rt, client) = create_credential_runtime_and_client(&home_dir()?, &api_host)?;

  rt.block_on(async {
    let credentials = client
      .fetch_upload_credentials(scope)
      .await
      .with_context(|| format!("Failed to fetch {scope} upload credentials from {api_host}"))?;
    info!(key = credentials.object_key(), "Uploading {}", label);

    let outcome = Uploader::new()
      .upload_async(source, &mime_type, &credentials)
      .await
      .context("Upload failed")?;

    print_success(&format!("Uploaded {label} as {}", credentials.object_key()));
    if let Some(location) = outcome.location {
      print_info(&format!("Location: {}", format_url(&location)));
    }
    Ok::<_, anyhow::Error>(())
  })
}

/// Resolve the command line path into an upload source.
///
/// `-` reads all of standard input into memory.
fn read_source(path: PathBuf) -> Result<UploadSource> {
  if path.to_str() == Some("-") {
    let mut data = Vec::new();
    std::io::stdin()
      .read_to_end(&mut data)
      .context("Failed to read standard input")?;
    return Ok(UploadSource::Bytes(data));
  }

  if !path.is_file() {
    return Err(anyhow::anyhow!("{} is not a file", path.display()));
  }
  Ok(UploadSource::File(path))
}
