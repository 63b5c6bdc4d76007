//! # Credentials Command
//!
//! Fetches a signed upload policy and prints its form fields.

use anyhow::{Context, Result};
use attache_api::CredentialScope;
use attache_api::auth::create_credential_runtime_and_client;
use attache_core::UploadCredentials;
use attache_core::get_config_dirs;
use attache_core::output::{format_url, print_field, print_success, redact};
use clap::Args;

use super::{ScopeArg, home_dir};

/// Command for fetching upload credentials
#[derive(Args)]
pub struct CredentialsArgs {
  /// Which upload policy to request
  #[arg(long, value_enum, default_value_t = ScopeArg::Private)]
  pub scope: ScopeArg,
}

pub(crate) fn handle_credentials_command(args: CredentialsArgs) -> Result<()> {
  let config = get_config_dirs()?.load_config()?;
  let api_host = config.api_host()?;
  let scope = CredentialScope::from(args.scope);

  let (rt, client) = create_credential_runtime_and_client(&home_dir()?, &api_host)?;
  let credentials = rt
    .block_on(client.fetch_upload_credentials(scope))
    .with_context(|| format!("Failed to fetch {scope} upload credentials from {api_host}"))?;

  print_success(&format!("Fetched {scope} upload credentials"));
  print_credentials(&credentials);
  Ok(())
}

fn print_credentials(credentials: &UploadCredentials) {
  print_field("url", &format_url(credentials.endpoint_url()));
  print_field("key", credentials.object_key());
  print_field("acl", credentials.acl());
  print_field("algorithm", credentials.signature_algorithm());
  print_field("credential", credentials.credential_scope());
  print_field("date", credentials.date());
  print_field("signature", &redact(credentials.signature()));
  print_field("policy", &redact(credentials.encoded_policy()));
}
