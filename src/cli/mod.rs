//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for attache.

mod config;
mod credentials;
mod upload;

use std::path::PathBuf;

use anyhow::{Context, Result};
use attache_api::CredentialScope;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use directories::BaseDirs;

pub use self::credentials::CredentialsArgs;
pub use self::upload::UploadArgs;

/// Top-level CLI command for attache
#[derive(Parser)]
#[command(name = "attache")]
#[command(about = "Upload chat attachments straight to object storage")]
#[command(
  long_about = "Attache asks the chat backend for a short-lived, signed upload policy and\n\
        then POSTs the file directly to the S3-compatible bucket named in it.\n\n\
        API logins are read from your .netrc, keyed by the API host name."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(long, value_enum, ignore_case = true, global = true, default_value_t = ColorMode::Auto)]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for attache
#[derive(Subcommand)]
pub enum Commands {
  /// Fetch upload credentials and show them
  #[command(long_about = "Requests a signed upload policy from the attachment API and prints the\n\
            resulting form fields. Signatures and policies are shortened.")]
  #[command(alias = "creds")]
  Credentials(CredentialsArgs),

  /// Upload a file
  #[command(long_about = "Fetches fresh upload credentials and POSTs the file to object storage.\n\n\
            Pass '-' as the path to upload data read from standard input.")]
  #[command(alias = "up")]
  Upload(UploadArgs),

  /// Show the resolved configuration
  Config,
}

/// Enum representing different color modes for output
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Always,
  /// Detect terminal support
  Auto,
  /// Disable colored output
  Never,
}

/// Credential scope as given on the command line
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScopeArg {
  /// Chat attachments
  #[default]
  Private,
  /// Avatars and other public objects
  Public,
}

impl From<ScopeArg> for CredentialScope {
  fn from(scope: ScopeArg) -> Self {
    match scope {
      ScopeArg::Private => CredentialScope::Private,
      ScopeArg::Public => CredentialScope::Public,
    }
  }
}

/// Handle the parsed command line
pub fn handle_cli(cli: Cli) -> Result<()> {
  match cli.colors {
    ColorMode::Always => owo_colors::set_override(true),
    ColorMode::Never => owo_colors::set_override(false),
    ColorMode::Auto => {}
  }

  match cli.command {
    Commands::Credentials(args) => credentials::handle_credentials_command(args),
    Commands::Upload(args) => upload::handle_upload_command(args),
    Commands::Config => config::handle_config_command(),
  }
}

/// The user's home directory, where `.netrc` lives
pub(crate) fn home_dir() -> Result<PathBuf> {
  let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
  Ok(base_dirs.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_upload_defaults() {
    let cli = Cli::try_parse_from(["attache", "upload", "cat.png"]).unwrap();

    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.colors, ColorMode::Auto);
    let Commands::Upload(args) = cli.command else {
      panic!("expected upload command");
    };
    assert_eq!(args.path, PathBuf::from("cat.png"));
    assert_eq!(args.scope, ScopeArg::Private);
    assert!(args.mime_type.is_none());
  }

  #[test]
  fn test_parse_upload_public_with_mime_type() {
    let cli = Cli::try_parse_from([
      "attache",
      "-vv",
      "up",
      "--scope",
      "public",
      "--mime-type",
      "image/png",
      "avatar.png",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    let Commands::Upload(args) = cli.command else {
      panic!("expected upload command");
    };
    assert_eq!(args.scope, ScopeArg::Public);
    assert_eq!(args.mime_type.as_deref(), Some("image/png"));
  }

  #[test]
  fn test_parse_credentials_alias() {
    let cli = Cli::try_parse_from(["attache", "creds", "--scope", "public", "--colors", "never"]).unwrap();

    assert_eq!(cli.colors, ColorMode::Never);
    let Commands::Credentials(args) = cli.command else {
      panic!("expected credentials command");
    };
    assert_eq!(CredentialScope::from(args.scope), CredentialScope::Public);
  }

  #[test]
  fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["attache"]).is_err());
  }
}
