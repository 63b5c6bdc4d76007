//! # Attache Core Library
//!
//! Shared building blocks for the attache upload client: the validated
//! [`UploadCredentials`] record and the policy parser that produces it, plus
//! configuration, `.netrc` credential discovery and terminal output helpers.

pub mod config;
pub mod consts;
pub mod credentials;
pub mod creds;
pub mod output;
pub mod policy;

pub use config::{AttacheConfig, ConfigDirs, get_config_dirs};
pub use credentials::{CredentialFields, CredentialsError, UploadCredentials};
pub use policy::{CredentialParseError, parse_upload_credentials, parse_upload_credentials_str};
