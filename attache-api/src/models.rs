use std::fmt;

use crate::consts::{PRIVATE_FORM_FIELDS_PATH, PUBLIC_FORM_FIELDS_PATH};

/// Represents attachment API authentication credentials
#[derive(Clone)]
pub struct ApiAuth {
  pub username: String,
  pub token: String,
}

/// Which upload policy to request from the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialScope {
  /// Chat attachments, readable only through the backend
  #[default]
  Private,
  /// Avatars and other publicly readable objects
  Public,
}

impl CredentialScope {
  /// Path of the form-field endpoint for this scope
  pub const fn path(self) -> &'static str {
    match self {
      CredentialScope::Private => PRIVATE_FORM_FIELDS_PATH,
      CredentialScope::Public => PUBLIC_FORM_FIELDS_PATH,
    }
  }
}

impl fmt::Display for CredentialScope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CredentialScope::Private => write!(f, "private"),
      CredentialScope::Public => write!(f, "public"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_scope_paths() {
    assert_eq!(
      CredentialScope::Private.path(),
      "/api/v1/attachments/s3_upload_form_fields"
    );
    assert_eq!(
      CredentialScope::Public.path(),
      "/api/v1/attachments/s3_upload_public_form_fields"
    );
  }

  #[test]
  fn test_scope_display() {
    assert_eq!(CredentialScope::Public.to_string(), "public");
    assert_eq!(CredentialScope::Private.to_string(), "private");
    assert_eq!(CredentialScope::default(), CredentialScope::Private);
  }
}
