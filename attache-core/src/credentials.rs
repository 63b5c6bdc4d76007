//! # Upload Credentials
//!
//! The signed, short-lived form fields that authorize a single direct upload
//! to the object store.
//!
//! An [`UploadCredentials`] value is always complete: every field is present
//! and non-empty. The only ways to obtain one are the policy parser in
//! [`crate::policy`] and [`TryFrom<CredentialFields>`], and both reject
//! partial input.

use std::fmt;

use thiserror::Error;

/// Errors produced when assembling [`UploadCredentials`] from raw fields
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
  #[error("upload credential field `{0}` is empty")]
  EmptyField(&'static str),
}

/// Plain, unvalidated credential fields.
///
/// Convert into [`UploadCredentials`] with `try_into()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialFields {
  pub endpoint_url: String,
  pub object_key: String,
  pub acl: String,
  pub signature_algorithm: String,
  pub signature: String,
  pub date: String,
  pub credential_scope: String,
  pub encoded_policy: String,
}

/// Validated upload credentials for one direct-to-storage POST
#[derive(Clone, PartialEq, Eq)]
pub struct UploadCredentials {
  endpoint_url: String,
  object_key: String,
  acl: String,
  signature_algorithm: String,
  signature: String,
  date: String,
  credential_scope: String,
  encoded_policy: String,
}

impl UploadCredentials {
  /// Storage service URL the multipart form is POSTed to
  pub fn endpoint_url(&self) -> &str {
    &self.endpoint_url
  }

  /// Destination object key
  pub fn object_key(&self) -> &str {
    &self.object_key
  }

  /// Canned ACL the policy was signed for
  pub fn acl(&self) -> &str {
    &self.acl
  }

  /// Signing algorithm identifier, e.g. `AWS4-HMAC-SHA256`
  pub fn signature_algorithm(&self) -> &str {
    &self.signature_algorithm
  }

  pub fn signature(&self) -> &str {
    &self.signature
  }

  /// Issuance timestamp token (`x-amz-date`)
  pub fn date(&self) -> &str {
    &self.date
  }

  /// Opaque credential identifier (`x-amz-credential`)
  pub fn credential_scope(&self) -> &str {
    &self.credential_scope
  }

  /// Base64-encoded policy document validated by the storage service
  pub fn encoded_policy(&self) -> &str {
    &self.encoded_policy
  }
}

impl TryFrom<CredentialFields> for UploadCredentials {
  type Error = CredentialsError;

  fn try_from(fields: CredentialFields) -> Result<Self, Self::Error> {
    let checks = [
      ("url", &fields.endpoint_url),
      ("key", &fields.object_key),
      ("acl", &fields.acl),
      ("x-amz-algorithm", &fields.signature_algorithm),
      ("signature", &fields.signature),
      ("x-amz-date", &fields.date),
      ("x-amz-credential", &fields.credential_scope),
      ("encoded_policy", &fields.encoded_policy),
    ];
    if let Some((name, _)) = checks.iter().find(|(_, value)| value.is_empty()) {
      return Err(CredentialsError::EmptyField(name));
    }

    Ok(Self {
      endpoint_url: fields.endpoint_url,
      object_key: fields.object_key,
      acl: fields.acl,
      signature_algorithm: fields.signature_algorithm,
      signature: fields.signature,
      date: fields.date,
      credential_scope: fields.credential_scope,
      encoded_policy: fields.encoded_policy,
    })
  }
}

// Keep signatures and policies out of logs.
impl fmt::Debug for UploadCredentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("UploadCredentials")
      .field("endpoint_url", &self.endpoint_url)
      .field("object_key", &self.object_key)
      .field("acl", &self.acl)
      .field("signature_algorithm", &self.signature_algorithm)
      .field("signature", &"<redacted>")
      .field("date", &self.date)
      .field("credential_scope", &self.credential_scope)
      .field("encoded_policy", &"<redacted>")
      .finish()
  }
}
