//! # Upload Form
//!
//! The S3 POST-object form: seven policy fields copied from the credentials,
//! then the file part. S3 ignores anything after the file part, so the
//! order here is fixed.

use attache_core::UploadCredentials;
use reqwest::multipart::{Form, Part};

use crate::error::UploadError;

pub const FIELD_KEY: &str = "key";
pub const FIELD_ACL: &str = "acl";
pub const FIELD_ALGORITHM: &str = "X-Amz-Algorithm";
pub const FIELD_SIGNATURE: &str = "X-Amz-Signature";
pub const FIELD_DATE: &str = "X-Amz-Date";
pub const FIELD_CREDENTIAL: &str = "X-Amz-Credential";
pub const FIELD_POLICY: &str = "Policy";

/// Name of the file part
pub const FILE_FIELD: &str = "file";

/// Filename sent with every file part, whatever the original name was
pub const FILE_NAME: &str = "attachment";

/// Owned copy of the policy fields, detached from the credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyFields {
  fields: Vec<(&'static str, String)>,
}

impl PolicyFields {
  pub fn from_credentials(credentials: &UploadCredentials) -> Self {
    let fields = vec![
      (FIELD_KEY, credentials.object_key().to_string()),
      (FIELD_ACL, credentials.acl().to_string()),
      (FIELD_ALGORITHM, credentials.signature_algorithm().to_string()),
      (FIELD_SIGNATURE, credentials.signature().to_string()),
      (FIELD_DATE, credentials.date().to_string()),
      (FIELD_CREDENTIAL, credentials.credential_scope().to_string()),
      (FIELD_POLICY, credentials.encoded_policy().to_string()),
    ];
    Self { fields }
  }

  /// Field names and values in form order
  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
    self.fields.iter().map(|(name, value)| (*name, value.as_str()))
  }

  /// Build the multipart form, appending the file part when there is one
  pub fn into_form(self, file: Option<Part>) -> Form {
    let form = self
      .fields
      .into_iter()
      .fold(Form::new(), |form, (name, value)| form.text(name, value));

    match file {
      Some(part) => form.part(FILE_FIELD, part),
      None => form,
    }
  }
}

/// Wrap upload content in a file part with the fixed filename
pub fn file_part(data: Vec<u8>, mime_type: &str) -> Result<Part, UploadError> {
  Part::bytes(data)
    .file_name(FILE_NAME)
    .mime_str(mime_type)
    .map_err(|_| UploadError::InvalidMimeType(mime_type.to_string()))
}
