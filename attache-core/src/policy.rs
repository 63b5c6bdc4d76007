//! # Upload Policy Parsing
//!
//! Decodes the form-field document returned by the attachment API into
//! [`UploadCredentials`].
//!
//! The document mirrors the S3 POST-policy layout:
//!
//! ```json
//! {
//!   "options": {
//!     "encoded_policy": "eyJleHBpcmF0aW9uIjoi...",
//!     "key": "uploads/4f1c/attachment",
//!     "signature": "a1b2c3",
//!     "url": "https://bucket.s3.amazonaws.com",
//!     "policy": {
//!       "conditions": [
//!         { "acl": "private" },
//!         { "x-amz-credential": "AKIA/20150101/us-east-1/s3/aws4_request" },
//!         { "x-amz-algorithm": "AWS4-HMAC-SHA256" },
//!         { "x-amz-date": "20150101T000000Z" }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Four values live at the top of `options`; the other four are scattered
//! across the condition list and are found by scanning every key of every
//! object in it. Every condition must be an object. When a condition key
//! repeats, the last occurrence wins, and a last value that is not a string
//! leaves the field unset.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::credentials::{CredentialFields, CredentialsError, UploadCredentials};

/// Condition keys carried inside `policy.conditions`
pub const CONDITION_ACL: &str = "acl";
pub const CONDITION_CREDENTIAL: &str = "x-amz-credential";
pub const CONDITION_ALGORITHM: &str = "x-amz-algorithm";
pub const CONDITION_DATE: &str = "x-amz-date";

/// Errors raised while decoding an upload policy document.
///
/// Every variant means the same thing to callers: no credentials were
/// produced. The variants only exist to make logs useful.
#[derive(Debug, Error)]
pub enum CredentialParseError {
  #[error("malformed upload policy document: {0}")]
  Malformed(#[from] serde_json::Error),

  #[error("upload policy has no conditions")]
  MissingConditions,

  #[error("upload policy is missing `{0}`")]
  MissingField(&'static str),

  #[error("upload policy field `{0}` is empty")]
  EmptyField(&'static str),
}

impl From<CredentialsError> for CredentialParseError {
  fn from(err: CredentialsError) -> Self {
    match err {
      CredentialsError::EmptyField(name) => CredentialParseError::EmptyField(name),
    }
  }
}

#[derive(Debug, Deserialize)]
struct FormFieldsDocument {
  options: FormOptions,
}

#[derive(Debug, Deserialize)]
struct FormOptions {
  encoded_policy: String,
  key: String,
  signature: String,
  url: String,
  policy: PostPolicy,
}

#[derive(Debug, Deserialize)]
struct PostPolicy {
  #[serde(default)]
  conditions: Vec<Map<String, Value>>,
}

/// Values picked out of the condition list
#[derive(Debug, Default)]
struct ScannedConditions {
  acl: Option<String>,
  credential: Option<String>,
  algorithm: Option<String>,
  date: Option<String>,
}

impl ScannedConditions {
  fn scan(conditions: &[Map<String, Value>]) -> Self {
    let mut scanned = Self::default();

    for entry in conditions {
      for (key, value) in entry {
        let slot = match key.as_str() {
          CONDITION_ACL => &mut scanned.acl,
          CONDITION_CREDENTIAL => &mut scanned.credential,
          CONDITION_ALGORITHM => &mut scanned.algorithm,
          CONDITION_DATE => &mut scanned.date,
          _ => continue,
        };
        if let Some(previous) = std::mem::replace(slot, value.as_str().map(str::to_string)) {
          debug!(condition = %key, %previous, "Duplicate policy condition, keeping the later value");
        }
      }
    }

    scanned
  }
}

/// Parse an upload policy document into [`UploadCredentials`].
///
/// Fails if any of the eight required values is missing or empty.
pub fn parse_upload_credentials(raw: &Value) -> Result<UploadCredentials, CredentialParseError> {
  let document = FormFieldsDocument::deserialize(raw)?;
  let options = document.options;

  if options.policy.conditions.is_empty() {
    return Err(CredentialParseError::MissingConditions);
  }

  let scanned = ScannedConditions::scan(&options.policy.conditions);

  let fields = CredentialFields {
    endpoint_url: options.url,
    object_key: options.key,
    acl: scanned.acl.ok_or(CredentialParseError::MissingField(CONDITION_ACL))?,
    signature_algorithm: scanned
      .algorithm
      .ok_or(CredentialParseError::MissingField(CONDITION_ALGORITHM))?,
    signature: options.signature,
    date: scanned.date.ok_or(CredentialParseError::MissingField(CONDITION_DATE))?,
    credential_scope: scanned
      .credential
      .ok_or(CredentialParseError::MissingField(CONDITION_CREDENTIAL))?,
    encoded_policy: options.encoded_policy,
  };

  Ok(UploadCredentials::try_from(fields)?)
}

/// Parse an upload policy document from JSON text
pub fn parse_upload_credentials_str(raw: &str) -> Result<UploadCredentials, CredentialParseError> {
  let value: Value = serde_json::from_str(raw)?;
  parse_upload_credentials(&value)
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn valid_document() -> Value {
    json!({
      "options": {
        "encoded_policy": "cG9saWN5",
        "key": "uploads/k1",
        "signature": "sig1",
        "url": "https://bucket.s3.amazonaws.com",
        "policy": {
          "expiration": "2015-01-01T01:00:00Z",
          "conditions": [
            { "bucket": "bucket" },
            { "acl": "public-read" },
            { "x-amz-credential": "cred1", "x-amz-algorithm": "AWS4-HMAC-SHA256" },
            { "x-amz-date": "20150101T000000Z" }
          ]
        }
      }
    })
  }

  /// Remove `key` from every condition object
  fn without_condition(mut doc: Value, key: &str) -> Value {
    if let Some(conditions) = doc["options"]["policy"]["conditions"].as_array_mut() {
      for entry in conditions.iter_mut().filter_map(Value::as_object_mut) {
        entry.remove(key);
      }
    }
    doc
  }

  #[test]
  fn test_parse_valid_document() {
    let creds = parse_upload_credentials(&valid_document()).unwrap();

    assert_eq!(creds.endpoint_url(), "https://bucket.s3.amazonaws.com");
    assert_eq!(creds.object_key(), "uploads/k1");
    assert_eq!(creds.acl(), "public-read");
    assert_eq!(creds.signature_algorithm(), "AWS4-HMAC-SHA256");
    assert_eq!(creds.signature(), "sig1");
    assert_eq!(creds.date(), "20150101T000000Z");
    assert_eq!(creds.credential_scope(), "cred1");
    assert_eq!(creds.encoded_policy(), "cG9saWN5");
  }

  #[test]
  fn test_parse_from_str() {
    let text = valid_document().to_string();
    let creds = parse_upload_credentials_str(&text).unwrap();
    assert_eq!(creds.object_key(), "uploads/k1");
  }

  #[test]
  fn test_parse_invalid_json_text() {
    let err = parse_upload_credentials_str("{not json").unwrap_err();
    assert!(matches!(err, CredentialParseError::Malformed(_)));
  }

  #[test]
  fn test_missing_any_top_level_field_fails() {
    for field in ["encoded_policy", "key", "signature", "url", "policy"] {
      let mut doc = valid_document();
      doc["options"].as_object_mut().unwrap().remove(field);

      let err = parse_upload_credentials(&doc).unwrap_err();
      assert!(
        matches!(err, CredentialParseError::Malformed(_)),
        "removing `{field}` should fail to decode, got {err:?}"
      );
    }
  }

  #[test]
  fn test_missing_options_fails() {
    let err = parse_upload_credentials(&json!({ "fields": {} })).unwrap_err();
    assert!(matches!(err, CredentialParseError::Malformed(_)));
  }

  #[test]
  fn test_missing_any_condition_fails() {
    for key in [CONDITION_ACL, CONDITION_CREDENTIAL, CONDITION_ALGORITHM, CONDITION_DATE] {
      let doc = without_condition(valid_document(), key);

      let err = parse_upload_credentials(&doc).unwrap_err();
      assert!(
        matches!(err, CredentialParseError::MissingField(name) if name == key),
        "removing `{key}` should report it missing, got {err:?}"
      );
    }
  }

  #[test]
  fn test_empty_top_level_value_fails() {
    let mut doc = valid_document();
    doc["options"]["signature"] = json!("");

    let err = parse_upload_credentials(&doc).unwrap_err();
    assert!(matches!(err, CredentialParseError::EmptyField("signature")));
  }

  #[test]
  fn test_empty_condition_value_fails() {
    let mut doc = valid_document();
    doc["options"]["policy"]["conditions"][1] = json!({ "acl": "" });

    let err = parse_upload_credentials(&doc).unwrap_err();
    assert!(matches!(err, CredentialParseError::EmptyField("acl")));
  }

  #[test]
  fn test_empty_conditions_fails() {
    let mut doc = valid_document();
    doc["options"]["policy"]["conditions"] = json!([]);

    let err = parse_upload_credentials(&doc).unwrap_err();
    assert!(matches!(err, CredentialParseError::MissingConditions));
  }

  #[test]
  fn test_absent_conditions_fails() {
    let mut doc = valid_document();
    doc["options"]["policy"] = json!({ "expiration": "2015-01-01T01:00:00Z" });

    let err = parse_upload_credentials(&doc).unwrap_err();
    assert!(matches!(err, CredentialParseError::MissingConditions));
  }

  #[test]
  fn test_conditions_not_an_array_fails() {
    let mut doc = valid_document();
    doc["options"]["policy"]["conditions"] = json!({ "acl": "private" });

    let err = parse_upload_credentials(&doc).unwrap_err();
    assert!(matches!(err, CredentialParseError::Malformed(_)));
  }

  #[test]
  fn test_duplicate_condition_last_wins() {
    let mut doc = valid_document();
    doc["options"]["policy"]["conditions"]
      .as_array_mut()
      .unwrap()
      .push(json!({ "acl": "private" }));

    let creds = parse_upload_credentials(&doc).unwrap();
    assert_eq!(creds.acl(), "private");
  }

  #[test]
  fn test_array_form_condition_fails() {
    let mut doc = valid_document();
    doc["options"]["policy"]["conditions"]
      .as_array_mut()
      .unwrap()
      .insert(0, json!(["starts-with", "$key", ""]));

    let err = parse_upload_credentials(&doc).unwrap_err();
    assert!(matches!(err, CredentialParseError::Malformed(_)));
  }

  #[test]
  fn test_later_non_string_condition_value_unsets_field() {
    let mut doc = valid_document();
    doc["options"]["policy"]["conditions"]
      .as_array_mut()
      .unwrap()
      .push(json!({ "x-amz-date": 20150101 }));

    let err = parse_upload_credentials(&doc).unwrap_err();
    assert!(matches!(err, CredentialParseError::MissingField(CONDITION_DATE)));
  }

  #[test]
  fn test_later_string_value_replaces_non_string() {
    let mut doc = valid_document();
    let conditions = doc["options"]["policy"]["conditions"].as_array_mut().unwrap();
    conditions.push(json!({ "acl": null }));
    conditions.push(json!({ "acl": "private" }));

    let creds = parse_upload_credentials(&doc).unwrap();
    assert_eq!(creds.acl(), "private");
  }
}
