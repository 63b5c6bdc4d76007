//! Canned upload policy documents and upload payloads.

use std::io::Write;

use serde_json::{Value, json};
use tempfile::NamedTempFile;

/// A form-field document as returned by the attachment API.
///
/// `url` is substituted so tests can point uploads at a mock server.
pub fn sample_policy_document(url: &str) -> Value {
  json!({
    "options": {
      "encoded_policy": "cG9saWN5",
      "key": "k1",
      "signature": "sig1",
      "url": url,
      "policy": {
        "expiration": "2015-01-01T01:00:00Z",
        "conditions": [
          { "bucket": "bucket" },
          { "acl": "public-read" },
          { "x-amz-credential": "cred1" },
          { "x-amz-algorithm": "AWS4-HMAC-SHA256" },
          { "x-amz-date": "20150101T000000Z" }
        ]
      }
    }
  })
}

/// Write `content` to a fresh temporary file
pub fn sample_upload_file(content: &[u8]) -> anyhow::Result<NamedTempFile> {
  let mut file = NamedTempFile::new()?;
  file.write_all(content)?;
  file.flush()?;
  Ok(file)
}
