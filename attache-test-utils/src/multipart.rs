//! Decoding of multipart/form-data bodies captured by a mock server.

use std::convert::Infallible;

/// One part of a decoded multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
  pub name: String,
  pub file_name: Option<String>,
  pub content_type: Option<String>,
  pub data: Vec<u8>,
}

impl FormPart {
  /// Part data as UTF-8 text
  pub fn text(&self) -> String {
    String::from_utf8_lossy(&self.data).into_owned()
  }
}

/// Decode a multipart/form-data body into its parts, in order.
pub async fn parse_multipart(content_type: &str, body: &[u8]) -> anyhow::Result<Vec<FormPart>> {
  let boundary = multer::parse_boundary(content_type)?;
  let data = body.to_vec();
  let stream = futures::stream::once(async move { Ok::<_, Infallible>(data) });
  let mut multipart = multer::Multipart::new(stream, boundary);

  let mut parts = Vec::new();
  while let Some(field) = multipart.next_field().await? {
    let name = field.name().unwrap_or_default().to_string();
    let file_name = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(ToString::to_string);
    let data = field.bytes().await?.to_vec();

    parts.push(FormPart {
      name,
      file_name,
      content_type,
      data,
    });
  }

  Ok(parts)
}
