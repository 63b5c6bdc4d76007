use std::path::PathBuf;

/// Content to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
  /// Read from a file when the upload starts
  File(PathBuf),
  /// Upload an in-memory buffer
  Bytes(Vec<u8>),
  /// No content; the request is sent without a file part
  Empty,
}

impl UploadSource {
  /// Build a source from an optional path and an optional buffer.
  ///
  /// The path wins when both are given; neither yields [`UploadSource::Empty`].
  pub fn from_parts(path: Option<PathBuf>, data: Option<Vec<u8>>) -> Self {
    match (path, data) {
      (Some(path), _) => UploadSource::File(path),
      (None, Some(data)) => UploadSource::Bytes(data),
      (None, None) => UploadSource::Empty,
    }
  }

  pub const fn is_empty(&self) -> bool {
    matches!(self, UploadSource::Empty)
  }
}

impl From<PathBuf> for UploadSource {
  fn from(path: PathBuf) -> Self {
    UploadSource::File(path)
  }
}

impl From<Vec<u8>> for UploadSource {
  fn from(data: Vec<u8>) -> Self {
    UploadSource::Bytes(data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_parts_prefers_path() {
    let source = UploadSource::from_parts(Some(PathBuf::from("/tmp/a.png")), Some(vec![1, 2, 3]));
    assert_eq!(source, UploadSource::File(PathBuf::from("/tmp/a.png")));
  }

  #[test]
  fn test_from_parts_bytes_only() {
    let source = UploadSource::from_parts(None, Some(vec![1, 2, 3]));
    assert_eq!(source, UploadSource::Bytes(vec![1, 2, 3]));
  }

  #[test]
  fn test_from_parts_neither() {
    let source = UploadSource::from_parts(None, None);
    assert!(source.is_empty());
  }
}
