//! # S3 Form Uploads
//!
//! Uploads a file or an in-memory buffer straight to S3-compatible storage
//! with a browser-style POST-object form, using the short-lived credentials
//! issued by the attachment API.

pub mod error;
pub mod form;
pub mod source;
pub mod uploader;

pub use error::UploadError;
pub use source::UploadSource;
pub use uploader::{UploadOutcome, UploadState, Uploader};
