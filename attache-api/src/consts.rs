//! Constants for the attache-api client

/// User-Agent header value for the attachment API client
pub const USER_AGENT: &str = concat!("attache/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the attachment API
pub const ACCEPT: &str = "application/json";

/// Form fields for private uploads (chat attachments)
pub const PRIVATE_FORM_FIELDS_PATH: &str = "/api/v1/attachments/s3_upload_form_fields";

/// Form fields for public uploads (avatars)
pub const PUBLIC_FORM_FIELDS_PATH: &str = "/api/v1/attachments/s3_upload_public_form_fields";
