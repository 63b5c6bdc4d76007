//! # Attachment API Client
//!
//! Fetches short-lived, policy-signed upload credentials from the chat
//! backend. Private credentials cover chat attachments; public credentials
//! cover avatars.

pub mod auth;
pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod failure;
pub mod models;

pub use client::{CredentialClient, create_credential_client};
pub use error::CredentialFetchError;
pub use failure::{FailureHandler, FailureReason, LoggingFailureHandler};
pub use models::{ApiAuth, CredentialScope};
