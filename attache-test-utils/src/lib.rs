//! Test utilities shared across the attache workspace
//!
//! This crate provides common testing infrastructure including:
//! - XDG directory isolation ([`EnvTestGuard`])
//! - HOME and `.netrc` isolation ([`NetrcGuard`])
//! - Upload policy documents shaped like the attachment API's responses
//!   ([`fixtures`])
//! - Decoding of captured multipart bodies ([`parse_multipart`])
//!
//! The dead_code lint is disabled for this crate because test utilities may
//! not be used by all tests, and the compiler cannot detect usage across crate
//! boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod multipart;
pub mod netrc;

use std::sync::{Mutex, MutexGuard};

pub use env::EnvTestGuard;
pub use fixtures::{sample_policy_document, sample_upload_file};
pub use multipart::{FormPart, parse_multipart};
pub use netrc::NetrcGuard;

/// Serializes tests that rewrite the same process environment variables.
fn lock(mutex: &'static Mutex<()>) -> MutexGuard<'static, ()> {
  mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
