//! # Attache
//!
//! Command line front end for the attache upload workflow. The heavy lifting
//! lives in `attache-core` (credential model and policy parsing),
//! `attache-api` (credential endpoints) and `attache-s3` (form uploads).

pub mod cli;
