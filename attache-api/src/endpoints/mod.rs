//! # Attachment API Endpoints

pub mod upload_form;
