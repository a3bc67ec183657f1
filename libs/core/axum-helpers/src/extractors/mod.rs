//! Custom extractors for Axum handlers.
//!
//! These wrap axum's built-in extractors so rejections render through
//! [`AppError`](crate::errors::AppError) with the standard error body.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
