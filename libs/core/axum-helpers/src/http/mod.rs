//! HTTP layers shared by every service.

pub mod cors;

pub use cors::create_permissive_cors_layer;
