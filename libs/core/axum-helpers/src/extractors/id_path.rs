//! Integer path parameter extractor.

use crate::errors::{AppError, messages};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for integer primary keys in the path.
///
/// Only unsigned decimal digits are accepted. Any other segment means no
/// resource can live there, so it is rejected as 404 rather than 400,
/// matching the router fallback. Digit strings wider than `i64` saturate
/// to `i64::MAX`; the domain decides they name no row.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.body_text()))?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(id = %raw, "Rejected non-integer id");
            return Err(AppError::NotFound(
                messages::NOT_FOUND_RESOURCE.to_string(),
            ));
        }

        Ok(IdPath(raw.parse::<i64>().unwrap_or(i64::MAX)))
    }
}
