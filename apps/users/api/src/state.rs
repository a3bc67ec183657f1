//! Shared application state.

/// Cloned into the readiness handler and the shutdown cleanup.
///
/// `db` is a connection pool; clones share it.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::mysql::DatabaseConnection,
}
