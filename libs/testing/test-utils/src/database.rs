//! Database test infrastructure
//!
//! `TestDatabase::new()` gives every test its own in-memory SQLite database,
//! so the suite runs without Docker. `TestDatabase::mysql()` starts a real
//! MySQL container for tests that need the production engine.
//!
//! Both apply the SQL files under `manifests/migrations/users/<backend>/`.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::path::PathBuf;
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mysql::Mysql;

/// Test database wrapper that ensures proper cleanup
///
/// For MySQL, the container is stopped and removed when this struct is dropped.
pub struct TestDatabase {
    #[allow(dead_code)]
    container: Option<ContainerAsync<Mysql>>,
    pub connection: DatabaseConnection,
    pub connection_string: String,
}

impl TestDatabase {
    /// Fresh in-memory SQLite database with the users table created
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection_string = "sqlite::memory:".to_string();

        // Every pooled connection to `sqlite::memory:` would open its own
        // empty database, so the pool is pinned to a single connection.
        let mut options = ConnectOptions::new(&connection_string);
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to open in-memory SQLite database");

        Self::run_migrations(&connection, "sqlite").await;

        Self {
            container: None,
            connection,
            connection_string,
        }
    }

    /// Start a MySQL 8 container and create the users table in it
    ///
    /// Requires a running Docker daemon.
    pub async fn mysql() -> Self {
        let container = Mysql::default()
            .start()
            .await
            .expect("Failed to start MySQL container");

        let host_port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get host port");

        let connection_string = format!("mysql://root@127.0.0.1:{}/test", host_port);

        let connection = Database::connect(&connection_string)
            .await
            .expect("Failed to connect to test database");

        Self::run_migrations(&connection, "mysql").await;

        tracing::info!(port = host_port, "Test database ready (MySQL)");

        Self {
            container: Some(container),
            connection,
            connection_string,
        }
    }

    /// Get a clone of the database connection
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Find the workspace root by looking for Cargo.toml with [workspace]
    fn find_workspace_root() -> PathBuf {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        manifest_dir
            .ancestors()
            .find(|p| {
                std::fs::read_to_string(p.join("Cargo.toml"))
                    .map(|c| c.contains("[workspace]"))
                    .unwrap_or(false)
            })
            .unwrap_or(&manifest_dir)
            .to_path_buf()
    }

    async fn run_migrations(connection: &DatabaseConnection, backend: &str) {
        let migrations_dir = Self::find_workspace_root()
            .join("manifests/migrations/users")
            .join(backend);

        let mut migrations: Vec<_> = std::fs::read_dir(&migrations_dir)
            .unwrap_or_else(|_| panic!("Failed to read migrations directory {:?}", migrations_dir))
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "sql").unwrap_or(false))
            .collect();

        migrations.sort();

        for path in migrations {
            let sql = std::fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Failed to read migration: {:?}", path));

            tracing::debug!("Running migration: {:?}", path.file_name());

            for statement in sql.split(';') {
                let is_comment_only = statement.lines().all(|line| {
                    let trimmed = line.trim();
                    trimmed.is_empty() || trimmed.starts_with("--")
                });
                if is_comment_only {
                    continue;
                }
                connection
                    .execute_unprepared(statement.trim())
                    .await
                    .unwrap_or_else(|e| panic!("Migration {:?} failed: {}", path, e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sqlite_database_has_users_table() {
        let db = TestDatabase::new().await;
        db.connection
            .execute_unprepared("INSERT INTO users (name, email) VALUES ('a', 'a@x.com')")
            .await
            .unwrap();

        let dup = db
            .connection
            .execute_unprepared("INSERT INTO users (name, email) VALUES ('b', 'a@x.com')")
            .await;
        assert!(dup.is_err(), "email must be unique");
    }

    #[tokio::test]
    async fn test_databases_are_isolated() {
        let first = TestDatabase::new().await;
        first
            .connection
            .execute_unprepared("INSERT INTO users (name, email) VALUES ('a', 'a@x.com')")
            .await
            .unwrap();

        let second = TestDatabase::new().await;
        second
            .connection
            .execute_unprepared("INSERT INTO users (name, email) VALUES ('a', 'a@x.com')")
            .await
            .unwrap();
    }
}
