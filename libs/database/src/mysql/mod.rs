//! MySQL database connector and utilities
//!
//! Provides pooled connection management and health checks for the MySQL
//! database that backs the users table.

mod config;
mod connector;
mod health;

pub use config::MysqlConfig;
pub use connector::{close, connect, connect_from_config, connect_with_options};
pub use health::{check_health, check_health_detailed, HealthStatus};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
