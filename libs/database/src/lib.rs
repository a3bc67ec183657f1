//! Database library providing the MySQL connector used by the users service
//!
//! # Features
//!
//! - `mysql` (default) - MySQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mysql::{self, MysqlConfig};
//! use core_config::FromEnv;
//!
//! let config = MysqlConfig::from_env()?;
//! let db = mysql::connect_from_config(config).await?;
//! mysql::check_health(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "mysql")]
pub mod mysql;

pub use common::{DatabaseError, DatabaseResult};
