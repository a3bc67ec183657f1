use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::mysql::MysqlConfig;

pub use core_config::Environment;

/// Everything the binary needs, read once at startup and passed down
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: MysqlConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = MysqlConfig::from_env()?; // DATABASE_URL or DB_HOST/DB_USER/DB_NAME
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=5000 by default

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}
