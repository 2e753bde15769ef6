use log::debug;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;

/// Used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://courses.sqlite3?mode=rwc";

/// Where and how to connect to the backing store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbConfig {
    pub url: String,
    /// Log every SQL statement through `log`
    pub sql_logging: bool,
}

impl DbConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            sql_logging: false,
        }
    }

    /// Reads `DATABASE_URL` and `DATABASE_SQL_LOGGING`, loading `.env` first if present
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let sql_logging = env::var("DATABASE_SQL_LOGGING")
            .is_ok_and(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"));

        Self { url, sql_logging }
    }

    pub fn with_sql_logging(mut self, enabled: bool) -> Self {
        self.sql_logging = enabled;
        self
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}

/// Creates a database connection
pub async fn create_connection(config: &DbConfig) -> Result<DatabaseConnection, DbErr> {
    debug!("Connecting to {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options.sqlx_logging(config.sql_logging);

    Database::connect(options).await
}

#[cfg(test)]
mod test {
    use super::{DEFAULT_DATABASE_URL, DbConfig};
    use std::env;

    #[test]
    fn test_config_defaults() {
        let config = DbConfig::default();
        assert_eq!(config.url, DEFAULT_DATABASE_URL);
        assert!(!config.sql_logging);
        assert!(DbConfig::new("sqlite::memory:").with_sql_logging(true).sql_logging);
    }

    // Every case touching the process environment lives in this one test
    #[test]
    fn test_config_from_env() {
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DATABASE_SQL_LOGGING");
        }
        assert_eq!(DbConfig::from_env(), DbConfig::default());

        unsafe {
            env::set_var("DATABASE_URL", "sqlite://other.sqlite3?mode=rwc");
        }
        assert_eq!(DbConfig::from_env().url, "sqlite://other.sqlite3?mode=rwc");

        for (value, enabled) in [("1", true), ("TRUE", true), ("Yes", true), ("0", false), ("off", false)] {
            unsafe {
                env::set_var("DATABASE_SQL_LOGGING", value);
            }
            assert_eq!(DbConfig::from_env().sql_logging, enabled, "{value}");
        }

        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DATABASE_SQL_LOGGING");
        }
    }
}
