//! Configuration module for the roster backend.
//!
//! All configuration is loaded from environment variables. Everything has a
//! default except the MongoDB connection string, which is required.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string (required)
    pub mongo_uri: String,
    /// MongoDB database name
    pub db_name: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Directory with static assets and the landing page
    pub static_dir: PathBuf,
    /// Base URL of the public-holiday source
    pub holiday_api_base: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails if `ROSTER_MONGO_URI` is unset; the process must not start
    /// serving without a database to connect to.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let mongo_uri = env::var("ROSTER_MONGO_URI")
            .map_err(|_| "ROSTER_MONGO_URI must be set to a MongoDB connection string".to_string())?;

        let db_name = env::var("ROSTER_DB_NAME").unwrap_or_else(|_| "roster".to_string());

        let bind_addr = env::var("ROSTER_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|_| "Invalid ROSTER_BIND_ADDR format".to_string())?;

        let static_dir = env::var("ROSTER_STATIC_DIR")
            .unwrap_or_else(|_| "./public".to_string())
            .into();

        let holiday_api_base = env::var("ROSTER_HOLIDAY_API_BASE")
            .unwrap_or_else(|_| "https://date.nager.at/api/v3".to_string());

        let log_level = env::var("ROSTER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            mongo_uri,
            db_name,
            bind_addr,
            static_dir,
            holiday_api_base,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::remove_var("ROSTER_DB_NAME");
        env::remove_var("ROSTER_BIND_ADDR");
        env::remove_var("ROSTER_STATIC_DIR");
        env::remove_var("ROSTER_HOLIDAY_API_BASE");
        env::remove_var("ROSTER_LOG_LEVEL");

        // Missing connection string is a hard error
        env::remove_var("ROSTER_MONGO_URI");
        assert!(Config::from_env().is_err());

        env::set_var("ROSTER_MONGO_URI", "mongodb://localhost:27017");
        let config = Config::from_env().expect("config should load");

        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(config.db_name, "roster");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, PathBuf::from("./public"));
        assert_eq!(config.holiday_api_base, "https://date.nager.at/api/v3");
        assert_eq!(config.log_level, "info");
    }
}
