use std::env;
use std::fmt;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

const MONGO_USER: &str = "MONGO_USER";
const MONGO_PASS: &str = "MONGO_PASS";
const MONGO_HOST: &str = "MONGO_HOST";
const MONGO_DB_NAME: &str = "MONGO_DB_NAME";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variables are missing: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid PORT value `{0}`")]
    InvalidPort(String),
}

/// # MongoDB Atlas Credentials
///
/// The four values injected by the deployment's secret layer. All of them
/// must be present (and non-blank) for a connection attempt to be made.
#[derive(Clone, PartialEq, Eq)]
pub struct MongoConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub db_name: String,
}

impl MongoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, reporting every
    /// missing key at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let config = Self {
            user: require(MONGO_USER),
            password: require(MONGO_PASS),
            host: require(MONGO_HOST),
            db_name: require(MONGO_DB_NAME),
        };

        if missing.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Missing(missing))
        }
    }

    /// Label reported to clients as the origin of a status message.
    pub fn source_label(&self) -> String {
        format!("MongoDB Atlas Cluster ({})", self.db_name)
    }
}

impl fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("db_name", &self.db_name)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| {
            info!("HOST not set, using default: {DEFAULT_HOST}");
            DEFAULT_HOST.to_string()
        });

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => {
                info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Ok(Self { host, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![
            ("MONGO_USER", "zomota"),
            ("MONGO_PASS", "s3cr3t/p@ss"),
            ("MONGO_HOST", "cluster0.abcde.mongodb.net"),
            ("MONGO_DB_NAME", "zomota_db"),
        ]
    }

    #[test]
    fn test_mongo_config_complete() {
        let config = MongoConfig::from_lookup(lookup_from(&full_env())).unwrap();

        assert_eq!(config.user, "zomota");
        assert_eq!(config.password, "s3cr3t/p@ss");
        assert_eq!(config.host, "cluster0.abcde.mongodb.net");
        assert_eq!(config.db_name, "zomota_db");
    }

    #[test]
    fn test_mongo_config_all_missing() {
        let err = MongoConfig::from_lookup(lookup_from(&[])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Missing(vec![
                "MONGO_USER",
                "MONGO_PASS",
                "MONGO_HOST",
                "MONGO_DB_NAME"
            ])
        );
    }

    #[test]
    fn test_mongo_config_blank_value_counts_as_missing() {
        let mut env = full_env();
        env[1] = ("MONGO_PASS", "   ");

        let err = MongoConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec!["MONGO_PASS"]));
        assert!(err.to_string().contains("MONGO_PASS"));
    }

    #[test]
    fn test_source_label_names_database() {
        let config = MongoConfig::from_lookup(lookup_from(&full_env())).unwrap();
        assert_eq!(config.source_label(), "MongoDB Atlas Cluster (zomota_db)");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = MongoConfig::from_lookup(lookup_from(&full_env())).unwrap();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_server_config_overrides() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "8080")]))
                .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_server_config_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".to_string()));
    }
}
