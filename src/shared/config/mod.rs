//! Application configuration module
//!
//! All process-wide settings (secret key, environment flag, cookie domain,
//! database location) are gathered into one `AppConfig` at startup and then
//! handed to the components that need them. Nothing else reads the
//! environment.
//!
//! # Sources
//!
//! 1. Optional TOML file named by `BITFILMS_CONFIG`
//! 2. Environment variables (override the file)
//! 3. Development defaults
//!
//! | Variable | Default (development) |
//! |---|---|
//! | `APP_ENV` | `development` |
//! | `JWT_SECRET` | `dev-secret` (required in production) |
//! | `DATABASE_URL` | `sqlite://bitfilms.db?mode=rwc` (required in production) |
//! | `PORT` | `3001` |
//! | `COOKIE_DOMAIN` | `.nomoreparties.sbs` |
//! | `BCRYPT_COST` | `10` |
//! | `CORS_ORIGINS` | `http://localhost:3000` |

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const DEV_JWT_SECRET: &str = "dev-secret";
pub const DEV_DATABASE_URL: &str = "sqlite://bitfilms.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_COOKIE_DOMAIN: &str = ".nomoreparties.sbs";
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" | "" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue {
                key: "APP_ENV",
                value: other.to_string(),
            }),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// sqlx connection string
    pub database_url: String,
    /// Listen port
    pub port: u16,
    /// Cookie `Domain` attribute, applied in production only
    pub cookie_domain: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Origins allowed to make credentialed cross-site requests
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            database_url: DEV_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            cookie_domain: DEFAULT_COOKIE_DOMAIN.to_string(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from `BITFILMS_CONFIG` (if set) and the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = match std::env::var("BITFILMS_CONFIG") {
            Ok(path) => AppConfigBuilder::from_file(path)?,
            Err(_) => AppConfigBuilder::default(),
        };
        builder = builder.apply_env(|key| std::env::var(key).ok())?;
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.database_url.is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        // Credentialed CORS cannot use a wildcard origin
        if let Some(origin) = self.cors_origins.iter().find(|origin| origin.as_str() == "*") {
            return Err(ConfigError::InvalidValue {
                key: "CORS_ORIGINS",
                value: origin.clone(),
            });
        }
        Ok(())
    }
}

/// Shape of the optional TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    environment: Option<Environment>,
    jwt_secret: Option<String>,
    database_url: Option<String>,
    port: Option<u16>,
    cookie_domain: Option<String>,
    bcrypt_cost: Option<u32>,
    cors_origins: Option<Vec<String>>,
}

/// Builder for AppConfig
///
/// Unset secrets and database URLs fall back to development defaults only when
/// the environment is development.
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    environment: Environment,
    jwt_secret: Option<String>,
    database_url: Option<String>,
    port: Option<u16>,
    cookie_domain: Option<String>,
    bcrypt_cost: Option<u32>,
    cors_origins: Option<Vec<String>>,
}

impl AppConfigBuilder {
    /// Start from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Start from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(Self {
            environment: file.environment.unwrap_or_default(),
            jwt_secret: file.jwt_secret,
            database_url: file.database_url,
            port: file.port,
            cookie_domain: file.cookie_domain,
            bcrypt_cost: file.bcrypt_cost,
            cors_origins: file.cors_origins,
        })
    }

    /// Override values from a variable lookup (normally `std::env::var`)
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("APP_ENV") {
            self.environment = Environment::parse(&value)?;
        }
        if let Some(value) = lookup("JWT_SECRET") {
            self.jwt_secret = Some(value);
        }
        if let Some(value) = lookup("DATABASE_URL") {
            self.database_url = Some(value);
        }
        if let Some(value) = lookup("PORT") {
            let port = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: value.clone(),
            })?;
            self.port = Some(port);
        }
        if let Some(value) = lookup("COOKIE_DOMAIN") {
            self.cookie_domain = Some(value);
        }
        if let Some(value) = lookup("BCRYPT_COST") {
            let cost = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: value.clone(),
            })?;
            self.bcrypt_cost = Some(cost);
        }
        if let Some(value) = lookup("CORS_ORIGINS") {
            self.cors_origins = Some(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect(),
            );
        }
        Ok(self)
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn cookie_domain(mut self, domain: impl Into<String>) -> Self {
        self.cookie_domain = Some(domain.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let production = self.environment.is_production();

        let jwt_secret = match self.jwt_secret {
            Some(secret) => secret,
            None if production => return Err(ConfigError::MissingValue("JWT_SECRET")),
            None => DEV_JWT_SECRET.to_string(),
        };
        let database_url = match self.database_url {
            Some(url) => url,
            None if production => return Err(ConfigError::MissingValue("DATABASE_URL")),
            None => DEV_DATABASE_URL.to_string(),
        };

        let config = AppConfig {
            environment: self.environment,
            jwt_secret,
            database_url,
            port: self.port.unwrap_or(DEFAULT_PORT),
            cookie_domain: self
                .cookie_domain
                .unwrap_or_else(|| DEFAULT_COOKIE_DOMAIN.to_string()),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            cors_origins: self
                .cors_origins
                .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
