use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "dogs-aggregator/0.1";

/// Settings for the remote breed catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "Invalid catalog URL '{}'. Must start with http:// or https://",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Settings for the PostgreSQL record store.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_pool_size: Option<u32>,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> AppResult<Self> {
        let url = url.into();

        if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
            return Err(AppError::ConfigError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }

        Ok(Self {
            url,
            max_pool_size: None,
        })
    }

    /// Host part of the URL, safe to log.
    pub fn display_host(&self) -> &str {
        self.url.rsplit('@').next().unwrap_or("unknown_host")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    /// Absent when only catalog operations are needed.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from the process environment, reading `.env` first
    /// when one is present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_url = lookup("CATALOG_API_URL")
            .or_else(|| lookup("API_URL"))
            .ok_or_else(|| {
                AppError::ConfigError(
                    "CATALOG_API_URL environment variable not found".to_string(),
                )
            })?;

        let mut catalog = CatalogConfig::new(catalog_url)?;
        if let Some(raw) = lookup("CATALOG_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("Invalid CATALOG_TIMEOUT_SECS '{}': {}", raw, e))
            })?;
            catalog = catalog.with_timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = lookup("CATALOG_USER_AGENT") {
            catalog.user_agent = agent;
        }

        let database = match lookup("DATABASE_URL") {
            Some(url) => {
                let mut database = DatabaseConfig::new(url)?;
                if let Some(raw) = lookup("DATABASE_MAX_POOL_SIZE") {
                    let size = raw.trim().parse::<u32>().map_err(|e| {
                        AppError::ConfigError(format!(
                            "Invalid DATABASE_MAX_POOL_SIZE '{}': {}",
                            raw, e
                        ))
                    })?;
                    database.max_pool_size = Some(size);
                }
                Some(database)
            }
            None => None,
        };

        Ok(Self { catalog, database })
    }

    pub fn require_database(&self) -> AppResult<&DatabaseConfig> {
        self.database.as_ref().ok_or_else(|| {
            AppError::ConfigError("DATABASE_URL environment variable not found".to_string())
        })
    }
}
