use crate::log_info;
use crate::shared::config::DatabaseConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(config: &DatabaseConfig) -> AppResult<Self> {
        log_info!(
            "Initializing database connection to: {}",
            config.display_host()
        );

        let manager = ConnectionManager::<PgConnection>::new(config.url.clone());

        let pool_config = Self::pool_config(config.max_pool_size);
        let pool = r2d2::Pool::builder()
            .max_size(pool_config.max_size)
            .min_idle(Some(pool_config.min_idle))
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {}, min_idle: {}",
            pool.max_size(),
            pool_config.min_idle
        );

        Ok(Self { pool })
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    fn pool_config(max_size_override: Option<u32>) -> PoolConfig {
        let max_size = max_size_override.unwrap_or_else(|| {
            let cpu_count = std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4);
            std::cmp::min(cpu_count * 2, 20) as u32
        });
        let max_size = max_size.max(1);
        let min_idle = std::cmp::min(max_size, std::cmp::max(1, max_size / 4));

        PoolConfig { max_size, min_idle }
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::slow_connection(duration);
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::operation_failed("Database connection checkout", &e);
                Err(AppError::from(e))
            }
        }
    }

    /// Apply any embedded migrations that have not run yet.
    pub fn run_pending_migrations(&self) -> AppResult<usize> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        log_info!("Database migrations completed, {} applied", applied.len());
        Ok(applied.len())
    }
}

#[derive(Debug)]
struct PoolConfig {
    max_size: u32,
    min_idle: u32,
}
