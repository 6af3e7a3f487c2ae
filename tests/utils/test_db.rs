/// Isolated test database that is created per test and dropped afterwards.
///
/// Connects with TEST_DATABASE_URL, creates `test_dogs_{pid}_{n}`, applies
/// the embedded migrations and hands out a pool for it.
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager};
use diesel::{sql_query, Connection, PgConnection, RunQueryDsl};
use diesel_migrations::MigrationHarness;
use dogs_lib::shared::infrastructure::database::{DbPool, MIGRATIONS};
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

pub struct TestDb {
    server_url: String,
    name: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let name = format!(
            "test_dogs_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let server_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set for database tests");

        let mut conn =
            PgConnection::establish(&server_url).expect("Failed to connect to test database server");
        sql_query(format!("CREATE DATABASE {}", name))
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Failed to create test database {}: {}", name, e));

        // Swap the database name after the last '/'
        let last_slash = server_url
            .rfind('/')
            .unwrap_or_else(|| panic!("Invalid TEST_DATABASE_URL: {}", server_url));
        let isolated_url = format!("{}/{}", &server_url[..last_slash], name);

        let pool = r2d2::Pool::builder()
            .max_size(3)
            .test_on_check_out(true)
            .build(ConnectionManager::<PgConnection>::new(isolated_url))
            .expect("Failed to build test database pool");

        pool.get()
            .expect("Unable to connect to the test database")
            .run_pending_migrations(MIGRATIONS)
            .expect("Unable to migrate the test database");

        Self {
            server_url,
            name,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Run a batch of raw SQL statements against the test database.
    pub fn execute(&self, sql: &str) {
        let mut conn = self.pool.get().expect("Unable to connect to the test database");
        conn.batch_execute(sql)
            .unwrap_or_else(|e| panic!("Seed statement failed: {}\n{}", e, sql));
    }
}

impl Drop for TestDb {
    /// Leaves the database in place when the test panicked.
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!("TestDb keeping database '{}' after panic", self.name);
            return;
        }

        let Ok(mut conn) = PgConnection::establish(&self.server_url) else {
            eprintln!("TestDb could not reconnect to drop '{}'", self.name);
            return;
        };

        let _ = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut conn);

        if let Err(e) = sql_query(format!("DROP DATABASE IF EXISTS {}", self.name)).execute(&mut conn) {
            eprintln!("Failed to drop test database '{}': {}", self.name, e);
        }
    }
}
