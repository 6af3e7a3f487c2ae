// Shared kernel used by every bounded context

pub mod config; // Environment-driven settings
pub mod errors; // Shared error types
pub mod infrastructure; // Database pool and migrations
pub mod utils; // Logging and input validation

pub use config::AppConfig;
pub use infrastructure::database::Database;
