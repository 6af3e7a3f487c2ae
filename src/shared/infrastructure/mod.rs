/// Infrastructure shared across bounded contexts
pub mod database;

pub use database::Database;
