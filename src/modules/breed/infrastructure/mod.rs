pub mod external;
pub mod models;
pub mod persistence;

pub use external::{CommonHttpHandler, HttpCatalogClient};
pub use persistence::BreedRepositoryImpl;
