pub mod modules;
mod schema;
pub mod shared;

use modules::breed::{BreedAggregator, BreedRepositoryImpl, HttpCatalogClient};
use shared::errors::AppResult;
use shared::{AppConfig, Database};
use std::sync::Arc;


/// Wire the catalog client and, when a database is configured, the record
/// store into a ready aggregator.
pub fn build_aggregator(config: &AppConfig) -> AppResult<BreedAggregator> {
    let catalog = Arc::new(HttpCatalogClient::new(&config.catalog)?);

    let Some(db_config) = &config.database else {
        log_warn!("DATABASE_URL not set, record store operations are unavailable");
        return Ok(BreedAggregator::catalog_only(catalog));
    };

    let database = Arc::new(Database::new(db_config)?);
    let store = Arc::new(BreedRepositoryImpl::new(database));

    Ok(BreedAggregator::new(catalog, store))
}

/// Apply any pending schema migrations, returning how many ran.
pub fn run_migrations(config: &AppConfig) -> AppResult<usize> {
    let database = Database::new(config.require_database()?)?;
    database.run_pending_migrations()
}
