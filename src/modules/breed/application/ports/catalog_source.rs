use async_trait::async_trait;

use crate::modules::breed::domain::CatalogBreed;
use crate::shared::errors::AppResult;

/// Port for the remote breed catalog.
///
/// The catalog has no query API; every call returns the full list in the
/// catalog's own order.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all(&self) -> AppResult<Vec<CatalogBreed>>;
}
