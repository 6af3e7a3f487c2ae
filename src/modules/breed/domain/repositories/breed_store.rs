use async_trait::async_trait;

use crate::modules::breed::domain::entities::StoredBreed;
use crate::shared::errors::AppResult;

/// Read access to the breed tables of the record store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedStore: Send + Sync {
    /// Rows whose name contains `query` (case-insensitive), with their tags
    async fn search_by_name(&self, query: &str) -> AppResult<Vec<StoredBreed>>;

    /// The row with this primary key, with its tags
    async fn find_by_id(&self, id: i32) -> AppResult<Option<StoredBreed>>;

    /// Every row with its tags, ordered by id
    async fn list_all(&self) -> AppResult<Vec<StoredBreed>>;
}
