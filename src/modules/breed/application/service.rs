use std::future::Future;
use std::sync::Arc;

use super::ports::CatalogSource;
use crate::modules::breed::domain::{
    BreedStore, CatalogBreed, NormalizedBreed, Provenance, Temperament, TemperamentTag,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Read-only aggregation over the record store and the remote catalog.
///
/// Every operation fetches fresh data from exactly one source, filters it,
/// and reshapes it into [`NormalizedBreed`]. Failures are logged here and
/// handed back to the caller as `Err`.
pub struct BreedAggregator {
    catalog: Arc<dyn CatalogSource>,
    store: Option<Arc<dyn BreedStore>>,
}

impl BreedAggregator {
    pub fn new(catalog: Arc<dyn CatalogSource>, store: Arc<dyn BreedStore>) -> Self {
        Self {
            catalog,
            store: Some(store),
        }
    }

    /// Aggregator without a record store; store operations fail with a
    /// configuration error.
    pub fn catalog_only(catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            store: None,
        }
    }

    pub async fn find_by_name_in_store(&self, query: &str) -> AppResult<Vec<NormalizedBreed>> {
        logged("find_by_name_in_store", self.store_search(query)).await
    }

    pub async fn find_by_name_in_catalog(&self, query: &str) -> AppResult<Vec<NormalizedBreed>> {
        logged("find_by_name_in_catalog", self.catalog_search(query)).await
    }

    pub async fn list_all_from_catalog(&self) -> AppResult<Vec<NormalizedBreed>> {
        logged("list_all_from_catalog", self.catalog_listing()).await
    }

    pub async fn list_all_from_store(&self) -> AppResult<Vec<NormalizedBreed>> {
        logged("list_all_from_store", self.store_listing()).await
    }

    /// Zero or one catalog breed with this id.
    pub async fn find_by_id_in_catalog(&self, id: i32) -> AppResult<Vec<NormalizedBreed>> {
        logged("find_by_id_in_catalog", self.catalog_lookup(id)).await
    }

    /// The stored breed with this id, temperament tags joined into one string.
    ///
    /// An unknown id is `AppError::NotFound`, not an empty list.
    pub async fn find_by_id_in_store(&self, id: i32) -> AppResult<Vec<NormalizedBreed>> {
        logged("find_by_id_in_store", self.store_lookup(id)).await
    }
}

// -----------------------------------------------------------------------------
// Pipelines
// -----------------------------------------------------------------------------

impl BreedAggregator {
    async fn store_search(&self, query: &str) -> AppResult<Vec<NormalizedBreed>> {
        Validator::validate_name_query(query)?;
        LogContext::breed_search(query, Provenance::Store.as_str(), None);

        let rows = self.store()?.search_by_name(query).await?;
        let needle = query.to_lowercase();
        let breeds: Vec<NormalizedBreed> = rows
            .into_iter()
            .filter(|row| name_matches(&row.name, &needle))
            .map(NormalizedBreed::from_store)
            .collect();

        LogContext::breed_search(query, Provenance::Store.as_str(), Some(breeds.len()));
        Ok(breeds)
    }

    async fn catalog_search(&self, query: &str) -> AppResult<Vec<NormalizedBreed>> {
        Validator::validate_name_query(query)?;
        LogContext::breed_search(query, Provenance::Catalog.as_str(), None);

        let needle = query.to_lowercase();
        let breeds = self
            .catalog_where(|breed| name_matches(&breed.name, &needle))
            .await?;

        LogContext::breed_search(query, Provenance::Catalog.as_str(), Some(breeds.len()));
        Ok(breeds)
    }

    async fn catalog_listing(&self) -> AppResult<Vec<NormalizedBreed>> {
        let breeds = self.catalog_where(|_| true).await?;
        log_info!("Catalog listing returned {} breeds", breeds.len());
        Ok(breeds)
    }

    async fn store_listing(&self) -> AppResult<Vec<NormalizedBreed>> {
        let rows = self.store()?.list_all().await?;
        let breeds: Vec<NormalizedBreed> = rows.into_iter().map(NormalizedBreed::from_store).collect();
        log_info!("Store listing returned {} breeds", breeds.len());
        Ok(breeds)
    }

    async fn catalog_lookup(&self, id: i32) -> AppResult<Vec<NormalizedBreed>> {
        let breeds = self.catalog_where(|breed| breed.id == id).await?;
        log_debug!("Catalog lookup for id {} matched {} breeds", id, breeds.len());
        Ok(breeds)
    }

    async fn store_lookup(&self, id: i32) -> AppResult<Vec<NormalizedBreed>> {
        let row = self
            .store()?
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Breed {} not found in record store", id)))?;

        let joined = TemperamentTag::join_names(&row.temperaments);
        let breed = NormalizedBreed::from_store(row).with_temperament(Temperament::Joined(joined));
        Ok(vec![breed])
    }

    // Filter raw entries before reshaping, so a malformed entry only fails the
    // lookups that actually select it.
    async fn catalog_where<P>(&self, predicate: P) -> AppResult<Vec<NormalizedBreed>>
    where
        P: Fn(&CatalogBreed) -> bool,
    {
        let entries = self.catalog.fetch_all().await?;
        entries
            .iter()
            .filter(|breed| predicate(*breed))
            .map(NormalizedBreed::from_catalog)
            .collect()
    }

    fn store(&self) -> AppResult<&Arc<dyn BreedStore>> {
        self.store.as_ref().ok_or_else(|| {
            AppError::ConfigError("Record store is not configured (DATABASE_URL)".to_string())
        })
    }
}

fn name_matches(name: &str, needle_lowercase: &str) -> bool {
    name.to_lowercase().contains(needle_lowercase)
}

async fn logged<T, F>(operation: &str, pipeline: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    pipeline.await.map_err(|e| {
        LogContext::operation_failed(operation, &e);
        e
    })
}
