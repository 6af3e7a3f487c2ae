//! Presentation boundary for breed lookups.
//!
//! Each command runs one aggregator operation and folds its result into a
//! [`LookupOutcome`], so callers always get a value whose `status` says
//! whether the lookup worked.

use crate::modules::breed::application::{BreedAggregator, LookupOutcome};
use crate::modules::breed::domain::NormalizedBreed;

pub type BreedsOutcome = LookupOutcome<Vec<NormalizedBreed>>;

/// Store breeds whose name contains `query`
pub async fn search_store_breeds(aggregator: &BreedAggregator, query: &str) -> BreedsOutcome {
    aggregator.find_by_name_in_store(query).await.into()
}

/// Catalog breeds whose name contains `query`
pub async fn search_catalog_breeds(aggregator: &BreedAggregator, query: &str) -> BreedsOutcome {
    aggregator.find_by_name_in_catalog(query).await.into()
}

pub async fn list_catalog_breeds(aggregator: &BreedAggregator) -> BreedsOutcome {
    aggregator.list_all_from_catalog().await.into()
}

pub async fn list_store_breeds(aggregator: &BreedAggregator) -> BreedsOutcome {
    aggregator.list_all_from_store().await.into()
}

pub async fn get_catalog_breed(aggregator: &BreedAggregator, id: i32) -> BreedsOutcome {
    aggregator.find_by_id_in_catalog(id).await.into()
}

pub async fn get_store_breed(aggregator: &BreedAggregator, id: i32) -> BreedsOutcome {
    aggregator.find_by_id_in_store(id).await.into()
}
