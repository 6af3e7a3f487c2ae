pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{BreedAggregator, CatalogSource, LookupOutcome};
pub use domain::{
    BreedStore, CatalogBreed, NormalizedBreed, Provenance, RangeBound, StoredBreed, Temperament,
    TemperamentTag,
};
pub use infrastructure::{BreedRepositoryImpl, HttpCatalogClient};
