pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{CatalogBreed, NormalizedBreed, StoredBreed, Temperament, TemperamentTag};
pub use repositories::BreedStore;
pub use value_objects::{BoundPair, Provenance, RangeBound};
