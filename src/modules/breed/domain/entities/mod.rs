pub mod catalog_breed;
pub mod normalized_breed;
pub mod stored_breed;
pub mod temperament_tag;

pub use catalog_breed::CatalogBreed;
pub use normalized_breed::{NormalizedBreed, Temperament};
pub use stored_breed::StoredBreed;
pub use temperament_tag::TemperamentTag;
