pub mod outcome;
pub mod ports;
pub mod service;

pub use outcome::LookupOutcome;
pub use ports::CatalogSource;
pub use service::BreedAggregator;
