pub mod client;
pub mod dto;
pub mod mapper;

pub use client::HttpCatalogClient;
pub use dto::{CatalogBreedDto, CatalogImageDto, CatalogMeasureDto};
pub use mapper::CatalogMapper;
