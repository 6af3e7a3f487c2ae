use serde::{Deserialize, Serialize};

/// One breed as served by the catalog endpoint.
///
/// Only the fields we reshape are modelled; the catalog sends more
/// (`bred_for`, `breed_group`, `origin`, ...) and serde skips them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogBreedDto {
    pub id: i32,
    pub name: String,
    pub weight: Option<CatalogMeasureDto>,
    pub height: Option<CatalogMeasureDto>,
    pub image: Option<CatalogImageDto>,
    pub life_span: Option<String>,
    pub temperament: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMeasureDto {
    pub imperial: Option<String>,
    pub metric: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogImageDto {
    pub id: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub url: Option<String>,
}
