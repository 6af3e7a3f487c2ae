/// A breed as published by the remote catalog, flattened from its wire shape.
///
/// Nested objects the catalog may omit are kept optional here; reshaping
/// decides which of them are mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBreed {
    pub id: i32,
    pub name: String,
    pub weight_metric: Option<String>,
    pub height_metric: Option<String>,
    pub image_url: Option<String>,
    pub life_span: Option<String>,
    pub temperament: Option<String>,
}
