use serde::Serialize;

use super::{catalog_breed::CatalogBreed, stored_breed::StoredBreed, temperament_tag::TemperamentTag};
use crate::modules::breed::domain::value_objects::{BoundPair, Provenance, RangeBound};
use crate::shared::errors::{AppError, AppResult};

/// Temperament as each source provides it.
///
/// The catalog's free-text description and the store's tag names are kept
/// apart; callers decide whether to treat them alike.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Temperament {
    /// Related tag rows, as loaded from the store
    Tags(Vec<TemperamentTag>),
    /// Free text from the catalog, e.g. `"Loyal, Alert"`
    Description(String),
    /// Store tag names joined with `", "`
    Joined(String),
}

/// Unified breed record handed to the presentation layer
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NormalizedBreed {
    pub id: i32,
    /// Always lower-cased
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "pesoMin", skip_serializing_if = "Option::is_none")]
    pub weight_min: Option<RangeBound>,
    #[serde(rename = "pesoMax", skip_serializing_if = "Option::is_none")]
    pub weight_max: Option<RangeBound>,
    #[serde(rename = "alturaMin", skip_serializing_if = "Option::is_none")]
    pub height_min: Option<RangeBound>,
    #[serde(rename = "alturaMax", skip_serializing_if = "Option::is_none")]
    pub height_max: Option<RangeBound>,
    #[serde(rename = "temperamento", skip_serializing_if = "Option::is_none")]
    pub temperament: Option<Temperament>,
    #[serde(rename = "imagen", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "edadMin", skip_serializing_if = "Option::is_none")]
    pub age_min: Option<RangeBound>,
    #[serde(rename = "edadMax", skip_serializing_if = "Option::is_none")]
    pub age_max: Option<RangeBound>,
    #[serde(rename = "proviene")]
    pub source: Provenance,
    #[serde(rename = "colorFondo", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl NormalizedBreed {
    /// Reshape a catalog entry.
    ///
    /// Weight, height, image and life span are required; a missing one makes
    /// the record malformed. Temperament is optional.
    pub fn from_catalog(breed: &CatalogBreed) -> AppResult<Self> {
        let weight = BoundPair::parse(required(breed, "weight", &breed.weight_metric)?);
        let height = BoundPair::parse(required(breed, "height", &breed.height_metric)?);
        let image = required(breed, "image", &breed.image_url)?;
        let age = BoundPair::parse_life_span(required(breed, "life_span", &breed.life_span)?);

        Ok(Self {
            id: breed.id,
            name: breed.name.to_lowercase(),
            weight_min: weight.min,
            weight_max: weight.max,
            height_min: height.min,
            height_max: height.max,
            temperament: breed.temperament.clone().map(Temperament::Description),
            image: Some(image.to_string()),
            age_min: age.min,
            age_max: age.max,
            source: Provenance::Catalog,
            background_color: None,
        })
    }

    /// Reshape a store row, embedding its related tags as a collection.
    pub fn from_store(breed: StoredBreed) -> Self {
        let weight = BoundPair::numeric(breed.weight_min, breed.weight_max);
        let height = BoundPair::numeric(breed.height_min, breed.height_max);
        let age = BoundPair::numeric(breed.age_min, breed.age_max);

        Self {
            id: breed.id,
            name: breed.name.to_lowercase(),
            weight_min: weight.min,
            weight_max: weight.max,
            height_min: height.min,
            height_max: height.max,
            temperament: Some(Temperament::Tags(breed.temperaments)),
            image: breed.image,
            age_min: age.min,
            age_max: age.max,
            source: Provenance::Store,
            background_color: breed.background_color,
        }
    }

    pub fn with_temperament(mut self, temperament: Temperament) -> Self {
        self.temperament = Some(temperament);
        self
    }
}

fn required<'a>(
    breed: &CatalogBreed,
    field: &str,
    value: &'a Option<String>,
) -> AppResult<&'a str> {
    value.as_deref().ok_or_else(|| {
        AppError::ValidationError(format!(
            "Catalog breed {} ('{}') is missing {}",
            breed.id, breed.name, field
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn akita() -> CatalogBreed {
        CatalogBreed {
            id: 42,
            name: "Akita".to_string(),
            weight_metric: Some("34-45".to_string()),
            height_metric: Some("61-71".to_string()),
            image_url: Some("http://x/1.png".to_string()),
            life_span: Some("10-12 years".to_string()),
            temperament: Some("Loyal".to_string()),
        }
    }

    fn beagle() -> StoredBreed {
        StoredBreed {
            id: 1,
            name: "Beagle".to_string(),
            weight_min: 9,
            weight_max: 11,
            height_min: 33,
            height_max: 41,
            age_min: 12,
            age_max: 15,
            image: Some("http://x/beagle.png".to_string()),
            background_color: Some("#f5deb3".to_string()),
            temperaments: vec![
                TemperamentTag {
                    id: 3,
                    name: "Friendly".to_string(),
                },
                TemperamentTag {
                    id: 7,
                    name: "Curious".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_catalog_record_matches_presentation_shape() {
        let record = NormalizedBreed::from_catalog(&akita()).unwrap();

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": 42,
                "nombre": "akita",
                "pesoMin": "34",
                "pesoMax": "45",
                "alturaMin": "61",
                "alturaMax": "71",
                "temperamento": "Loyal",
                "imagen": "http://x/1.png",
                "edadMin": "10",
                "edadMax": "12",
                "proviene": "API"
            })
        );
    }

    #[test]
    fn test_catalog_record_without_temperament() {
        let mut breed = akita();
        breed.temperament = None;

        let record = NormalizedBreed::from_catalog(&breed).unwrap();
        assert!(record.temperament.is_none());
        assert!(serde_json::to_value(&record).unwrap().get("temperamento").is_none());
    }

    #[test]
    fn test_catalog_record_missing_image_is_malformed() {
        let mut breed = akita();
        breed.image_url = None;

        let err = NormalizedBreed::from_catalog(&breed).unwrap_err();
        match err {
            AppError::ValidationError(msg) => assert!(msg.contains("image")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_catalog_weight_without_hyphen_drops_max() {
        let mut breed = akita();
        breed.weight_metric = Some("40".to_string());

        let record = NormalizedBreed::from_catalog(&breed).unwrap();
        assert_eq!(record.weight_min, Some(RangeBound::from("40")));
        assert_eq!(record.weight_max, None);
    }

    #[test]
    fn test_store_record_embeds_tags_and_background() {
        let record = NormalizedBreed::from_store(beagle());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["nombre"], "beagle");
        assert_eq!(value["pesoMin"], 9);
        assert_eq!(value["edadMax"], 15);
        assert_eq!(value["proviene"], "DB");
        assert_eq!(value["colorFondo"], "#f5deb3");
        assert_eq!(
            value["temperamento"],
            json!([{"id": 3, "nombre": "Friendly"}, {"id": 7, "nombre": "Curious"}])
        );
    }

    #[test]
    fn test_store_record_with_joined_temperament() {
        let breed = beagle();
        let joined = TemperamentTag::join_names(&breed.temperaments);
        let record = NormalizedBreed::from_store(breed).with_temperament(Temperament::Joined(joined));

        assert_eq!(
            record.temperament,
            Some(Temperament::Joined("Friendly, Curious".to_string()))
        );
        assert_eq!(serde_json::to_value(&record).unwrap()["temperamento"], "Friendly, Curious");
    }

    #[test]
    fn test_joined_and_description_stay_distinct_values() {
        let joined = Temperament::Joined("Loyal, Alert".to_string());
        let description = Temperament::Description("Loyal, Alert".to_string());

        assert_ne!(joined, description);
        assert_eq!(
            serde_json::to_value(&joined).unwrap(),
            serde_json::to_value(&description).unwrap()
        );
    }
}
