use super::temperament_tag::TemperamentTag;

/// A breed row from the record store together with its related tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBreed {
    pub id: i32,
    pub name: String,
    pub weight_min: i32,
    pub weight_max: i32,
    pub height_min: i32,
    pub height_max: i32,
    pub age_min: i32,
    pub age_max: i32,
    pub image: Option<String>,
    pub background_color: Option<String>,
    pub temperaments: Vec<TemperamentTag>,
}
