use crate::modules::breed::domain::{StoredBreed, TemperamentTag};
use crate::modules::breed::infrastructure::models::{DogModel, TemperamentoModel};

pub struct BreedRecordMapper;

impl BreedRecordMapper {
    pub fn to_domain(model: DogModel, temperaments: Vec<TemperamentoModel>) -> StoredBreed {
        StoredBreed {
            id: model.id,
            name: model.nombre,
            weight_min: model.peso_min,
            weight_max: model.peso_max,
            height_min: model.altura_min,
            height_max: model.altura_max,
            age_min: model.edad_min,
            age_max: model.edad_max,
            image: model.imagen,
            background_color: model.color_fondo,
            temperaments: temperaments.into_iter().map(Self::tag_to_domain).collect(),
        }
    }

    pub fn tag_to_domain(model: TemperamentoModel) -> TemperamentTag {
        TemperamentTag {
            id: model.id,
            name: model.nombre,
        }
    }
}
