use super::dto::{CatalogBreedDto, CatalogMeasureDto};
use crate::modules::breed::domain::CatalogBreed;

pub struct CatalogMapper;

impl CatalogMapper {
    pub fn to_domain(dto: CatalogBreedDto) -> CatalogBreed {
        CatalogBreed {
            id: dto.id,
            name: dto.name,
            weight_metric: Self::metric(dto.weight),
            height_metric: Self::metric(dto.height),
            image_url: dto.image.and_then(|image| image.url),
            life_span: dto.life_span,
            temperament: dto.temperament,
        }
    }

    fn metric(measure: Option<CatalogMeasureDto>) -> Option<String> {
        measure.and_then(|m| m.metric)
    }
}
