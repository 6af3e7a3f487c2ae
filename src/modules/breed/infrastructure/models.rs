use crate::schema::{dog_temperamentos, dogs, temperamentos};
use diesel::prelude::*;

// ================== DOG MODELS ==================

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = dogs)]
pub struct DogModel {
    pub id: i32,
    pub nombre: String,
    pub peso_min: i32,
    pub peso_max: i32,
    pub altura_min: i32,
    pub altura_max: i32,
    pub edad_min: i32,
    pub edad_max: i32,
    pub imagen: Option<String>,
    pub color_fondo: Option<String>,
}

// ================== TEMPERAMENT MODELS ==================

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = temperamentos)]
pub struct TemperamentoModel {
    pub id: i32,
    pub nombre: String,
}

// ============= DOG-TEMPERAMENT ASSOCIATION (join) =============

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(DogModel, foreign_key = dog_id))]
#[diesel(belongs_to(TemperamentoModel, foreign_key = temperamento_id))]
#[diesel(table_name = dog_temperamentos)]
#[diesel(primary_key(dog_id, temperamento_id))]
pub struct DogTemperamento {
    pub dog_id: i32,
    pub temperamento_id: i32,
}
