use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use super::mapper::BreedRecordMapper;
use crate::modules::breed::domain::{BreedStore, StoredBreed};
use crate::modules::breed::infrastructure::models::{DogModel, DogTemperamento, TemperamentoModel};
use crate::schema::{dog_temperamentos, dogs, temperamentos};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct BreedRepositoryImpl {
    db: Arc<Database>,
}

impl BreedRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BreedStore for BreedRepositoryImpl {
    async fn search_by_name(&self, query: &str) -> AppResult<Vec<StoredBreed>> {
        let db = Arc::clone(&self.db);
        let pattern = format!("%{}%", escape_like(query));
        LogContext::store_query("search_by_name", None, None);
        let started = Instant::now();

        let breeds = task::spawn_blocking(move || -> AppResult<Vec<StoredBreed>> {
            let mut conn = db.get_connection()?;
            let rows = dogs::table
                .filter(dogs::nombre.ilike(pattern))
                .order(dogs::id.asc())
                .load::<DogModel>(&mut conn)?;
            load_with_temperaments(&mut conn, rows)
        })
        .await??;

        LogContext::store_query(
            "search_by_name",
            Some(breeds.len()),
            Some(started.elapsed().as_millis() as u64),
        );
        Ok(breeds)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<StoredBreed>> {
        let db = Arc::clone(&self.db);

        let breed = task::spawn_blocking(move || -> AppResult<Option<StoredBreed>> {
            let mut conn = db.get_connection()?;
            let row = dogs::table
                .find(id)
                .first::<DogModel>(&mut conn)
                .optional()?;

            match row {
                Some(row) => Ok(load_with_temperaments(&mut conn, vec![row])?.pop()),
                None => Ok(None),
            }
        })
        .await??;

        LogContext::store_query("find_by_id", Some(usize::from(breed.is_some())), None);
        Ok(breed)
    }

    async fn list_all(&self) -> AppResult<Vec<StoredBreed>> {
        let db = Arc::clone(&self.db);
        LogContext::store_query("list_all", None, None);
        let started = Instant::now();

        let breeds = task::spawn_blocking(move || -> AppResult<Vec<StoredBreed>> {
            let mut conn = db.get_connection()?;
            let rows = dogs::table
                .order(dogs::id.asc())
                .load::<DogModel>(&mut conn)?;
            load_with_temperaments(&mut conn, rows)
        })
        .await??;

        LogContext::store_query(
            "list_all",
            Some(breeds.len()),
            Some(started.elapsed().as_millis() as u64),
        );
        Ok(breeds)
    }
}

// -----------------------------------------------------------------------------
// Private helpers
// -----------------------------------------------------------------------------

/// Attach related temperament rows to each dog with a single join query.
fn load_with_temperaments(
    conn: &mut PgConnection,
    rows: Vec<DogModel>,
) -> AppResult<Vec<StoredBreed>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let pairs: Vec<(DogTemperamento, TemperamentoModel)> = DogTemperamento::belonging_to(&rows)
        .inner_join(temperamentos::table)
        .select((dog_temperamentos::all_columns, temperamentos::all_columns))
        .order(temperamentos::id.asc())
        .load::<(DogTemperamento, TemperamentoModel)>(conn)?;
    let grouped = pairs.grouped_by(&rows);

    Ok(rows
        .into_iter()
        .zip(grouped)
        .map(|(dog, pairs)| {
            let tags = pairs.into_iter().map(|(_, tag)| tag).collect();
            BreedRecordMapper::to_domain(dog, tags)
        })
        .collect())
}

/// Escape LIKE wildcards so the query matches literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
