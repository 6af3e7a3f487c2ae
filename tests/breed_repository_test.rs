/// Record store tests against an isolated PostgreSQL database.
///
/// Ignored by default; run with TEST_DATABASE_URL set and `--ignored`.
mod utils;

use std::sync::Arc;

use async_trait::async_trait;
use dogs_lib::modules::breed::application::{BreedAggregator, CatalogSource};
use dogs_lib::modules::breed::domain::{BreedStore, CatalogBreed, RangeBound, Temperament};
use dogs_lib::modules::breed::infrastructure::BreedRepositoryImpl;
use dogs_lib::shared::errors::{AppError, AppResult};
use dogs_lib::shared::Database;
use utils::test_db::TestDb;

const SEED: &str = r#"
INSERT INTO dogs (id, nombre, peso_min, peso_max, altura_min, altura_max, edad_min, edad_max, imagen, color_fondo) VALUES
    (1, 'Beagle', 9, 11, 33, 41, 12, 15, 'http://x/beagle.png', '#f5deb3'),
    (2, 'Border Collie', 14, 20, 46, 56, 10, 17, NULL, NULL),
    (3, 'Bearded 100%_Collie', 18, 27, 51, 56, 12, 14, NULL, NULL);
INSERT INTO temperamentos (id, nombre) VALUES (1, 'Friendly'), (2, 'Curious'), (3, 'Energetic');
INSERT INTO dog_temperamentos (dog_id, temperamento_id) VALUES (1, 2), (1, 1), (2, 3);
"#;

struct UnusedCatalog;

#[async_trait]
impl CatalogSource for UnusedCatalog {
    async fn fetch_all(&self) -> AppResult<Vec<CatalogBreed>> {
        Ok(vec![])
    }
}

fn seeded_repository(test_db: &TestDb) -> Arc<BreedRepositoryImpl> {
    test_db.execute(SEED);
    let database = Arc::new(Database::from_pool(test_db.pool()));
    Arc::new(BreedRepositoryImpl::new(database))
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_find_by_id_loads_tags_in_id_order() {
    let test_db = TestDb::new();
    let repo = seeded_repository(&test_db);

    let beagle = repo.find_by_id(1).await.unwrap().expect("beagle is seeded");

    assert_eq!(beagle.name, "Beagle");
    assert_eq!(beagle.weight_min, 9);
    assert_eq!(beagle.background_color.as_deref(), Some("#f5deb3"));
    let names: Vec<&str> = beagle.temperaments.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Friendly", "Curious"]);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_find_by_id_missing_row_is_none() {
    let test_db = TestDb::new();
    let repo = seeded_repository(&test_db);

    assert!(repo.find_by_id(404).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_search_by_name_is_case_insensitive() {
    let test_db = TestDb::new();
    let repo = seeded_repository(&test_db);

    let found = repo.search_by_name("COLLIE").await.unwrap();

    let ids: Vec<i32> = found.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(found[0].temperaments.len(), 1);
    assert!(found[1].temperaments.is_empty());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_search_treats_wildcards_literally() {
    let test_db = TestDb::new();
    let repo = seeded_repository(&test_db);

    let found = repo.search_by_name("100%_").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 3);

    assert!(repo.search_by_name("%").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_list_all_returns_every_row() {
    let test_db = TestDb::new();
    let repo = seeded_repository(&test_db);

    let all = repo.list_all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].temperaments.len(), 2);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_store_lookup_through_aggregator() {
    let test_db = TestDb::new();
    let aggregator = BreedAggregator::new(Arc::new(UnusedCatalog), seeded_repository(&test_db));

    let beagle = aggregator.find_by_id_in_store(1).await.unwrap();
    assert_eq!(beagle.len(), 1);
    assert_eq!(beagle[0].name, "beagle");
    assert_eq!(beagle[0].age_max, Some(RangeBound::from(15)));
    assert_eq!(
        beagle[0].temperament,
        Some(Temperament::Joined("Friendly, Curious".to_string()))
    );

    let err = aggregator.find_by_id_in_store(404).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
