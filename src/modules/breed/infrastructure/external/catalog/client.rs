use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, warn};

use super::{dto::CatalogBreedDto, mapper::CatalogMapper};
use crate::modules::breed::application::CatalogSource;
use crate::modules::breed::domain::CatalogBreed;
use crate::modules::breed::infrastructure::external::CommonHttpHandler;
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

const SOURCE_NAME: &str = "Catalog";

/// Catalog source backed by a single HTTP GET
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(config.timeout, &config.user_agent)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_all(&self) -> AppResult<Vec<CatalogBreed>> {
        LogContext::catalog_request(&self.base_url, None, None);
        let started = Instant::now();

        let response = self.client.get(&self.base_url).send().await.map_err(|e| {
            warn!(url = %self.base_url, error = %e, "catalog request failed");
            AppError::from(e)
        })?;

        let status = response.status();
        CommonHttpHandler::handle_response_status(status, SOURCE_NAME)?;

        let breeds = response
            .json::<Vec<CatalogBreedDto>>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse catalog response: {}", e)))?;

        let elapsed = started.elapsed().as_millis() as u64;
        debug!(count = breeds.len(), elapsed_ms = elapsed, "catalog fetched");
        LogContext::catalog_request(&self.base_url, Some(status.as_u16()), Some(elapsed));

        Ok(breeds.into_iter().map(CatalogMapper::to_domain).collect())
    }
}
