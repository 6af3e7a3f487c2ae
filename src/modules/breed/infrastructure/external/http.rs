use reqwest::StatusCode;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

/// HTTP plumbing shared by external sources
pub struct CommonHttpHandler;

impl CommonHttpHandler {
    /// Map response status codes onto `AppError`
    pub fn handle_response_status(status: StatusCode, source_name: &str) -> AppResult<()> {
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(AppError::NotFound(format!(
                "{} resource not found",
                source_name
            ))),
            StatusCode::BAD_REQUEST => Err(AppError::ApiError(format!(
                "Bad request to {} API",
                source_name
            ))),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::ApiError(format!(
                "Access denied by {} API ({})",
                source_name, status
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::BAD_GATEWAY
            | StatusCode::GATEWAY_TIMEOUT => Err(AppError::ExternalServiceError(format!(
                "{} service unavailable ({})",
                source_name, status
            ))),
            _ => Err(AppError::ApiError(format!(
                "Unexpected status code from {}: {}",
                source_name, status
            ))),
        }
    }

    pub fn create_http_client(timeout: Duration, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }
}
