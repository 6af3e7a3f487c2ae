use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                404 => AppError::NotFound("External resource not found".to_string()),
                _ => AppError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else if err.is_decode() {
            AppError::SerializationError(format!("Invalid response body: {}", err))
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ValidationError(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_type_and_message() {
        let err = AppError::NotFound("Breed 7 not found in record store".to_string());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "Breed 7 not found in record store");
    }

    #[test]
    fn test_diesel_not_found_maps_to_not_found() {
        let err = AppError::from(diesel::result::Error::NotFound);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_parse_int_error_is_validation() {
        let err = AppError::from("abc".parse::<i32>().unwrap_err());
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
