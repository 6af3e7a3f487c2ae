use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Only blank queries are rejected.
    pub fn validate_name_query(query: &str) -> Result<(), AppError> {
        if query.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
