use serde::Serialize;

use crate::shared::errors::{AppError, AppResult};

/// What the presentation layer receives from a breed operation.
///
/// Success and failure are distinguishable by `status` alone:
/// `{"status":"ok","data":[...]}` or
/// `{"status":"error","error":{"type":"NotFound","message":"..."}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LookupOutcome<T> {
    Ok { data: T },
    Error { error: AppError },
}

impl<T> LookupOutcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, LookupOutcome::Ok { .. })
    }

    pub fn into_result(self) -> AppResult<T> {
        match self {
            LookupOutcome::Ok { data } => Ok(data),
            LookupOutcome::Error { error } => Err(error),
        }
    }
}

impl<T> From<AppResult<T>> for LookupOutcome<T> {
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(data) => LookupOutcome::Ok { data },
            Err(error) => LookupOutcome::Error { error },
        }
    }
}
