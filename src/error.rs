use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

use crate::model::EmployeeId;

/// Errors raised by store commands. The previous snapshot is always left intact.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum StoreError {
    #[display(fmt = "Invalid or missing field: {}", field)]
    Validation { field: &'static str },

    #[display(fmt = "Employee {} not found", _0)]
    NotFound(EmployeeId),

    #[display(fmt = "No employee ids left to assign")]
    IdsExhausted,
}

impl std::error::Error for StoreError {}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Validation { .. } => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::IdsExhausted => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

/// Failure of the upstream employee feed. Ingestion is skipped when this occurs.
#[derive(Debug, Display)]
pub enum FetchError {
    #[display(fmt = "Employee source unavailable: {}", _0)]
    Io(std::io::Error),

    #[display(fmt = "Employee source returned malformed data: {}", _0)]
    Decode(serde_json::Error),

    #[display(fmt = "Employee {} has an unreadable date of birth '{}'", id, value)]
    InvalidDate { id: u64, value: String },

    #[display(fmt = "Employee source records rejected: {}", _0)]
    Rejected(StoreError),
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Io(e) => Some(e),
            FetchError::Decode(e) => Some(e),
            FetchError::Rejected(e) => Some(e),
            FetchError::InvalidDate { .. } => None,
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        FetchError::Io(e)
    }
}

impl From<StoreError> for FetchError {
    fn from(e: StoreError) -> Self {
        FetchError::Rejected(e)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e)
    }
}
