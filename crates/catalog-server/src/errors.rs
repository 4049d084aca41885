//! HTTP mapping for catalog errors.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use catalog_core::CatalogError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("validation error: {0}")]
    Validation(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Catalog(e) => match e {
                CatalogError::InvalidArgument(_) => "INVALID_ARGUMENT",
                CatalogError::InvalidReference { .. } => "INVALID_REFERENCE",
                CatalogError::AlreadyExists { .. } => "ALREADY_EXISTS",
                CatalogError::NotFound { .. } => "NOT_FOUND",
                CatalogError::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
                CatalogError::Serialization(_) | CatalogError::Config(_) => "INTERNAL_ERROR",
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(e) => match e {
                CatalogError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                CatalogError::InvalidReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                CatalogError::AlreadyExists { .. } => StatusCode::CONFLICT,
                CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
                CatalogError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                CatalogError::Serialization(_) | CatalogError::Config(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Storage and internal details stay in the logs.
        let error = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            status
                .canonical_reason()
                .unwrap_or("Internal server error")
                .to_string()
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(ErrorResponse {
            error,
            code: self.code(),
            retryable: matches!(self, ApiError::Catalog(e) if e.is_retryable()),
        })
    }
}

#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
    retryable: bool,
}

pub type ApiResult<T> = Result<T, ApiError>;
