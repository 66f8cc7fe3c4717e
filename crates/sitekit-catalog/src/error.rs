//! Error types for the catalog module

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog module error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    #[error("Service contact not found: {0}")]
    ContactNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid file type: {0} (allowed: .jpg, .jpeg, .png, .webp)")]
    InvalidFileType(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

impl From<bson::ser::Error> for CatalogError {
    fn from(err: bson::ser::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CatalogError {
    fn from(err: validator::ValidationErrors) -> Self {
        CatalogError::Validation(err.to_string())
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CatalogError {
    /// Convert to API error code
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::ServiceNotFound(_) => "SERVICE_NOT_FOUND",
            CatalogError::ContactNotFound(_) => "CONTACT_NOT_FOUND",
            CatalogError::Validation(_) => "VALIDATION_ERROR",
            CatalogError::InvalidFileType(_) => "INVALID_FILE_TYPE",
            CatalogError::Unauthorized => "UNAUTHORIZED",
            CatalogError::Database(_) => "DATABASE_ERROR",
            CatalogError::Io(_) => "IO_ERROR",
            CatalogError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::ServiceNotFound(_) | CatalogError::ContactNotFound(_) => {
                StatusCode::NOT_FOUND
            }

            CatalogError::Validation(_) | CatalogError::InvalidFileType(_) => {
                StatusCode::BAD_REQUEST
            }

            CatalogError::Unauthorized => StatusCode::UNAUTHORIZED,

            CatalogError::Database(_) | CatalogError::Io(_) | CatalogError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiError {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CatalogError::ServiceNotFound("s1".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::ContactNotFound("c1".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::Validation("bad email".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::InvalidFileType(".gif".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            CatalogError::Database("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CatalogError::ServiceNotFound("x".into()).code(), "SERVICE_NOT_FOUND");
        assert_eq!(CatalogError::InvalidFileType(".gif".into()).code(), "INVALID_FILE_TYPE");
        assert_eq!(CatalogError::Unauthorized.code(), "UNAUTHORIZED");
    }
}
