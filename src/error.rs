use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Recipe service quota exceeded")]
    QuotaExceeded,

    #[error("Recipe not found: {0}")]
    NotFound(i64),

    #[error("Recipe excluded by dietary preferences: {0}")]
    Excluded(String),

    #[error("Recipe service returned status {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Handler-level error wrapper. Quota exhaustion gets its own status and a
/// `quota_exceeded` flag so the UI can explain that substitute data is shown.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Source(err) = self;
        let status = match &err {
            SourceError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
            SourceError::NotFound(_) => StatusCode::NOT_FOUND,
            SourceError::Excluded(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SourceError::Status(_) | SourceError::Http(_) => StatusCode::BAD_GATEWAY,
        };
        let quota_exceeded = matches!(err, SourceError::QuotaExceeded);

        (
            status,
            Json(serde_json::json!({
                "error": err.to_string(),
                "quota_exceeded": quota_exceeded,
            })),
        )
            .into_response()
    }
}
