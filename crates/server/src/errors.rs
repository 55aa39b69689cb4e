use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body returned by the company endpoints.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
    pub id: Option<i64>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message, id: None }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.error,
            "message": self.message,
            "id": self.id,
        });
        (self.status, Json(body)).into_response()
    }
}

/// NotFound is recovered into a 404 carrying the id. Every other failure is
/// logged in full and surfaces as a generic 500; the request is not retried.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { id, message } => {
                JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(message)).with_id(id)
            }
            other => {
                error!(err = %other, "company request failed");
                JsonApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    Some("an unexpected error occurred".into()),
                )
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_id() {
        let err = JsonApiError::from(ServiceError::not_found(12));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.id, Some(12));
        assert_eq!(err.message.as_deref(), Some("Company with id 12 not found"));
    }

    #[test]
    fn infrastructure_errors_map_to_generic_500() {
        let err = JsonApiError::from(ServiceError::Db("connection reset".into()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.id, None);
        assert!(!err.message.unwrap_or_default().contains("connection reset"));
    }
}
