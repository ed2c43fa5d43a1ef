use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("appointment {id} not found")]
    NotFound { id: String },
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),
    #[error("invalid body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn not_found(id: impl Into<String>) -> Self {
        ApiError::NotFound { id: id.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidQuery(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            log::debug!("{}", self);
        }

        (
            status,
            Json(json!({
                "status": "error",
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
