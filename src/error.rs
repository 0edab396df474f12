use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::response::ErrorResponse;

/// Request rejections raised before the parser runs.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API Key inválido")]
    Unauthorized,

    #[error("Formato JSON inválido. Se requiere campo \"texto\"")]
    MissingText,

    #[error("Error procesando JSON: {0}")]
    InvalidJson(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::MissingText | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
