use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;
use voxdrop_common::VoxdropError;

use crate::types::ErrorResponse;

/// Handler error, rendered as `{ "error": <message> }`
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub VoxdropError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.0.to_string(),
        })
    }
}
