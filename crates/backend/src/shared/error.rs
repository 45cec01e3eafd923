use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::api_response::OkResponse;
use thiserror::Error;

/// Ошибка обработчика; клиент всегда получает `{ "ok": false }`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(msg) => {
                tracing::warn!("Rejected request body: {}", msg);
                StatusCode::BAD_REQUEST
            }
            ApiError::Storage(e) => {
                tracing::error!("{:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(OkResponse::failed())).into_response()
    }
}
