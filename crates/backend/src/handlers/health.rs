use axum::Json;
use contracts::shared::api_response::OkResponse;

/// GET /health
pub async fn health() -> Json<OkResponse> {
    Json(OkResponse::ok())
}
