use axum::{body::Bytes, extract::State, Json};
use contracts::domain::a002_cart::aggregate::{CartResponse, CartSyncRequest, CartView};
use contracts::shared::api_response::OkResponse;

use crate::domain::a002_cart::service;
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

/// GET /cart
///
/// Отдаёт только последний снимок. Ошибка чтения журнала не считается
/// ошибкой запроса: клиент получает пустую корзину.
pub async fn get_latest(State(state): State<AppState>) -> Json<CartResponse> {
    let cart = match service::latest(&state.db.carts).await {
        Ok(view) => view,
        Err(e) => {
            tracing::warn!("Failed to read cart log: {:#}", e);
            CartView::default()
        }
    };
    Json(CartResponse { ok: true, cart })
}

/// Пустое тело означает пустую корзину; тело, которое не разбирается,
/// отклоняется, чтобы не затереть последний снимок.
fn parse_sync_request(body: &[u8]) -> Result<CartSyncRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CartSyncRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("cart body: {}", e)))
}

/// POST /cart
pub async fn save(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OkResponse>, ApiError> {
    let request = parse_sync_request(&body)?;
    service::save_snapshot(&state.db.carts, request.items).await?;
    Ok(Json(OkResponse::ok()))
}
