use contracts::domain::a002_cart::aggregate::{CartItem, CartSyncRequest};
use contracts::shared::api_response::OkResponse;

use crate::shared::api_utils::post_json;

/// Отправить снимок корзины на сервер
pub async fn sync(items: Vec<CartItem>) -> Result<(), String> {
    let response: OkResponse = post_json("/cart", &CartSyncRequest { items }).await?;
    if response.ok {
        Ok(())
    } else {
        Err("Cart sync rejected".to_string())
    }
}
