use contracts::domain::a001_product::aggregate::{
    CategoryListResponse, Product, ProductResponse,
};
use contracts::domain::a001_product::query::{ProductListParams, ProductListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{get_json, with_query};

/// Страница каталога с фильтрами
pub async fn fetch_page(params: &ProductListParams) -> Result<ProductListResponse, String> {
    get_json(&with_query("/products", params)).await
}

/// Товар по id; `Ok(None)`, если сервер ответил 404
pub async fn fetch_by_id(id: &str) -> Result<Option<Product>, String> {
    let url = format!("/products/{}", id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ProductResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(Some(data.product))
}

/// Список категорий для селектора в шапке
pub async fn fetch_categories() -> Result<Vec<String>, String> {
    let data: CategoryListResponse = get_json("/products/categories").await?;
    Ok(data.categories)
}
