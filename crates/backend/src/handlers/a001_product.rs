use axum::{
    extract::{Path, Query, State},
    Json,
};
use contracts::domain::a001_product::aggregate::{CategoryListResponse, ProductResponse};
use contracts::domain::a001_product::query::{
    ProductListParams, ProductListResponse, ProductQuery,
};

use crate::shared::error::ApiError;
use crate::shared::state::AppState;

/// GET /products?q=&category=&deal=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Json<ProductListResponse> {
    let query = ProductQuery::from_params(&params);
    let page = state.catalog.query(&query);
    Json(ProductListResponse {
        ok: true,
        total: page.total,
        offset: query.offset,
        limit: query.limit,
        results: page.results,
    })
}

/// GET /products/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state
        .catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(id))?;
    Ok(Json(ProductResponse { ok: true, product }))
}

/// GET /products/categories
pub async fn categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        ok: true,
        categories: state.catalog.categories(),
    })
}
