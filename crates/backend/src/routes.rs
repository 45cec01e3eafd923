use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::middleware::request_logger::request_logger;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health::health))
        // ========================================
        // CATALOG
        // ========================================
        .route("/products", get(handlers::a001_product::list))
        .route(
            "/products/categories",
            get(handlers::a001_product::categories),
        )
        .route("/products/:id", get(handlers::a001_product::get_by_id))
        // ========================================
        // CART SNAPSHOTS
        // ========================================
        .route(
            "/cart",
            get(handlers::a002_cart::get_latest).post(handlers::a002_cart::save),
        )
        // ========================================
        // FORMS (append-only)
        // ========================================
        .route("/contact", post(handlers::a003_submission::contact))
        .route("/signin", post(handlers::a003_submission::signin))
        .route("/location", post(handlers::a003_submission::location))
        .route("/gift", post(handlers::a003_submission::gift))
        .fallback_service(
            ServeDir::new(static_dir).append_index_html_on_directories(true),
        )
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::generator::generate_products;
    use crate::domain::a001_product::service::Catalog;
    use crate::shared::data::db::initialize_database;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn test_app() -> (Router, AppState, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = initialize_database(dir.path()).await.unwrap();
        let catalog = Catalog::new(generate_products(500, 0.12, &mut StdRng::seed_from_u64(5)));
        let state = AppState::new(catalog, db);
        let app = configure_routes(state.clone(), dir.path().join("dist").to_str().unwrap());
        (app, state, dir)
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _state, _dir) = test_app().await;
        let (status, body) = send(&app, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_books_page() {
        let (app, state, _dir) = test_app().await;
        let (status, body) = send(&app, get_req("/products?category=Books&limit=10&offset=0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["limit"], 10);
        assert_eq!(body["offset"], 0);

        let results = body["results"].as_array().unwrap();
        assert!(results.len() <= 10);
        assert!(results.iter().all(|p| p["category"] == "Books"));

        let books = state
            .catalog
            .query(&contracts::domain::a001_product::query::ProductQuery {
                category: "Books".into(),
                limit: 500,
                ..Default::default()
            })
            .total;
        assert_eq!(body["total"], books);
    }

    #[tokio::test]
    async fn test_malformed_paging_and_deal_filter() {
        let (app, _state, _dir) = test_app().await;
        let (status, body) = send(&app, get_req("/products?limit=lots&offset=-1&deal=true")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["limit"], 50);
        assert_eq!(body["offset"], 0);
        let results = body["results"].as_array().unwrap();
        assert!(results.iter().all(|p| p["deal"] == true));
    }

    #[tokio::test]
    async fn test_text_search_is_url_decoded() {
        let (app, _state, _dir) = test_app().await;
        let (_, body) = send(&app, get_req("/products?q=home%20%26&limit=500")).await;
        let results = body["results"].as_array().unwrap();
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p["category"] == "Home & Kitchen"));
    }

    #[tokio::test]
    async fn test_product_by_id_and_not_found() {
        let (app, _state, _dir) = test_app().await;
        let (status, body) = send(&app, get_req("/products/p1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["product"]["id"], "p1");

        let (status, body) = send(&app, get_req("/products/p999999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "ok": false }));
    }

    #[tokio::test]
    async fn test_categories() {
        let (app, _state, _dir) = test_app().await;
        let (status, body) = send(&app, get_req("/products/categories")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_cart_round_trip_keeps_latest_snapshot() {
        let (app, state, _dir) = test_app().await;

        let (_, body) = send(&app, get_req("/cart")).await;
        assert_eq!(body, json!({ "ok": true, "cart": { "items": [] } }));

        let item = |qty: u32| json!({ "id": "p1", "title": "t", "price": 100, "qty": qty, "img": "" });
        let (status, _) = send(&app, post_json("/cart", json!({ "items": [item(1)] }))).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, post_json("/cart", json!({ "items": [item(3)] }))).await;
        assert_eq!(body, json!({ "ok": true }));

        let (_, body) = send(&app, get_req("/cart")).await;
        assert_eq!(body["cart"]["items"][0]["qty"], 3);
        assert!(body["cart"]["updatedAt"].is_string());
        assert_eq!(state.db.carts.len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_cart_without_items_stores_empty_snapshot() {
        let (app, state, _dir) = test_app().await;
        let (status, _) = send(&app, post_json("/cart", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, get_req("/cart")).await;
        assert_eq!(body["cart"]["items"], json!([]));
        assert_eq!(state.db.carts.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_malformed_cart_keeps_previous_snapshot() {
        let (app, state, _dir) = test_app().await;
        let good = json!({ "items": [{ "id": "p1", "title": "t", "price": 100, "qty": 2, "img": "" }] });
        let (status, _) = send(&app, post_json("/cart", good)).await;
        assert_eq!(status, StatusCode::OK);

        let bad = json!({ "items": [{ "id": "p2", "title": "u", "price": 50, "qty": "3" }] });
        let (status, body) = send(&app, post_json("/cart", bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "ok": false }));

        let (_, body) = send(&app, get_req("/cart")).await;
        assert_eq!(body["cart"]["items"][0]["id"], "p1");
        assert_eq!(body["cart"]["items"][0]["qty"], 2);
        assert_eq!(state.db.carts.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_form_endpoints_append() {
        let (app, state, _dir) = test_app().await;
        let (status, body) = send(&app, post_json("/contact", json!({ "name": "Ann", "msg": "hi" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Contact received");

        for path in ["/signin", "/location", "/gift"] {
            let (status, body) = send(&app, post_json(path, json!({ "x": 1 }))).await;
            assert_eq!(status, StatusCode::OK, "{}", path);
            assert_eq!(body, json!({ "ok": true }));
        }

        assert_eq!(state.db.contacts.len().await.unwrap(), 1);
        assert_eq!(state.db.users.len().await.unwrap(), 2);
        assert_eq!(state.db.gifts.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_storage_failure_is_500_ok_false() {
        let (app, state, _dir) = test_app().await;
        std::fs::write(state.db.gifts.path(), "garbage").unwrap();
        let (status, body) = send(&app, post_json("/gift", json!({ "to": "b" }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "ok": false }));
    }

    #[tokio::test]
    async fn test_unreadable_cart_log_reads_as_empty() {
        let (app, state, _dir) = test_app().await;
        std::fs::write(state.db.carts.path(), "garbage").unwrap();
        let (status, body) = send(&app, get_req("/cart")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cart"]["items"], json!([]));
    }
}
