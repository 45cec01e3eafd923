//! API utilities for frontend-backend communication
//!
//! The backend serves the client bundle itself, so every request goes to
//! the same origin with a relative path.

use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};

/// Build a request path with a query string encoded by `serde_qs`
///
/// # Example
/// ```rust,ignore
/// let url = with_query("/products", &params);
/// ```
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        Ok(_) => path.to_string(),
        Err(e) => {
            log::warn!("Failed to encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}

/// GET a JSON document. Non-2xx statuses are errors.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body and parse the JSON answer
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to encode body: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::query::ProductListParams;

    #[test]
    fn test_with_query_skips_empty_params() {
        assert_eq!(with_query("/products", &ProductListParams::default()), "/products");
    }

    #[test]
    fn test_with_query_encodes_values() {
        let params = ProductListParams {
            category: Some("Home & Kitchen".into()),
            limit: Some("50".into()),
            ..Default::default()
        };
        let url = with_query("/products", &params);
        assert!(url.starts_with("/products?"));
        assert!(url.contains("limit=50"));
        assert!(url.contains("category=Home"));
        assert!(!url.contains("& "));
    }
}
