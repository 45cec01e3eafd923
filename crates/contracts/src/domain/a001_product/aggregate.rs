use serde::{Deserialize, Serialize};

use crate::enums::product_category::ProductCategory;

/// Товар каталога витрины
///
/// Каталог генерируется сервером один раз и после этого не меняется,
/// поэтому агрегат не несёт метаданных версии или удаления.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Идентификатор вида `p{N}`
    pub id: String,
    pub title: String,
    pub category: ProductCategory,
    /// Цена в целых единицах валюты
    pub price: i64,
    pub img: String,
    /// Признак акционного товара
    pub deal: bool,
}

impl Product {
    /// Идентификатор товара с порядковым номером `index`
    pub fn id_for_index(index: usize) -> String {
        format!("p{}", index)
    }

    /// Case-insensitive substring match against title or category name.
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}

/// Ответ `GET /products/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub ok: bool,
    pub product: Product,
}

/// Ответ `GET /products/categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub ok: bool,
    pub categories: Vec<String>,
}
