use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::query::ProductQuery;
use std::collections::BTreeSet;
use std::path::Path;

use super::repository;
use crate::shared::config::CatalogConfig;

/// Одна страница результата запроса к каталогу
#[derive(Debug, Clone)]
pub struct ProductPage {
    /// Количество товаров после фильтрации, до нарезки на страницу
    pub total: usize,
    pub results: Vec<Product>,
}

/// In-memory catalog, loaded once at startup and never mutated afterwards
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Сгенерировать каталог при первом запуске и загрузить его в память
    pub async fn open(path: &Path, config: &CatalogConfig) -> anyhow::Result<Self> {
        repository::ensure_products(path, config).await?;
        let products = repository::load_products(path).await?;
        tracing::info!("Catalog loaded: {} products", products.len());
        Ok(Self::new(products))
    }

    /// Filter in generation order, then slice `[offset, offset + limit)`
    pub fn query(&self, query: &ProductQuery) -> ProductPage {
        let filtered: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.matches(p))
            .collect();
        let total = filtered.len();
        let results = filtered
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect();
        ProductPage { total, results }
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Категории, реально присутствующие в каталоге, по алфавиту
    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
