use serde::{Deserialize, Serialize};

use super::aggregate::Product;

pub const DEFAULT_LIMIT: usize = 50;
pub const DEFAULT_OFFSET: usize = 0;

/// Raw query string of `GET /products`.
///
/// Every field is kept as a string so that malformed numbers never reject
/// the request; [`ProductQuery::from_params`] coerces them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

/// Нормализованный запрос к каталогу
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Lowercased text filter, empty = no filter
    pub q: String,
    /// Exact category name, empty = no filter
    pub category: String,
    pub deal: bool,
    pub limit: usize,
    pub offset: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            category: String::new(),
            deal: false,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl ProductQuery {
    pub fn from_params(params: &ProductListParams) -> Self {
        Self {
            q: params
                .q
                .as_deref()
                .map(|s| s.to_lowercase())
                .unwrap_or_default(),
            category: params.category.clone().unwrap_or_default(),
            deal: params.deal.as_deref() == Some("true"),
            limit: parse_or(params.limit.as_deref(), DEFAULT_LIMIT),
            offset: parse_or(params.offset.as_deref(), DEFAULT_OFFSET),
        }
    }

    /// Conjunction of all active filters
    pub fn matches(&self, product: &Product) -> bool {
        if !self.q.is_empty() && !product.matches_text(&self.q) {
            return false;
        }
        if !self.category.is_empty() && product.category.as_str() != self.category {
            return false;
        }
        if self.deal && !product.deal {
            return false;
        }
        true
    }
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Ответ `GET /products`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub ok: bool,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub results: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::product_category::ProductCategory;

    fn product(title: &str, category: ProductCategory, deal: bool) -> Product {
        Product {
            id: "p1".into(),
            title: title.into(),
            category,
            price: 100,
            img: String::new(),
            deal,
        }
    }

    fn params(pairs: &[(&str, &str)]) -> ProductListParams {
        let mut p = ProductListParams::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "q" => p.q = v,
                "category" => p.category = v,
                "deal" => p.deal = v,
                "limit" => p.limit = v,
                "offset" => p.offset = v,
                _ => unreachable!(),
            }
        }
        p
    }

    #[test]
    fn test_defaults_when_missing() {
        let q = ProductQuery::from_params(&ProductListParams::default());
        assert_eq!(q, ProductQuery::default());
    }

    #[test]
    fn test_malformed_numbers_fail_open() {
        let q = ProductQuery::from_params(&params(&[("limit", "ten"), ("offset", "-5")]));
        assert_eq!(q.limit, DEFAULT_LIMIT);
        assert_eq!(q.offset, DEFAULT_OFFSET);

        let q = ProductQuery::from_params(&params(&[("limit", "500"), ("offset", " 20 ")]));
        assert_eq!(q.limit, 500);
        assert_eq!(q.offset, 20);
    }

    #[test]
    fn test_deal_only_enabled_by_literal_true() {
        assert!(ProductQuery::from_params(&params(&[("deal", "true")])).deal);
        assert!(!ProductQuery::from_params(&params(&[("deal", "1")])).deal);
        assert!(!ProductQuery::from_params(&params(&[("deal", "TRUE")])).deal);
    }

    #[test]
    fn test_text_matches_title_or_category_case_insensitive() {
        let q = ProductQuery::from_params(&params(&[("q", "KITCHEN")]));
        assert!(q.matches(&product("Anything", ProductCategory::HomeAndKitchen, false)));
        assert!(q.matches(&product("Kitchen scale", ProductCategory::Tools, false)));
        assert!(!q.matches(&product("Hammer", ProductCategory::Tools, false)));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let q = ProductQuery::from_params(&params(&[
            ("q", "product"),
            ("category", "Books"),
            ("deal", "true"),
        ]));
        assert!(q.matches(&product("Books Product #3", ProductCategory::Books, true)));
        assert!(!q.matches(&product("Books Product #3", ProductCategory::Books, false)));
        assert!(!q.matches(&product("Tools Product #2", ProductCategory::Tools, true)));
        assert!(!q.matches(&product("Novel", ProductCategory::Books, true)));
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let q = ProductQuery::from_params(&params(&[("category", "Groceries")]));
        for c in ProductCategory::ALL {
            assert!(!q.matches(&product("x", c, true)));
        }
    }
}
