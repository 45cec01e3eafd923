use serde::{Deserialize, Serialize};

/// Категория товара витрины (фиксированный набор из 7 значений)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Electronics,
    #[serde(rename = "Home & Kitchen")]
    HomeAndKitchen,
    Tools,
    Books,
    Fashion,
    Sports,
    Beauty,
}

impl ProductCategory {
    /// Все категории в порядке генерации каталога
    pub const ALL: [ProductCategory; 7] = [
        ProductCategory::Electronics,
        ProductCategory::HomeAndKitchen,
        ProductCategory::Tools,
        ProductCategory::Books,
        ProductCategory::Fashion,
        ProductCategory::Sports,
        ProductCategory::Beauty,
    ];

    /// Название категории, как оно хранится в JSON и приходит в фильтре
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::HomeAndKitchen => "Home & Kitchen",
            ProductCategory::Tools => "Tools",
            ProductCategory::Books => "Books",
            ProductCategory::Fashion => "Fashion",
            ProductCategory::Sports => "Sports",
            ProductCategory::Beauty => "Beauty",
        }
    }

    /// Категория для товара с порядковым номером `index` (начиная с 1)
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&ProductCategory::HomeAndKitchen).unwrap();
        assert_eq!(json, "\"Home & Kitchen\"");
        let parsed: ProductCategory = serde_json::from_str("\"Books\"").unwrap();
        assert_eq!(parsed, ProductCategory::Books);
    }

    #[test]
    fn test_for_index_cycles_from_home_and_kitchen() {
        assert_eq!(ProductCategory::for_index(1), ProductCategory::HomeAndKitchen);
        assert_eq!(ProductCategory::for_index(7), ProductCategory::Electronics);
        assert_eq!(ProductCategory::for_index(10), ProductCategory::Books);
    }
}
