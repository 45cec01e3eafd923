use contracts::domain::a001_product::aggregate::Product;
use contracts::enums::product_category::ProductCategory;
use rand::Rng;

const PRICE_MIN: i64 = 100;
const PRICE_SPAN: i64 = 5000;

/// Синтетический каталог из `size` товаров (`p1`..`p{size}`)
pub fn generate_products<R: Rng>(size: usize, deal_ratio: f64, rng: &mut R) -> Vec<Product> {
    let deal_ratio = deal_ratio.clamp(0.0, 1.0);
    (1..=size)
        .map(|i| {
            let category = ProductCategory::for_index(i);
            let id = Product::id_for_index(i);
            let img = format!(
                "https://picsum.photos/seed/{}/480/320",
                urlencoding::encode(&id)
            );
            Product {
                title: format!("{} Product #{}", category, i),
                category,
                price: rng.gen_range(PRICE_MIN..PRICE_MIN + PRICE_SPAN),
                img,
                deal: rng.gen_bool(deal_ratio),
                id,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let products = generate_products(500, 0.12, &mut rng);
        assert_eq!(products.len(), 500);

        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 500);
        assert_eq!(products[0].id, "p1");
        assert_eq!(products[0].title, "Home & Kitchen Product #1");
        assert_eq!(products[0].img, "https://picsum.photos/seed/p1/480/320");

        let categories: HashSet<_> = products.iter().map(|p| p.category).collect();
        assert_eq!(categories.len(), 7);
        assert!(products.iter().all(|p| (100..5100).contains(&p.price)));
    }

    #[test]
    fn test_deal_ratio_is_roughly_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        let products = generate_products(5000, 0.12, &mut rng);
        let deals = products.iter().filter(|p| p.deal).count();
        assert!((400..800).contains(&deals), "deals = {}", deals);

        let none = generate_products(50, 0.0, &mut rng);
        assert!(none.iter().all(|p| !p.deal));
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = generate_products(20, 0.5, &mut StdRng::seed_from_u64(1));
        let b = generate_products(20, 0.5, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
