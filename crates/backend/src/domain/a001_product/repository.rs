use anyhow::Context;
use contracts::domain::a001_product::aggregate::Product;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use super::generator::generate_products;
use crate::shared::config::CatalogConfig;

/// Сгенерировать файл каталога, если его ещё нет.
/// Существующий файл никогда не перезаписывается.
pub async fn ensure_products(path: &Path, config: &CatalogConfig) -> anyhow::Result<()> {
    if tokio::fs::try_exists(path).await? {
        return Ok(());
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let products = generate_products(config.size, config.deal_ratio, &mut rng);
    let raw = serde_json::to_string_pretty(&products)?;
    tokio::fs::write(path, raw)
        .await
        .with_context(|| format!("write {}", path.display()))?;

    tracing::info!(
        "Generated {} with {} items",
        path.display(),
        products.len()
    );
    Ok(())
}

/// Загрузить весь каталог из файла
pub async fn load_products(path: &Path) -> anyhow::Result<Vec<Product>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let products: Vec<Product> =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(products)
}
