use chrono::Utc;
use contracts::domain::a002_cart::aggregate::{CartItem, CartSnapshot, CartView};

use crate::shared::data::json_log::JsonLog;

/// Записать снимок корзины в журнал
pub async fn save_snapshot(log: &JsonLog, items: Vec<CartItem>) -> anyhow::Result<CartSnapshot> {
    let snapshot = CartSnapshot {
        items,
        updated_at: Utc::now(),
    };
    log.append(&snapshot).await?;
    tracing::debug!("Cart snapshot saved: {} items", snapshot.items.len());
    Ok(snapshot)
}

/// Последний снимок; пустая корзина, если журнал пуст
pub async fn latest(log: &JsonLog) -> anyhow::Result<CartView> {
    let last: Option<CartSnapshot> = log.last().await?;
    Ok(last.map(CartView::from).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_cart::aggregate::CartEntry;

    fn item(id: &str, qty: u32) -> CartItem {
        CartItem {
            id: id.into(),
            entry: CartEntry {
                title: id.to_uppercase(),
                price: 10,
                qty,
                img: String::new(),
            },
        }
    }

    #[tokio::test]
    async fn test_latest_snapshot_wins() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonLog::new(dir.path().join("carts.json"));
        log.ensure_exists().await.unwrap();

        assert!(latest(&log).await.unwrap().items.is_empty());

        save_snapshot(&log, vec![item("p1", 1)]).await.unwrap();
        save_snapshot(&log, vec![item("p1", 2), item("p2", 1)]).await.unwrap();

        let view = latest(&log).await.unwrap();
        assert_eq!(view.items, vec![item("p1", 2), item("p2", 1)]);
        assert!(view.updated_at.is_some());
        assert_eq!(log.len().await.unwrap(), 2);
    }
}
