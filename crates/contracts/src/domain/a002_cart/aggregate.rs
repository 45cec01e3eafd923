use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_product::aggregate::Product;

/// Позиция корзины (ключ: id товара)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub title: String,
    pub price: i64,
    pub qty: u32,
    pub img: String,
}

impl CartEntry {
    /// `price * qty`, saturating (prices restored from storage are untrusted)
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.qty))
    }
}

/// Позиция корзины вместе с id товара, в том виде, в каком она уходит на сервер
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    #[serde(flatten)]
    pub entry: CartEntry,
}

/// Cart reducer.
///
/// Maps product id to entry. An entry is either absent or present with
/// `qty >= 1`; a transition that would leave `qty == 0` removes the entry.
/// Serialized as a plain JSON object `{ "<id>": { title, price, qty, img } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<String, CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a cart persisted with `serde_json`. Unreadable input yields an
    /// empty cart, zero-quantity entries are dropped.
    pub fn restore(raw: &str) -> Self {
        let mut cart: Cart = serde_json::from_str(raw).unwrap_or_default();
        cart.entries.retain(|_, e| e.qty > 0);
        cart
    }

    /// absent → qty=1, present → qty+1
    pub fn add(&mut self, product: &Product) {
        self.add_many(product, 1);
    }

    /// Same as `n` consecutive [`Cart::add`] calls
    pub fn add_many(&mut self, product: &Product, n: u32) {
        if n == 0 {
            return;
        }
        let entry = self
            .entries
            .entry(product.id.clone())
            .or_insert_with(|| CartEntry {
                title: product.title.clone(),
                price: product.price,
                qty: 0,
                img: product.img.clone(),
            });
        entry.qty = entry.qty.saturating_add(n);
    }

    /// `n <= 0` removes the entry, otherwise sets the quantity.
    /// Absent ids are left untouched.
    pub fn set_qty(&mut self, id: &str, n: i64) {
        if n <= 0 {
            self.entries.remove(id);
            return;
        }
        if let Some(entry) = self.entries.get_mut(id) {
            entry.qty = u32::try_from(n).unwrap_or(u32::MAX);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: &str) -> Option<&CartEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Количество единиц товара (для бейджа корзины)
    pub fn item_count(&self) -> u64 {
        self.entries.values().map(|e| u64::from(e.qty)).sum()
    }

    /// Сумма `price * qty` по всем позициям
    pub fn total(&self) -> i64 {
        self.entries
            .values()
            .fold(0i64, |acc, e| acc.saturating_add(e.line_total()))
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.entries
            .iter()
            .map(|(id, entry)| CartItem {
                id: id.clone(),
                entry: entry.clone(),
            })
            .collect()
    }
}

/// Тело `POST /cart`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartSyncRequest {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// Снимок корзины в серверном журнале
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Последний снимок, как его отдаёт `GET /cart`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    #[serde(
        rename = "updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CartSnapshot> for CartView {
    fn from(s: CartSnapshot) -> Self {
        Self {
            items: s.items,
            updated_at: Some(s.updated_at),
        }
    }
}

/// Ответ `GET /cart`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub ok: bool,
    pub cart: CartView,
}
