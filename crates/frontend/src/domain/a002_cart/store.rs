//! Client-side cart: the reducer from `contracts` behind a signal,
//! persisted to localStorage and mirrored to the server after each change.

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_cart::aggregate::{Cart, CartItem};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::storage;

pub const CART_STORAGE_KEY: &str = "amezone_cart";

#[derive(Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
}

impl CartStore {
    /// Восстановить корзину из localStorage
    pub fn load() -> Self {
        let cart = storage::load_raw(CART_STORAGE_KEY)
            .map(|raw| Cart::restore(&raw))
            .unwrap_or_default();
        Self {
            cart: RwSignal::new(cart),
        }
    }

    pub fn add(&self, product: &Product) {
        self.mutate(|c| c.add(product));
    }

    pub fn add_many(&self, product: &Product, n: u32) {
        self.mutate(|c| c.add_many(product, n));
    }

    pub fn set_qty(&self, id: &str, n: i64) {
        self.mutate(|c| c.set_qty(id, n));
    }

    pub fn remove(&self, id: &str) {
        self.mutate(|c| c.remove(id));
    }

    pub fn clear(&self) {
        self.mutate(|c| c.clear());
    }

    pub fn count(&self) -> u64 {
        self.cart.with(|c| c.item_count())
    }

    pub fn total(&self) -> i64 {
        self.cart.with(|c| c.total())
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.cart.with(|c| c.items())
    }

    pub fn is_empty(&self) -> bool {
        self.cart.with(|c| c.is_empty())
    }

    fn mutate(&self, f: impl FnOnce(&mut Cart)) {
        let Some(items) = self.cart.try_update(|c| {
            f(c);
            storage::save(CART_STORAGE_KEY, &*c);
            c.items()
        }) else {
            return;
        };

        // Server copy is best-effort; the local cart stays authoritative
        spawn_local(async move {
            if let Err(e) = api::sync(items).await {
                log::warn!("Cart sync failed: {}", e);
            }
        });
    }
}

pub fn use_cart() -> CartStore {
    expect_context::<CartStore>()
}
