use contracts::domain::a002_cart::aggregate::CartItem;
use leptos::prelude::*;

use crate::domain::a002_cart::store::use_cart;
use crate::layout::modal_service::Modal;
use crate::shared::toast::use_toast;

/// Quantity input value; unparsable input means "remove"
fn parse_qty_input(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let cart = use_cart();
    let id_qty = item.id.clone();
    let id_remove = item.id.clone();
    let line_total = item.entry.line_total();

    view! {
        <div class="cart-item" data-id=item.id.clone()>
            <img src=item.entry.img.clone() alt=item.entry.title.clone() />
            <div class="cart-item-info">
                <div class="cart-item-title">{item.entry.title.clone()}</div>
                <div class="cart-item-price">{format!("₹{} × {} = ₹{}", item.entry.price, item.entry.qty, line_total)}</div>
            </div>
            <input
                class="qty-input"
                type="number"
                min="0"
                aria-label="Quantity"
                prop:value=item.entry.qty.to_string()
                on:change=move |ev| cart.set_qty(&id_qty, parse_qty_input(&event_target_value(&ev)))
            />
            <button class="btn remove-btn" on:click=move |_| cart.remove(&id_remove)>
                "Remove"
            </button>
        </div>
    }
}

/// Корзина: позиции, итог, очистка и демонстрационное оформление
#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = use_cart();
    let toast = use_toast();

    let on_checkout = move |_| {
        if cart.is_empty() {
            toast.show("Your cart is empty");
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "Checkout demo: {} items, total ₹{}",
                cart.count(),
                cart.total()
            ));
        }
    };

    view! {
        <Modal title="Your cart">
            <div id="cartItems" class="cart-items">
                <Show
                    when=move || !cart.is_empty()
                    fallback=|| view! { <p class="muted">"Your cart is empty"</p> }
                >
                    <For
                        each=move || cart.items()
                        key=|item: &CartItem| (item.id.clone(), item.entry.qty)
                        children=move |item: CartItem| view! { <CartLine item=item /> }
                    />
                </Show>
            </div>
            <div class="cart-footer">
                <span id="cartTotal">{move || format!("Total: ₹{}", cart.total())}</span>
                <button class="btn" on:click=move |_| cart.clear()>"Clear"</button>
                <button class="btn primary" on:click=on_checkout>"Checkout"</button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qty_input() {
        assert_eq!(parse_qty_input("4"), 4);
        assert_eq!(parse_qty_input("0"), 0);
        assert_eq!(parse_qty_input("-1"), -1);
        assert_eq!(parse_qty_input(""), 0);
    }
}
