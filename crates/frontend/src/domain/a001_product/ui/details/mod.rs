use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::list::use_catalog;
use crate::domain::a002_cart::store::use_cart;
use crate::layout::modal_service::{use_modal, Modal};
use crate::shared::toast::use_toast;

/// Parse the quantity field; anything below 1 counts as 1
fn parse_qty(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).max(1)
}

#[derive(Clone, Debug, PartialEq)]
enum DetailsLoad {
    Loading,
    Ready(Product),
    Missing,
    Failed(String),
}

/// Карточка товара: сначала из уже загруженной страницы, иначе с сервера
#[component]
pub fn ProductDetails(id: String) -> impl IntoView {
    let catalog = use_catalog();
    let cart = use_cart();
    let toast = use_toast();
    let modal = use_modal();

    let load = RwSignal::new(DetailsLoad::Loading);
    let qty = RwSignal::new("1".to_string());

    match catalog.state.with_untracked(|s| s.find(&id).cloned()) {
        Some(product) => load.set(DetailsLoad::Ready(product)),
        None => {
            let id = id.clone();
            spawn_local(async move {
                let next = match api::fetch_by_id(&id).await {
                    Ok(Some(product)) => DetailsLoad::Ready(product),
                    Ok(None) => DetailsLoad::Missing,
                    Err(e) => {
                        log::error!("Failed to load product {}: {}", id, e);
                        DetailsLoad::Failed(e)
                    }
                };
                load.set(next);
            });
        }
    }

    let body = move || match load.get() {
        DetailsLoad::Loading => view! { <p class="muted">"Loading..."</p> }.into_any(),
        DetailsLoad::Missing => view! { <p class="muted">"Product not found"</p> }.into_any(),
        DetailsLoad::Failed(e) => view! { <p class="error">{e}</p> }.into_any(),
        DetailsLoad::Ready(product) => {
            let on_add = {
                let product = product.clone();
                move |_| {
                    let n = parse_qty(&qty.get_untracked());
                    cart.add_many(&product, n);
                    toast.show(format!("{} added to cart", product.title));
                    modal.hide();
                }
            };
            view! {
                <div class="details">
                    <img src=product.img.clone() alt=product.title.clone() />
                    <div class="details-info">
                        <h4 id="detailTitle">{product.title.clone()}</h4>
                        <div class="product-category">{product.category.as_str()}</div>
                        <div class="product-price">{format!("₹{}", product.price)}</div>
                        {product.deal.then(|| view! { <span class="deal-badge">"Deal"</span> })}
                        <label>
                            "Qty "
                            <input
                                id="detailQty"
                                type="number"
                                min="1"
                                prop:value=move || qty.get()
                                on:input=move |ev| qty.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn" on:click=on_add>"Add to cart"</button>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Modal title="Product details">
            {body}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qty() {
        assert_eq!(parse_qty("3"), 3);
        assert_eq!(parse_qty(" 2 "), 2);
        assert_eq!(parse_qty("0"), 1);
        assert_eq!(parse_qty("-4"), 1);
        assert_eq!(parse_qty("abc"), 1);
    }
}
