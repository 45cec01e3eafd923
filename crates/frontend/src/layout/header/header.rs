use contracts::enums::product_category::ProductCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::list::state::CatalogFilter;
use crate::domain::a001_product::ui::list::{scroll_to_grid, use_catalog};
use crate::domain::a002_cart::store::use_cart;
use crate::domain::a003_submission::location::use_location;
use crate::layout::modal_service::{use_modal, ActiveModal};

fn default_categories() -> Vec<String> {
    ProductCategory::ALL
        .iter()
        .map(|c| c.as_str().to_string())
        .collect()
}

#[component]
fn CategorySelect() -> impl IntoView {
    let catalog = use_catalog();
    let categories = RwSignal::new(default_categories());

    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(list) if !list.is_empty() => categories.set(list),
            Ok(_) => {}
            Err(e) => log::warn!("Failed to load categories: {}", e),
        }
    });

    view! {
        <select
            id="categoryFilter"
            aria-label="Category"
            prop:value=move || catalog.state.with(|s| s.filter.category.clone())
            on:change=move |ev| {
                let value = event_target_value(&ev);
                catalog.update_filter(|f| f.category = value);
            }
        >
            <option value="">"All"</option>
            {move || {
                categories
                    .get()
                    .into_iter()
                    .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let catalog = use_catalog();
    let cart = use_cart();
    let modal = use_modal();
    let location = use_location();

    let shortcut = move |filter: CatalogFilter| {
        catalog.apply_filter(filter);
        scroll_to_grid();
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a class="logo" href="#" on:click=move |ev| {
                    ev.prevent_default();
                    catalog.apply_filter(CatalogFilter::default());
                }>"Amezone"</a>
                <button class="header__location" on:click=move |_| modal.show(ActiveModal::Location)>
                    <span class="add1">"Deliver to"</span>
                    <span class="add2">{move || location.label()}</span>
                </button>
                <div class="header__search">
                    <CategorySelect />
                    <input
                        id="searchInput"
                        type="search"
                        placeholder="Search Amezone"
                        prop:value=move || catalog.state.with(|s| s.filter.q.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev).trim().to_string();
                            catalog.update_filter(|f| f.q = value);
                        }
                    />
                </div>
            </div>
            <div class="header__actions">
                <button class="button button--ghost" on:click=move |_| modal.show(ActiveModal::Signin)>"Sign in"</button>
                <button class="button button--ghost" on:click=move |_| modal.show(ActiveModal::Cart)>
                    "Cart "
                    <span id="cartCount" class="badge">{move || cart.count()}</span>
                </button>
            </div>
            <nav class="header__nav">
                <button on:click=move |_| shortcut(CatalogFilter::deals())>"Today's Deals"</button>
                <button on:click=move |_| shortcut(CatalogFilter::category_deals(ProductCategory::Electronics.as_str()))>
                    "Shop deals in Electronics"
                </button>
                <button on:click=move |_| modal.show(ActiveModal::Author)>"Books by author"</button>
                <button on:click=move |_| modal.show(ActiveModal::Gift)>"Gift Cards"</button>
                <button on:click=move |_| modal.show(ActiveModal::Sell)>"Sell"</button>
                <button on:click=move |_| modal.show(ActiveModal::Contact)>"Customer Service"</button>
            </nav>
        </header>
    }
}
