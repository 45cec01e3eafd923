pub mod state;

use contracts::domain::a001_product::aggregate::Product;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::api;
use crate::domain::a002_cart::store::use_cart;
use crate::layout::modal_service::{use_modal, ActiveModal};
use crate::shared::toast::use_toast;
use state::{CatalogFilter, CatalogListState, PageRequest, PAGE_SIZE_OPTIONS};

/// Distance from the bottom of the page (px) at which the next page loads
const SCROLL_THRESHOLD: f64 = 240.0;

/// Контекст списка товаров: состояние и операции загрузки
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub state: RwSignal<CatalogListState>,
}

impl CatalogContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CatalogListState::default()),
        }
    }

    /// Применить фильтр: список начинается заново
    pub fn apply_filter(&self, filter: CatalogFilter) {
        if let Some(req) = self.state.try_update(|s| s.reset(filter)) {
            self.fetch(req);
        }
    }

    /// Update the filter in place (search box, category select)
    pub fn update_filter(&self, f: impl FnOnce(&mut CatalogFilter)) {
        let mut filter = self.state.with_untracked(|s| s.filter.clone());
        f(&mut filter);
        self.apply_filter(filter);
    }

    pub fn set_page_size(&self, page_size: usize) {
        if let Some(req) = self.state.try_update(|s| s.set_page_size(page_size)) {
            self.fetch(req);
        }
    }

    pub fn load_more(&self) {
        if let Some(req) = self.state.try_update(|s| s.next_page()).flatten() {
            self.fetch(req);
        }
    }

    fn fetch(self, req: PageRequest) {
        spawn_local(async move {
            let result = api::fetch_page(&req.params).await;
            self.state.update(|s| {
                if !s.apply(req.seq, result) {
                    log::debug!("dropped stale product page (seq {})", req.seq);
                }
            });
        });
    }
}

impl Default for CatalogContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}

fn near_bottom() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let inner_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let body_height = window
        .document()
        .and_then(|d| d.body())
        .map(|b| b.offset_height() as f64)
        .unwrap_or(0.0);
    inner_height + scroll_y >= body_height - SCROLL_THRESHOLD
}

/// Scroll the product grid into view (after a shortcut filter)
pub fn scroll_to_grid() {
    if let Some(grid) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("productGrid"))
    {
        grid.scroll_into_view();
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart();
    let toast = use_toast();
    let modal = use_modal();
    let (added, set_added) = signal(false);

    let on_add = {
        let product = product.clone();
        move |_| {
            cart.add(&product);
            toast.show(format!("{} added to cart", product.title));
            set_added.set(true);
            spawn_local(async move {
                TimeoutFuture::new(900).await;
                set_added.set(false);
            });
        }
    };
    let details_id = product.id.clone();

    view! {
        <div class="product-card" role="listitem" tabindex="0" data-id=product.id.clone()>
            <img src=product.img.clone() alt=product.title.clone() loading="lazy" />
            <div class="product-title">{product.title.clone()}</div>
            <div class="product-category">{product.category.as_str()}</div>
            <div class="product-price">{format!("₹{}", product.price)}</div>
            <div class="product-actions">
                <button
                    class=move || if added.get() { "btn add-cart flash" } else { "btn add-cart" }
                    aria-label=format!("Add {} to cart", product.title)
                    on:click=on_add
                >
                    {move || if added.get() { "Added ✓" } else { "Add to cart" }}
                </button>
                <button
                    class="btn details-btn"
                    aria-label=format!("View details for {}", product.title)
                    on:click=move |_| modal.show(ActiveModal::Details(details_id.clone()))
                >
                    "Details"
                </button>
            </div>
        </div>
    }
}

/// Выбор размера страницы
#[component]
pub fn PageSizeSelect() -> impl IntoView {
    let catalog = use_catalog();
    view! {
        <select
            id="perPageSelect"
            class="page-size-select"
            on:change=move |ev| {
                let val = event_target_value(&ev).parse().unwrap_or(PAGE_SIZE_OPTIONS[0]);
                catalog.set_page_size(val);
            }
            prop:value=move || catalog.state.with(|s| s.page_size.to_string())
        >
            {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                view! {
                    <option
                        value=size.to_string()
                        selected=move || catalog.state.with(|s| s.page_size == size)
                    >
                        {size.to_string()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn ProductGrid() -> impl IntoView {
    let catalog = use_catalog();

    // Infinite scroll: load more when near bottom
    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let idle = catalog
            .state
            .with_untracked(|s| !s.loading && s.has_more() && s.total.is_some());
        if idle && near_bottom() {
            catalog.load_more();
        }
    });

    view! {
        <section class="catalog">
            <div class="catalog-toolbar">
                <span id="resultsText">{move || catalog.state.with(|s| s.results_text())}</span>
                <PageSizeSelect />
            </div>
            <div id="productGrid" class="product-grid" role="list">
                <For
                    each=move || catalog.state.with(|s| s.products.clone())
                    key=|p: &Product| p.id.clone()
                    children=move |product: Product| view! { <ProductCard product=product /> }
                />
            </div>
            <Show when=move || catalog.state.with(|s| s.total.is_some() && s.has_more())>
                <button
                    id="loadMoreBtn"
                    class="btn"
                    disabled=move || catalog.state.with(|s| s.loading)
                    on:click=move |_| catalog.load_more()
                >
                    "Load more"
                </button>
            </Show>
        </section>
    }
}
