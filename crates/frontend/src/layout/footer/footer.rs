use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::ui::list::state::CatalogFilter;
use crate::domain::a001_product::ui::list::use_catalog;
use crate::domain::a002_cart::store::use_cart;
use crate::layout::modal_service::{use_modal, ActiveModal};
use contracts::shared::api_response::OkResponse;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Server: Online",
            ServerStatus::Offline => "Server: Offline",
            ServerStatus::Checking => "Server: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

async fn ping_server() -> bool {
    matches!(
        crate::shared::api_utils::get_json::<OkResponse>("/health").await,
        Ok(OkResponse { ok: true, .. })
    )
}

/// Нижняя навигация (мобильная) и индикатор сервера
#[component]
pub fn BottomNav() -> impl IntoView {
    let catalog = use_catalog();
    let cart = use_cart();
    let modal = use_modal();
    let status = RwSignal::new(ServerStatus::Checking);

    spawn_local(async move {
        let online = ping_server().await;
        status.set(if online {
            ServerStatus::Online
        } else {
            ServerStatus::Offline
        });
    });

    let go_home = move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        catalog.apply_filter(CatalogFilter::default());
    };

    view! {
        <footer data-zone="footer" class="bottom-nav">
            <button id="bnHome" on:click=go_home>"Home"</button>
            <button id="bnDeals" on:click=move |_| catalog.apply_filter(CatalogFilter::deals())>"Deals"</button>
            <button id="bnGift" on:click=move |_| modal.show(ActiveModal::Gift)>"Gift"</button>
            <button id="bnCart" on:click=move |_| modal.show(ActiveModal::Cart)>
                "Cart "
                <span id="bnCartCount" class="badge">{move || cart.count()}</span>
            </button>
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}
