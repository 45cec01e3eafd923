use crate::domain::a001_product::ui::list::state::CatalogFilter;
use crate::domain::a001_product::ui::list::CatalogContext;
use crate::domain::a002_cart::store::CartStore;
use crate::domain::a003_submission::location::SavedLocation;
use crate::layout::modal_service::ModalService;
use crate::layout::Shell;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shared client state, provided once for the whole tree
    provide_context(CartStore::load());
    provide_context(ToastService::new());
    provide_context(ModalService::new());
    provide_context(SavedLocation::load());

    let catalog = CatalogContext::new();
    provide_context(catalog);
    catalog.apply_filter(CatalogFilter::default());

    view! {
        <Shell />
    }
}
