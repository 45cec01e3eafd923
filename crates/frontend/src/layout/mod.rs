pub mod footer;
pub mod header;
pub mod modal_service;

use leptos::prelude::*;

use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a001_product::ui::list::ProductGrid;
use crate::domain::a002_cart::ui::CartPanel;
use crate::domain::a003_submission::ui::form::FormKind;
use crate::domain::a003_submission::ui::{AuthorSearchModal, SubmissionModal};
use crate::shared::toast::ToastHost;
use modal_service::{use_modal, ActiveModal};

/// Рендерит открытое модальное окно (не больше одного)
#[component]
pub fn ModalHost() -> impl IntoView {
    let modal = use_modal();

    move || match modal.active() {
        None => view! { <></> }.into_any(),
        Some(ActiveModal::Cart) => view! { <CartPanel /> }.into_any(),
        Some(ActiveModal::Details(id)) => view! { <ProductDetails id=id /> }.into_any(),
        Some(ActiveModal::Author) => view! { <AuthorSearchModal /> }.into_any(),
        Some(ActiveModal::Contact) => view! { <SubmissionModal kind=FormKind::Contact /> }.into_any(),
        Some(ActiveModal::Signin) => view! { <SubmissionModal kind=FormKind::Signin /> }.into_any(),
        Some(ActiveModal::Sell) => view! { <SubmissionModal kind=FormKind::Sell /> }.into_any(),
        Some(ActiveModal::Location) => view! { <SubmissionModal kind=FormKind::Location /> }.into_any(),
        Some(ActiveModal::Gift) => view! { <SubmissionModal kind=FormKind::Gift /> }.into_any(),
    }
}

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (search, category, cart, nav)    |
/// +------------------------------------------+
/// |  Product grid                            |
/// +------------------------------------------+
/// |  Bottom nav                              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                <ProductGrid />
            </main>
            <footer::BottomNav />
            <ModalHost />
            <ToastHost />
        </div>
    }
}
